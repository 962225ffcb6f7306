//! Pure parsing of inbound link hashes into a time span and boolean flags.

use crate::hash::query::QueryFlags;
use crate::hash::time_fragment::{TimeSpan, parse_time_span};
use tracing::debug;

pub mod query;
pub mod time_fragment;

const TIME_KEY: &str = "t";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedHash {
	pub time_span: Option<TimeSpan>,
	pub query: QueryFlags,
}

/// Split a hash like `#t=1:20,2:30&loop` or `00:10-00:20&autoplay` into its parts.
///
/// The first valid time span wins, invalid ones are dropped.
pub fn parse_hash(hash: &str) -> ParsedHash {
	let hash = hash.trim();
	let hash = hash.strip_prefix('#').unwrap_or(hash);

	let mut parsed = ParsedHash::default();
	for part in hash.split('&').map(str::trim).filter(|part| !part.is_empty()) {
		match part.split_once('=') {
			Some((TIME_KEY, span_text)) => match parse_time_span(span_text) {
				Ok(span) => parsed.add_time_span(span, hash),
				Err(error) => debug!("Ignoring invalid time span '{span_text}' in hash '{hash}': {error}"),
			},
			Some(_) => parsed.query.insert_pair(part),
			None if looks_like_time(part) => match parse_time_span(part) {
				Ok(span) => parsed.add_time_span(span, hash),
				// bare flags like `2x` only look like a time
				Err(_) => parsed.query.insert_pair(part),
			},
			None => parsed.query.insert_pair(part),
		}
	}

	parsed
}

impl ParsedHash {
	fn add_time_span(&mut self, span: TimeSpan, hash: &str) {
		if self.time_span.is_none() {
			self.time_span = Some(span);
		} else {
			debug!("Ignoring additional time span {span:?} in hash '{hash}'.");
		}
	}
}

fn looks_like_time(part: &str) -> bool {
	part.starts_with("npt:") || part.starts_with(|character: char| character.is_ascii_digit())
}
