use crate::state::Fragment;
use thiserror::Error;

const NPT_PREFIX: &str = "npt:";
const RANGE_SEPARATORS: [char; 2] = [',', '-'];

/// Time range parsed from a media fragment such as `t=1:20,2:30` or `00:10-00:20`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeSpan {
	pub start: f64,
	pub end: f64,
}

impl TimeSpan {
	#[allow(clippy::float_cmp)]
	pub fn is_timestamp(&self) -> bool {
		self.start == self.end
	}
}

impl From<TimeSpan> for Fragment {
	fn from(TimeSpan { start, end }: TimeSpan) -> Self {
		Fragment::new(start, end)
	}
}

#[derive(Error, Debug, PartialEq)]
pub enum TimeFragmentError {
	#[error("Time fragment was empty.")]
	Empty,
	#[error("Invalid time '{0}'.")]
	InvalidTime(String),
	#[error("Time fragment ends at {end} before it starts at {start}.")]
	EndBeforeStart { start: f64, end: f64 },
}

/// Parse `[npt:]<time>` (a timestamp) or `[npt:]<time><,|-><time>` (a range).
pub fn parse_time_span(text: &str) -> Result<TimeSpan, TimeFragmentError> {
	let text = text.trim();
	let text = text.strip_prefix(NPT_PREFIX).unwrap_or(text);
	if text.is_empty() {
		return Err(TimeFragmentError::Empty);
	}

	let (start, end) = match text.split_once(RANGE_SEPARATORS) {
		Some((start, end)) => (parse_time(start)?, parse_time(end)?),
		None => {
			let time = parse_time(text)?;
			(time, time)
		}
	};

	if end < start {
		return Err(TimeFragmentError::EndBeforeStart { start, end });
	}

	Ok(TimeSpan { start, end })
}

/// Parse `ss[.fff]`, `mm:ss[.fff]` or `hh:mm:ss[.fff]` into seconds.
pub fn parse_time(text: &str) -> Result<f64, TimeFragmentError> {
	let invalid = || TimeFragmentError::InvalidTime(text.to_string());

	let components: Vec<&str> = text.trim().split(':').collect();
	if components.len() > 3 {
		return Err(invalid());
	}

	let (seconds, leading) = components.split_last().ok_or_else(invalid)?;
	let seconds = parse_component(seconds, true).ok_or_else(invalid)?;
	if !leading.is_empty() && seconds >= 60.0 {
		return Err(invalid());
	}

	let mut total = 0.0;
	for (index, component) in leading.iter().enumerate() {
		let value = parse_component(component, false).ok_or_else(invalid)?;
		// only the leading component may exceed its unit
		if index > 0 && value >= 60.0 {
			return Err(invalid());
		}
		total = total * 60.0 + value;
	}

	Ok(total * 60.0 + seconds)
}

fn parse_component(component: &str, allow_fraction: bool) -> Option<f64> {
	let is_valid = !component.is_empty()
		&& component.chars().filter(|&character| character == '.').count() <= usize::from(allow_fraction)
		&& component
			.chars()
			.all(|character| character.is_ascii_digit() || character == '.')
		&& component.chars().any(|character| character.is_ascii_digit());
	if !is_valid {
		return None;
	}
	component.parse().ok()
}
