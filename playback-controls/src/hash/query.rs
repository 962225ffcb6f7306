use std::collections::BTreeMap;

const FALSY_VALUES: [&str; 2] = ["false", "0"];

/// Boolean-ish flags carried in a link hash, e.g. `#t=10&loop&autoplay=false`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryFlags {
	values: BTreeMap<String, Option<String>>,
}

impl QueryFlags {
	/// Insert a `key` or `key=value` pair. Later occurrences replace earlier ones.
	pub fn insert_pair(&mut self, pair: &str) {
		let (key, value) = match pair.split_once('=') {
			Some((key, value)) => (key, Some(value.to_string())),
			None => (pair, None),
		};
		let key = key.trim();
		if key.is_empty() {
			return;
		}
		self.values.insert(key.to_string(), value);
	}

	/// `Some(None)` for a key given without value.
	pub fn get(&self, key: &str) -> Option<Option<&str>> {
		self.values.get(key).map(Option::as_deref)
	}

	/// The key is present and not explicitly falsy.
	pub fn is(&self, key: &str) -> bool {
		match self.get(key) {
			None => false,
			Some(None) => true,
			Some(Some(value)) => !FALSY_VALUES
				.iter()
				.any(|falsy| value.trim().eq_ignore_ascii_case(falsy)),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl<'pair> FromIterator<&'pair str> for QueryFlags {
	fn from_iter<Pairs: IntoIterator<Item = &'pair str>>(pairs: Pairs) -> Self {
		let mut flags = QueryFlags::default();
		for pair in pairs {
			flags.insert_pair(pair);
		}
		flags
	}
}
