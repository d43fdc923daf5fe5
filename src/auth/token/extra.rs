//! Type-specific side data carried next to a token.

// self
use crate::{_prelude::*, error::ConfigError};

/// Extra field map keyed by field name.
pub type Extra = BTreeMap<String, ExtraValue>;

/// Extra field holding the MAC signing secret.
pub const MAC_KEY: &str = "MacKey";
/// Extra field naming the MAC signing algorithm.
pub const MAC_ALGORITHM: &str = "MacAlgorithm";

/// Closed set of value kinds an extra field may hold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtraValue {
	/// Boolean flag.
	Bool(bool),
	/// Numeric value.
	Number(serde_json::Number),
	/// Text value.
	Text(String),
}
impl ExtraValue {
	/// Returns the text payload, if this is a text value.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Text(value) => Some(value),
			_ => None,
		}
	}

	/// Returns the numeric payload, if this is a number.
	pub fn as_number(&self) -> Option<&serde_json::Number> {
		match self {
			Self::Number(value) => Some(value),
			_ => None,
		}
	}

	/// Returns the boolean payload, if this is a flag.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}
}
impl From<&str> for ExtraValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}
impl From<String> for ExtraValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}
impl From<i64> for ExtraValue {
	fn from(value: i64) -> Self {
		Self::Number(value.into())
	}
}
impl From<u64> for ExtraValue {
	fn from(value: u64) -> Self {
		Self::Number(value.into())
	}
}
impl From<bool> for ExtraValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

/// Looks up a required text field, failing when it is absent or of another kind.
pub(crate) fn require_str<'a>(extra: &'a Extra, key: &'static str) -> Result<&'a str, ConfigError> {
	let value = extra.get(key).ok_or(ConfigError::ExtraMissing { key })?;

	value.as_str().ok_or(ConfigError::ExtraKind { key, expected: "string" })
}
