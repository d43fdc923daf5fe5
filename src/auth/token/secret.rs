//! Credential strings that never reach logs or header dumps in clear text.

// self
use crate::_prelude::*;

const REDACTED: &str = "<redacted>";

/// Access or refresh token value.
///
/// Formatting only reveals whether a value is present. An empty secret is how a provider
/// signals "send unauthenticated", so `Debug` keeps that distinction visible.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a credential string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Raw credential, for rendering the `Authorization` header only.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` when no credential is present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl From<String> for TokenSecret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for TokenSecret {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		if self.is_empty() {
			f.write_str("TokenSecret(<empty>)")
		} else {
			f.debug_tuple("TokenSecret").field(&REDACTED).finish()
		}
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(REDACTED)
	}
}
