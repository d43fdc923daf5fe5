//! Token type discriminator selecting the `Authorization` scheme.

// self
use crate::_prelude::*;

/// Parsed token type.
///
/// Matching is case-insensitive. An empty type means [`TokenType::Bearer`]; anything
/// unrecognized is kept verbatim in [`TokenType::Other`] and rendered as a literal scheme.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
	/// `Bearer <token>` (RFC 6750).
	Bearer,
	/// `Basic <token>`.
	Basic,
	/// Signed `MAC id=..., ts=..., nonce=..., mac=...` header.
	Mac,
	/// Unrecognized scheme, original casing preserved.
	Other(String),
}
impl TokenType {
	/// Parses a raw token type string.
	pub fn parse(raw: &str) -> Self {
		if raw.is_empty() || raw.eq_ignore_ascii_case("bearer") {
			Self::Bearer
		} else if raw.eq_ignore_ascii_case("basic") {
			Self::Basic
		} else if raw.eq_ignore_ascii_case("mac") {
			Self::Mac
		} else {
			Self::Other(raw.to_owned())
		}
	}

	/// Returns the scheme token written before the credential.
	pub fn scheme(&self) -> &str {
		match self {
			Self::Bearer => "Bearer",
			Self::Basic => "Basic",
			Self::Mac => "MAC",
			Self::Other(raw) => raw,
		}
	}

	/// Returns a stable label suitable for span or metric fields.
	pub fn label(&self) -> &'static str {
		match self {
			Self::Bearer => "bearer",
			Self::Basic => "basic",
			Self::Mac => "mac",
			Self::Other(_) => "other",
		}
	}
}
impl FromStr for TokenType {
	type Err = std::convert::Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::parse(s))
	}
}
impl Display for TokenType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.scheme())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn parse_ignores_case_for_known_types() {
		for raw in ["", "bearer", "Bearer", "BEARER"] {
			assert_eq!(TokenType::parse(raw), TokenType::Bearer, "raw = {raw:?}");
		}
		for raw in ["basic", "Basic", "BASIC"] {
			assert_eq!(TokenType::parse(raw), TokenType::Basic, "raw = {raw:?}");
		}

		assert_eq!(TokenType::parse("MaC"), TokenType::Mac);
	}

	#[test]
	fn unknown_types_keep_their_casing() {
		let kind = TokenType::parse("DPoP");

		assert_eq!(kind, TokenType::Other("DPoP".into()));
		assert_eq!(kind.scheme(), "DPoP");
		assert_eq!(kind.label(), "other");
	}
}
