//! Token value object, validity checks, and builders.

pub mod extra;
pub mod kind;
pub mod secret;

// crates.io
use time::serde::rfc3339;
// self
use crate::{
	_prelude::*,
	auth::token::{
		extra::{Extra, ExtraValue},
		kind::TokenType,
		secret::TokenSecret,
	},
	error::ConfigError,
};

/// Credential handed to the transport by a token provider.
///
/// Tokens are read-only once handed over; [`Token::with_extra`] and the other `with_*`
/// helpers return new values instead of mutating the receiver.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Token {
	/// Credential value; a token without one is never valid.
	pub access_token: TokenSecret,
	/// Raw token type string as issued; see [`Token::token_type`].
	#[serde(default)]
	pub token_type: String,
	/// Refresh secret consumed by refresh flows; unused when authorizing requests.
	#[serde(default, skip_serializing_if = "TokenSecret::is_empty")]
	pub refresh_token: TokenSecret,
	/// Expiry instant; `None` means the token never expires by time.
	#[serde(default, with = "rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub expiry: Option<OffsetDateTime>,
	/// Type-specific side data (e.g. MAC signing key and algorithm).
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub extra: Extra,
}
impl Token {
	/// Creates a bearer token carrying the provided access token.
	pub fn new(access_token: impl Into<String>) -> Self {
		Self { access_token: TokenSecret::new(access_token), ..Default::default() }
	}

	/// Parses a token from its JSON form.
	pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
		let mut de = serde_json::Deserializer::from_slice(bytes);

		Ok(serde_path_to_error::deserialize(&mut de)?)
	}

	/// Returns a copy carrying the provided raw token type.
	pub fn with_token_type(&self, token_type: impl Into<String>) -> Self {
		Self { token_type: token_type.into(), ..self.clone() }
	}

	/// Returns a copy carrying the provided refresh token.
	pub fn with_refresh_token(&self, refresh_token: impl Into<String>) -> Self {
		Self { refresh_token: TokenSecret::new(refresh_token), ..self.clone() }
	}

	/// Returns a copy expiring at the provided instant.
	pub fn with_expiry(&self, expiry: OffsetDateTime) -> Self {
		Self { expiry: Some(expiry), ..self.clone() }
	}

	/// Returns a copy whose extra fields are replaced by `extra`.
	pub fn with_extra<I, K, V>(&self, extra: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<ExtraValue>,
	{
		let extra = extra.into_iter().map(|(k, v)| (k.into(), v.into())).collect();

		Self { extra, ..self.clone() }
	}

	/// Parsed token type used to pick the `Authorization` scheme.
	pub fn token_type(&self) -> TokenType {
		TokenType::parse(&self.token_type)
	}

	/// Looks up an extra field.
	pub fn extra(&self, key: &str) -> Option<&ExtraValue> {
		self.extra.get(key)
	}

	/// Looks up a required text extra, failing when it is absent or of another kind.
	pub fn extra_str(&self, key: &'static str) -> Result<&str, ConfigError> {
		extra::require_str(&self.extra, key)
	}

	/// Returns `true` if the token carries an access token.
	pub fn has_access_token(&self) -> bool {
		!self.access_token.is_empty()
	}

	/// Returns `true` if the token has expired at the provided instant.
	///
	/// The expiry instant itself already counts as expired.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		self.expiry.is_some_and(|expiry| instant >= expiry)
	}

	/// Returns `true` if the token is expired relative to the current clock.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}

	/// Returns `true` if the token carries an access token and has not expired at `instant`.
	pub fn is_valid_at(&self, instant: OffsetDateTime) -> bool {
		self.has_access_token() && !self.is_expired_at(instant)
	}

	/// Convenience helper that checks validity using the current UTC instant.
	pub fn is_valid(&self) -> bool {
		self.is_valid_at(OffsetDateTime::now_utc())
	}
}
impl Debug for Token {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Token")
			.field("access_token", &self.access_token)
			.field("token_type", &self.token_type)
			.field("refresh_token", &self.refresh_token)
			.field("expiry", &self.expiry)
			.field("extra_keys", &self.extra.keys().collect::<Vec<_>>())
			.finish()
	}
}
