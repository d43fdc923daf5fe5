//! MAC access authentication: nonces, timestamps, signing strings, and signatures.
//!
//! The header follows the OAuth 2.0 MAC token draft:
//! `MAC id="<token>", ts="<unix seconds>", nonce="<alphanumeric>", mac="<base64>"`.
//! The exact normalized string fed to the HMAC is pluggable through
//! [`SigningStringBuilder`]; [`DraftSigningString`] is the default.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use oauth2::http::header::HOST;
use rand::{Rng, distr::Alphanumeric};
use sha2::Sha256;
// self
use crate::{
	_prelude::*,
	auth::{MAC_ALGORITHM, MAC_KEY, Token},
	error::ConfigError,
	http::HttpRequest,
};

/// Default nonce length in characters.
pub const DEFAULT_NONCE_LEN: usize = 16;

/// Signing algorithms accepted in a token's `MacAlgorithm` extra.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MacAlgorithm {
	/// HMAC with SHA-256 (`hmac-sha-256`).
	HmacSha256,
}
impl MacAlgorithm {
	/// Parses an algorithm name, ignoring ASCII case.
	pub fn parse(raw: &str) -> Result<Self, ConfigError> {
		if raw.eq_ignore_ascii_case("hmac-sha-256") {
			Ok(Self::HmacSha256)
		} else {
			Err(ConfigError::UnsupportedMacAlgorithm { algorithm: raw.to_owned() })
		}
	}

	/// Returns the canonical algorithm name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::HmacSha256 => "hmac-sha-256",
		}
	}

	/// Signs `message` with `key` and returns the padded standard base64 digest.
	pub fn sign(self, key: &[u8], message: &str) -> Result<String, ConfigError> {
		match self {
			Self::HmacSha256 => {
				let mut mac = <Hmac<Sha256>>::new_from_slice(key)
					.map_err(|_| ConfigError::InvalidMacKey)?;

				mac.update(message.as_bytes());

				Ok(STANDARD.encode(mac.finalize().into_bytes()))
			},
		}
	}
}
impl FromStr for MacAlgorithm {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}
impl Display for MacAlgorithm {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Request attributes covered by a MAC signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MacInput<'a> {
	/// Unix timestamp in seconds.
	pub timestamp: i64,
	/// Per-request random nonce.
	pub nonce: &'a str,
	/// Request method, e.g. `GET`.
	pub method: &'a str,
	/// Path plus query of the request URI.
	pub request_uri: &'a str,
	/// Lower-cased host name.
	pub host: &'a str,
	/// Explicit or scheme-default port.
	pub port: u16,
	/// Application-specific extension string; empty when unused.
	pub ext: &'a str,
}

/// Builds the normalized request string that gets signed.
pub trait SigningStringBuilder
where
	Self: Send + Sync,
{
	/// Returns the string covered by the signature.
	fn build(&self, input: &MacInput<'_>) -> String;
}

/// Draft normalization: ts, nonce, method, request-uri, host, port, and ext, each
/// followed by a newline.
#[derive(Clone, Copy, Debug, Default)]
pub struct DraftSigningString;
impl SigningStringBuilder for DraftSigningString {
	fn build(&self, input: &MacInput<'_>) -> String {
		let MacInput { timestamp, nonce, method, request_uri, host, port, ext } = input;

		format!("{timestamp}\n{nonce}\n{method}\n{request_uri}\n{host}\n{port}\n{ext}\n")
	}
}

/// Host, port, and request-uri of an outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestTarget {
	/// Lower-cased host name.
	pub host: String,
	/// Explicit or scheme-default port.
	pub port: u16,
	/// Path plus query.
	pub request_uri: String,
}
impl RequestTarget {
	/// Extracts the target from the URI, falling back to the `Host` header for relative URIs.
	pub fn from_request(request: &HttpRequest) -> Result<Self, ConfigError> {
		let uri = request.uri();
		let host_header = request
			.headers()
			.get(HOST)
			.and_then(|value| value.to_str().ok())
			.and_then(|value| value.parse::<oauth2::http::uri::Authority>().ok());
		let host = uri
			.host()
			.or_else(|| host_header.as_ref().map(|authority| authority.host()))
			.filter(|host| !host.is_empty())
			.ok_or(ConfigError::MacRequestTarget { missing: "host" })?
			.to_ascii_lowercase();
		let port = uri
			.port_u16()
			.or_else(|| if uri.host().is_none() { host_header.as_ref()?.port_u16() } else { None })
			.or_else(|| match uri.scheme_str() {
				Some(scheme) if scheme.eq_ignore_ascii_case("https") => Some(443),
				Some(scheme) if scheme.eq_ignore_ascii_case("http") => Some(80),
				_ => None,
			})
			.ok_or(ConfigError::MacRequestTarget { missing: "port" })?;
		let request_uri = uri.path_and_query().map_or("/", |pq| pq.as_str()).to_owned();

		Ok(Self { host, port, request_uri })
	}
}

/// Generates a random alphanumeric nonce of `len` characters.
pub fn generate_nonce(len: usize) -> String {
	rand::rng().sample_iter(Alphanumeric).take(len).map(char::from).collect()
}

/// Current Unix time in whole seconds.
pub fn unix_timestamp() -> i64 {
	OffsetDateTime::now_utc().unix_timestamp()
}

/// Renders a fresh MAC header value for `token` and `request`.
pub(crate) fn render(
	token: &Token,
	request: &HttpRequest,
	nonce_len: usize,
	signing_string: &dyn SigningStringBuilder,
) -> Result<String, ConfigError> {
	let key = token.extra_str(MAC_KEY)?;
	let algorithm = MacAlgorithm::parse(token.extra_str(MAC_ALGORITHM)?)?;
	let target = RequestTarget::from_request(request)?;
	let timestamp = unix_timestamp();
	let nonce = generate_nonce(nonce_len);
	let input = MacInput {
		timestamp,
		nonce: &nonce,
		method: request.method().as_str(),
		request_uri: &target.request_uri,
		host: &target.host,
		port: target.port,
		ext: "",
	};
	let mac = algorithm.sign(key.as_bytes(), &signing_string.build(&input))?;

	Ok(format!(
		"MAC id=\"{}\", ts=\"{timestamp}\", nonce=\"{nonce}\", mac=\"{mac}\"",
		token.access_token.expose()
	))
}
