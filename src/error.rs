//! Transport-level error types shared across tokens, providers, and senders.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Token provider could not produce a token; the request was not sent.
	#[error(transparent)]
	Provider(#[from] crate::provider::ProviderError),
	/// Local configuration problem (malformed MAC setup, bad header bytes, etc.).
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Underlying sender failure, passed through untouched.
	#[error(transparent)]
	Transport(#[from] TransportError),
}

/// Configuration and validation failures raised before a request is sent.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Rendered `Authorization` value contains bytes HTTP headers cannot carry.
	#[error("Authorization header value contains invalid characters.")]
	InvalidHeaderValue(#[from] oauth2::http::header::InvalidHeaderValue),
	/// Token JSON could not be parsed.
	#[error("Token JSON is malformed.")]
	TokenParse(#[from] serde_path_to_error::Error<serde_json::Error>),

	/// Token is missing an extra field required by its type.
	#[error("Token extra field `{key}` is missing.")]
	ExtraMissing {
		/// Extra field name.
		key: &'static str,
	},
	/// Token extra field holds an unexpected kind of value.
	#[error("Token extra field `{key}` must be a {expected}.")]
	ExtraKind {
		/// Extra field name.
		key: &'static str,
		/// Expected value kind label.
		expected: &'static str,
	},
	/// MAC algorithm name is not supported.
	#[error("MAC algorithm `{algorithm}` is not supported.")]
	UnsupportedMacAlgorithm {
		/// Algorithm name carried by the token.
		algorithm: String,
	},
	/// MAC signing key was rejected by the algorithm.
	#[error("MAC signing key is invalid.")]
	InvalidMacKey,
	/// Request lacks the host or port the MAC signing string needs.
	#[error("Request target is missing the {missing} needed for MAC signing.")]
	MacRequestTarget {
		/// Missing component label.
		missing: &'static str,
	},
	/// Nonce length must be positive.
	#[error("MAC nonce length must be greater than zero.")]
	InvalidNonceLength,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures reported by the underlying sender.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP sender reported a failure.
	#[error("Underlying HTTP sender failed.")]
	Network {
		/// Sender-specific error, preserved verbatim.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while sending the request.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a sender-specific error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
