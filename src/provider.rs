//! Token provider contract consumed by the authorizing transport.
//!
//! The transport asks its [`TokenProvider`] for a token on every request and never
//! caches the answer. Caching and refresh belong to providers; [`ReuseTokenProvider`]
//! layers the common "reuse until invalid" policy over any other provider.

pub mod reuse;

pub use reuse::ReuseTokenProvider;

// self
use crate::{_prelude::*, auth::Token, error::BoxError};

/// Future returned by [`TokenProvider::token`].
pub type ProviderFuture<'a> =
	Pin<Box<dyn Future<Output = Result<Option<Token>, ProviderError>> + 'a + Send>>;

/// Supplies the current token on demand.
///
/// `Ok(None)` means no credential is available; the transport then sends the request
/// without an `Authorization` header.
pub trait TokenProvider
where
	Self: Send + Sync,
{
	/// Returns the current token.
	fn token(&self) -> ProviderFuture<'_>;
}
impl<P> TokenProvider for Arc<P>
where
	P: ?Sized + TokenProvider,
{
	fn token(&self) -> ProviderFuture<'_> {
		(**self).token()
	}
}

/// Error type produced by [`TokenProvider`] implementations.
#[derive(Debug, ThisError)]
pub enum ProviderError {
	/// Provider backend failed (network, storage, refresh flow).
	#[error("Token provider is unavailable.")]
	Unavailable {
		/// Provider-specific failure.
		#[source]
		source: BoxError,
	},
	/// Provider refused to hand out a token.
	#[error("Token provider rejected the request: {reason}.")]
	Rejected {
		/// Provider-supplied reason string.
		reason: String,
	},
}
impl ProviderError {
	/// Wraps a provider-specific failure.
	pub fn unavailable(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Unavailable { source: Box::new(src) }
	}

	/// Builds a rejection carrying a human-readable reason.
	pub fn rejected(reason: impl Into<String>) -> Self {
		Self::Rejected { reason: reason.into() }
	}
}

/// Provider that always returns the same token.
#[derive(Clone, Debug, Default)]
pub struct StaticTokenProvider(Option<Token>);
impl StaticTokenProvider {
	/// Serves `token` on every call.
	pub fn new(token: Token) -> Self {
		Self(Some(token))
	}

	/// Serves no token, so requests go out unauthenticated.
	pub fn empty() -> Self {
		Self(None)
	}
}
impl From<Token> for StaticTokenProvider {
	fn from(token: Token) -> Self {
		Self::new(token)
	}
}
impl TokenProvider for StaticTokenProvider {
	fn token(&self) -> ProviderFuture<'_> {
		let token = self.0.clone();

		Box::pin(async move { Ok(token) })
	}
}
