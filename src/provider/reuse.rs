//! Provider wrapper that reuses a token until it stops being valid.

// self
use crate::{
	_prelude::*,
	auth::Token,
	provider::{ProviderError, ProviderFuture, TokenProvider},
};

/// Caches the inner provider's token and only asks again once it is invalid.
///
/// Reads of a still-valid token take a short synchronous lock. When the cache is stale,
/// callers queue on an async guard so concurrent requests share a single inner call.
pub struct ReuseTokenProvider<P>
where
	P: ?Sized + TokenProvider,
{
	inner: Arc<P>,
	cached: RwLock<Option<Token>>,
	refresh_guard: AsyncMutex<()>,
}
impl<P> ReuseTokenProvider<P>
where
	P: ?Sized + TokenProvider,
{
	/// Wraps `inner` with an empty cache.
	pub fn new(inner: Arc<P>) -> Self {
		Self { inner, cached: RwLock::new(None), refresh_guard: AsyncMutex::new(()) }
	}

	/// Seeds the cache with a token obtained elsewhere.
	pub fn with_initial(inner: Arc<P>, token: Token) -> Self {
		Self { inner, cached: RwLock::new(Some(token)), refresh_guard: AsyncMutex::new(()) }
	}

	fn cached_valid(&self) -> Option<Token> {
		self.cached.read().as_ref().filter(|token| token.is_valid()).cloned()
	}

	async fn current(&self) -> Result<Option<Token>, ProviderError> {
		if let Some(token) = self.cached_valid() {
			return Ok(Some(token));
		}

		let _singleflight = self.refresh_guard.lock().await;

		if let Some(token) = self.cached_valid() {
			return Ok(Some(token));
		}

		let fresh = self.inner.token().await?;

		*self.cached.write() = fresh.clone().filter(Token::is_valid);

		Ok(fresh)
	}
}
impl<P> Debug for ReuseTokenProvider<P>
where
	P: ?Sized + TokenProvider,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ReuseTokenProvider(..)")
	}
}
impl<P> TokenProvider for ReuseTokenProvider<P>
where
	P: ?Sized + TokenProvider,
{
	fn token(&self) -> ProviderFuture<'_> {
		Box::pin(self.current())
	}
}
