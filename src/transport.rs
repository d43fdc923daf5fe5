//! Request decorator that stamps every outgoing request with an `Authorization` header.
//!
//! [`AuthorizingTransport`] asks its [`TokenProvider`] for a token on each call, renders
//! the header for the token's type, and forwards the request to the wrapped [`HttpSend`].
//! It holds no mutable state, so one instance can serve any number of concurrent sends.
//!
//! | Token type        | Header value                                   |
//! |-------------------|------------------------------------------------|
//! | empty / `bearer`  | `Bearer <token>`                               |
//! | `basic`           | `Basic <token>`                                |
//! | `mac`             | `MAC id="..", ts="..", nonce="..", mac=".."`   |
//! | anything else `T` | `T <token>`                                    |

pub mod mac;

pub use mac::{
	DEFAULT_NONCE_LEN, DraftSigningString, MacAlgorithm, MacInput, RequestTarget,
	SigningStringBuilder,
};

// crates.io
use oauth2::{
	AsyncHttpClient, HttpClientError,
	http::header::{AUTHORIZATION, HeaderValue},
};
// self
use crate::{
	_prelude::*,
	auth::{Token, TokenType},
	error::{ConfigError, TransportError},
	http::{self, HttpRequest, HttpResponse, HttpSend},
	obs::{self, SendOutcome, SendSpan},
	provider::TokenProvider,
};

/// Tunables applied to every header the transport renders.
#[derive(Clone)]
pub struct TransportConfig {
	/// Length of generated MAC nonces.
	pub nonce_len: usize,
	/// Normalized-string builder used for MAC signatures.
	pub signing_string: Arc<dyn SigningStringBuilder>,
}
impl Default for TransportConfig {
	fn default() -> Self {
		Self { nonce_len: DEFAULT_NONCE_LEN, signing_string: Arc::new(DraftSigningString) }
	}
}
impl Debug for TransportConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TransportConfig")
			.field("nonce_len", &self.nonce_len)
			.field("signing_string", &"<dyn SigningStringBuilder>")
			.finish()
	}
}

/// Builder for [`AuthorizingTransport`].
pub struct TransportBuilder<P, S>
where
	P: ?Sized + TokenProvider,
	S: HttpSend,
{
	provider: Arc<P>,
	sender: Arc<S>,
	config: TransportConfig,
}
impl<P, S> TransportBuilder<P, S>
where
	P: ?Sized + TokenProvider,
	S: HttpSend,
{
	/// Overrides the MAC nonce length.
	pub fn nonce_len(mut self, len: usize) -> Self {
		self.config.nonce_len = len;

		self
	}

	/// Replaces the MAC signing-string builder.
	pub fn signing_string(mut self, builder: Arc<dyn SigningStringBuilder>) -> Self {
		self.config.signing_string = builder;

		self
	}

	/// Validates the configuration and produces the transport.
	pub fn build(self) -> Result<AuthorizingTransport<P, S>, ConfigError> {
		if self.config.nonce_len == 0 {
			return Err(ConfigError::InvalidNonceLength);
		}

		let Self { provider, sender, config } = self;

		Ok(AuthorizingTransport { provider, sender, config })
	}
}

/// Decorates outgoing requests with credentials from a [`TokenProvider`].
pub struct AuthorizingTransport<P, S>
where
	P: ?Sized + TokenProvider,
	S: HttpSend,
{
	provider: Arc<P>,
	sender: Arc<S>,
	config: TransportConfig,
}
impl<P, S> AuthorizingTransport<P, S>
where
	P: ?Sized + TokenProvider,
	S: HttpSend,
{
	/// Wraps `sender` with the default configuration.
	pub fn new(provider: Arc<P>, sender: Arc<S>) -> Self {
		Self { provider, sender, config: TransportConfig::default() }
	}

	/// Starts a builder for a customized transport.
	pub fn builder(provider: Arc<P>, sender: Arc<S>) -> TransportBuilder<P, S> {
		TransportBuilder { provider, sender, config: TransportConfig::default() }
	}

	/// Token provider consulted on every send.
	pub fn provider(&self) -> &Arc<P> {
		&self.provider
	}

	/// Underlying sender requests are delegated to.
	pub fn sender(&self) -> &Arc<S> {
		&self.sender
	}

	/// Active configuration.
	pub fn config(&self) -> &TransportConfig {
		&self.config
	}

	/// Sends a copy of `request` carrying the current credentials.
	///
	/// The borrowed request is never modified, whether the send succeeds or fails.
	pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
		self.execute(http::clone_request(request)?).await
	}

	/// Authorizes and sends an owned request.
	pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
		let token = match self.provider.token().await {
			Ok(token) => token.filter(Token::has_access_token),
			Err(e) => {
				obs::record_send_outcome(obs::UNAUTHENTICATED, SendOutcome::Failure);

				return Err(e.into());
			},
		};
		let kind = token.as_ref().map(Token::token_type);
		let scheme = obs::scheme_label(kind.as_ref());
		let span = SendSpan::new(scheme);

		obs::record_send_outcome(scheme, SendOutcome::Attempt);

		let result = span
			.instrument(async move {
				let request = self.decorate(request, token.as_ref())?;

				self.sender.send(request).await.map_err(|e| Error::from(TransportError::network(e)))
			})
			.await;

		match &result {
			Ok(_) => obs::record_send_outcome(scheme, SendOutcome::Success),
			Err(_) => obs::record_send_outcome(scheme, SendOutcome::Failure),
		}

		result
	}

	/// Resolves the current token and returns `request` with the header applied, without
	/// sending it.
	pub async fn authorize(&self, request: HttpRequest) -> Result<HttpRequest> {
		let token = self.provider.token().await?;

		self.decorate(request, token.as_ref())
	}

	/// Renders the `Authorization` value for `token` against `request`.
	///
	/// MAC values embed a fresh timestamp and nonce, so two calls never match.
	pub fn authorization_header(&self, token: &Token, request: &HttpRequest) -> Result<HeaderValue> {
		let access_token = token.access_token.expose();
		let rendered = match token.token_type() {
			TokenType::Mac => mac::render(
				token,
				request,
				self.config.nonce_len,
				self.config.signing_string.as_ref(),
			)?,
			kind => format!("{} {access_token}", kind.scheme()),
		};
		let mut value = HeaderValue::from_str(&rendered).map_err(ConfigError::from)?;

		value.set_sensitive(true);

		Ok(value)
	}

	fn decorate(&self, mut request: HttpRequest, token: Option<&Token>) -> Result<HttpRequest> {
		let Some(token) = token.filter(|token| token.has_access_token()) else {
			obs::note_unauthenticated();

			return Ok(request);
		};
		let value = self.authorization_header(token, &request)?;

		request.headers_mut().insert(AUTHORIZATION, value);

		Ok(request)
	}
}
impl<P, S> Clone for AuthorizingTransport<P, S>
where
	P: ?Sized + TokenProvider,
	S: HttpSend,
{
	fn clone(&self) -> Self {
		Self {
			provider: Arc::clone(&self.provider),
			sender: Arc::clone(&self.sender),
			config: self.config.clone(),
		}
	}
}
impl<P, S> Debug for AuthorizingTransport<P, S>
where
	P: ?Sized + TokenProvider,
	S: HttpSend,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthorizingTransport").field("config", &self.config).finish_non_exhaustive()
	}
}
impl<'c, P, S> AsyncHttpClient<'c> for AuthorizingTransport<P, S>
where
	P: ?Sized + TokenProvider,
	S: HttpSend,
{
	type Error = HttpClientError<Error>;
	type Future = Pin<Box<dyn Future<Output = Result<HttpResponse, Self::Error>> + 'c + Send>>;

	fn call(&'c self, request: HttpRequest) -> Self::Future {
		Box::pin(async move {
			self.execute(request).await.map_err(|e| HttpClientError::Reqwest(Box::new(e)))
		})
	}
}
