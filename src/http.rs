//! Sender primitives the authorizing transport delegates to.
//!
//! [`HttpSend`] is the crate's only dependency on an HTTP stack: the transport decorates
//! a request and hands it to an implementation, returning whatever comes back. Requests
//! and responses use the `oauth2` crate's [`HttpRequest`] and [`HttpResponse`] aliases so
//! the same values flow through `oauth2` grant helpers unchanged.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
pub use oauth2::{HttpRequest, HttpResponse};
// self
use crate::{_prelude::*, error::ConfigError};

/// Future returned by [`HttpSend::send`].
pub type SendFuture<'a, E> = Pin<Box<dyn Future<Output = Result<HttpResponse, E>> + 'a + Send>>;

/// Opaque "send and receive" capability wrapped by the authorizing transport.
///
/// Implementations must be `Send + Sync + 'static` so one sender can be shared by many
/// concurrent requests, and their futures must own whatever state they need.
pub trait HttpSend
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves to the response.
	fn send(&self, request: HttpRequest) -> SendFuture<'_, Self::TransportError>;
}
impl<S> HttpSend for Arc<S>
where
	S: HttpSend,
{
	type TransportError = S::TransportError;

	fn send(&self, request: HttpRequest) -> SendFuture<'_, Self::TransportError> {
		(**self).send(request)
	}
}

/// Copies `request` into a new, independently owned request.
///
/// Method, URI, version, headers, and body are duplicated; extensions are not carried
/// over because they are not guaranteed to be cloneable.
pub fn clone_request(request: &HttpRequest) -> Result<HttpRequest> {
	let mut builder = oauth2::http::Request::builder()
		.method(request.method().clone())
		.uri(request.uri().clone())
		.version(request.version());

	if let Some(headers) = builder.headers_mut() {
		*headers = request.headers().clone();
	}

	Ok(builder.body(request.body().clone()).map_err(ConfigError::from)?)
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client from a configured [`reqwest::ClientBuilder`].
	pub fn from_builder(builder: reqwest::ClientBuilder) -> Result<Self> {
		Ok(Self(builder.build().map_err(ConfigError::from)?))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpSend for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn send(&self, request: HttpRequest) -> SendFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client.execute(request.try_into()?).await?;
			let status = response.status();
			let version = response.version();
			let headers = response.headers().to_owned();
			let mut response_new = HttpResponse::new(response.bytes().await?.to_vec());

			*response_new.status_mut() = status;
			*response_new.version_mut() = version;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}
