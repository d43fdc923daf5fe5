//! Demonstrates wrapping a reqwest client so every request carries the provider's token.
//!
//! 1. Pick a [`TokenProvider`]; here a [`StaticTokenProvider`] behind a
//!    [`ReuseTokenProvider`], which only re-asks once the cached token expires.
//! 2. Wrap a [`ReqwestHttpClient`] in an [`AuthorizingTransport`].
//! 3. Call [`AuthorizingTransport::authorize`] to inspect the header, or
//!    [`AuthorizingTransport::send`] to dispatch.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use oauth2_transport::{
	auth::{MAC_ALGORITHM, MAC_KEY, Token},
	http::{HttpRequest, ReqwestHttpClient},
	oauth2::http::{Request, header::AUTHORIZATION},
	provider::{ReuseTokenProvider, StaticTokenProvider},
	transport::AuthorizingTransport,
};
use time::{Duration, OffsetDateTime};

fn request() -> Result<HttpRequest> {
	Ok(Request::builder().uri("https://api.example.com/v1/me").body(Vec::new())?)
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let bearer = Token::new("demo-access-token")
		.with_expiry(OffsetDateTime::now_utc() + Duration::hours(1));
	let provider = Arc::new(ReuseTokenProvider::new(Arc::new(StaticTokenProvider::new(bearer))));
	let sender = Arc::new(ReqwestHttpClient::default());
	let transport = AuthorizingTransport::new(provider, Arc::clone(&sender));
	let authorized = transport.authorize(request()?).await?;

	println!("Bearer header: {:?}.", authorized.headers().get(AUTHORIZATION));

	let mac = Token::new("demo-mac-id")
		.with_token_type("mac")
		.with_extra([(MAC_KEY, "demo-mac-key"), (MAC_ALGORITHM, "hmac-sha-256")]);
	let mac_transport = AuthorizingTransport::builder(
		Arc::new(StaticTokenProvider::new(mac.clone())),
		sender,
	)
	.nonce_len(24)
	.build()?;
	let header = mac_transport.authorization_header(&mac, &request()?)?;

	println!("MAC header: {}.", header.to_str()?);

	Ok(())
}
