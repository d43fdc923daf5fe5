#![cfg(feature = "reqwest")]

// std
use std::sync::Arc;
// crates.io
use httpmock::prelude::*;
use oauth2::http::Request;
// self
use oauth2_transport::{
	auth::{MAC_ALGORITHM, MAC_KEY, Token},
	http::{HttpRequest, HttpSend, ReqwestHttpClient},
	provider::StaticTokenProvider,
	reqwest::Client,
	transport::AuthorizingTransport,
};

const MAC_HEADER_PATTERN: &str =
	r#"^MAC id="abc", ts="\d+", nonce="[0-9A-Za-z]{16}", mac="[A-Za-z0-9+/]+={0,2}"$"#;

/// Reqwest client that trusts the self-signed certificates `httpmock` serves over https.
fn mock_server_client() -> ReqwestHttpClient {
	ReqwestHttpClient::from_builder(
		Client::builder().danger_accept_invalid_certs(true).danger_accept_invalid_hostnames(true),
	)
	.expect("Failed to build insecure Reqwest client for tests.")
}

fn transport(token: Option<Token>) -> AuthorizingTransport<StaticTokenProvider, ReqwestHttpClient> {
	let provider = token.map_or_else(StaticTokenProvider::empty, StaticTokenProvider::new);

	AuthorizingTransport::new(Arc::new(provider), Arc::new(mock_server_client()))
}

fn get(url: String) -> HttpRequest {
	Request::builder().uri(url).body(Vec::new()).expect("Request fixture should build.")
}

#[tokio::test]
async fn server_receives_bearer_header() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/resource").header("authorization", "Bearer abc");
			then.status(200).header("x-upstream", "mock").body("payload");
		})
		.await;
	let response = transport(Some(Token::new("abc")))
		.send(&get(server.url("/resource")))
		.await
		.expect("Authorized send should succeed.");

	mock.assert_async().await;

	assert_eq!(response.status(), 200);
	assert_eq!(response.headers()["x-upstream"], "mock");
	assert_eq!(response.body(), b"payload");
}

#[tokio::test]
async fn server_receives_basic_header_for_mixed_case_type() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/").header("authorization", "Basic abc");
			then.status(204);
		})
		.await;

	transport(Some(Token::new("abc").with_token_type("Basic")))
		.send(&get(server.url("/")))
		.await
		.expect("Authorized send should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn server_receives_no_header_without_access_token() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/open").header_missing("authorization");
			then.status(200);
		})
		.await;

	transport(Some(Token::default()))
		.send(&get(server.url("/open")))
		.await
		.expect("Unauthenticated send should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn server_receives_mac_header() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/mac").header_matches("^authorization$", MAC_HEADER_PATTERN);
			then.status(200);
		})
		.await;
	let token = Token::new("abc")
		.with_token_type("mac")
		.with_extra([(MAC_KEY, "def"), (MAC_ALGORITHM, "hmac-sha-256")]);

	transport(Some(token))
		.send(&get(server.url("/mac")))
		.await
		.expect("MAC send should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn error_statuses_are_returned_unmodified() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/denied");
			then.status(401).header("www-authenticate", "Bearer error=\"invalid_token\"");
		})
		.await;

	let response = transport(Some(Token::new("stale")))
		.send(&get(server.url("/denied")))
		.await
		.expect("HTTP error statuses are not transport failures.");

	assert_eq!(response.status(), 401);
	assert_eq!(response.headers()["www-authenticate"], "Bearer error=\"invalid_token\"");
}

#[tokio::test]
async fn plain_sender_forwards_requests() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/direct").header_missing("authorization");
			then.status(200);
		})
		.await;
	let response = mock_server_client()
		.send(get(server.url("/direct")))
		.await
		.expect("Direct send should succeed.");

	mock.assert_async().await;

	assert_eq!(response.status(), 200);
}
