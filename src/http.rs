//! Transport seam for the two outbound provider calls.
//!
//! The module exposes [`ProviderHttpClient`] together with [`ProviderRequest`] and
//! [`ProviderResponse`] so downstream crates can integrate custom HTTP clients without the flow
//! layer depending on any particular stack. The bundled [`ReqwestHttpClient`] covers the default
//! case behind the `reqwest` feature.

// std
use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};

/// HTTP method used by provider requests; the handshake only ever issues these two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestMethod {
	/// `GET` request (profile fetch).
	Get,
	/// `POST` request (token exchange).
	Post,
}

/// Transport-agnostic description of one outbound provider call.
#[derive(Clone, Debug)]
pub struct ProviderRequest {
	/// HTTP method to issue.
	pub method: RequestMethod,
	/// Fully resolved target URL.
	pub url: Url,
	/// `Authorization` header value, when the call carries one.
	pub authorization: Option<String>,
	/// Form-encoded body pairs; empty for `GET` requests. Transports must submit these with
	/// `Content-Type: application/x-www-form-urlencoded`.
	pub form: Vec<(String, String)>,
}
impl ProviderRequest {
	/// Builds a form-encoded `POST` request.
	pub fn post_form(url: Url, form: Vec<(String, String)>) -> Self {
		Self { method: RequestMethod::Post, url, authorization: None, form }
	}

	/// Builds a bare `GET` request.
	pub fn get(url: Url) -> Self {
		Self { method: RequestMethod::Get, url, authorization: None, form: Vec::new() }
	}

	/// Attaches an `Authorization` header value.
	pub fn with_authorization(mut self, value: impl Into<String>) -> Self {
		self.authorization = Some(value.into());

		self
	}
}

/// Raw response surfaced to the flow layer: status plus unparsed body bytes.
#[derive(Clone, Debug)]
pub struct ProviderResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body bytes.
	pub body: Vec<u8>,
}
impl ProviderResponse {
	/// Whether the status is in the 2xx range.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Lossy UTF-8 rendering of the body, used when logging upstream failures.
	pub fn body_text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}
}

/// Future type returned by [`ProviderHttpClient::execute`].
pub type ProviderFuture<'a> =
	Pin<Box<dyn Future<Output = Result<ProviderResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing the token exchange and profile fetch.
///
/// The trait is the crate's only dependency on an HTTP stack. Implementations must be
/// `Send + Sync + 'static` so a handler can be shared across router tasks behind `Arc<C>`
/// without additional wrappers; the returned futures must be `Send` for the same reason. No
/// timeout is imposed here: configure one on the underlying client if the deployment needs it.
pub trait ProviderHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Executes one outbound request and returns the raw status + body.
	fn execute(&self, request: ProviderRequest) -> ProviderFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place. The default
/// client follows reqwest's standard redirect policy; the provider endpoints answer directly, so
/// nothing here depends on redirect handling.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
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
impl ProviderHttpClient for ReqwestHttpClient {
	fn execute(&self, request: ProviderRequest) -> ProviderFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let mut builder = match request.method {
				RequestMethod::Get => client.get(request.url.as_str()),
				RequestMethod::Post => client.post(request.url.as_str()).form(&request.form),
			};

			if let Some(value) = request.authorization.as_deref() {
				builder = builder.header(reqwest::header::AUTHORIZATION, value);
			}

			let response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let body = response.bytes().await.map_err(TransportError::from)?.to_vec();

			Ok(ProviderResponse { status, body })
		})
	}
}
