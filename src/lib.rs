//! Discord OAuth2 authorization-code flow packaged as framework-agnostic HTTP handlers - mount
//! the consent redirect and the callback exchange into any router and get a normalized user plus
//! tokens back.
//!
//! The crate owns the handshake only: [`flows::DiscordOAuth::handle_authorize`] builds the consent
//! redirect, [`flows::DiscordOAuth::handle_callback`] trades the authorization code for tokens,
//! fetches the authenticated user, normalizes it, and invokes caller-supplied hooks. The host web
//! framework parses query strings and translates the returned [`reply::HttpReply`] into its own
//! response type; persistence is delegated entirely to the [`hooks::AuthHook`] seam.
//!
//! Note that the authorize→callback hop carries no anti-forgery `state` parameter and the callback
//! validates none. This reproduces the upstream contract verbatim and weakens the protocol's CSRF
//! guarantees; front the routes with your own state handling if that matters for your deployment.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod config;
pub mod error;
pub mod flows;
pub mod hooks;
pub mod http;
pub mod obs;
pub mod provider;
pub mod reply;
pub mod token;
pub mod user;

#[cfg(feature = "reqwest")]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests.

	pub use crate::_prelude::*;

	// self
	use crate::{
		config::DiscordOAuthConfig, flows::DiscordOAuth, http::ReqwestHttpClient,
		provider::ProviderEndpoints,
	};

	/// Handler type alias used by reqwest-backed integration tests.
	pub type ReqwestTestHandler = DiscordOAuth<ReqwestHttpClient>;

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs a [`DiscordOAuth`] handler wired to mock endpoints and the insecure reqwest
	/// transport used across integration tests.
	pub fn build_test_handler(
		config: DiscordOAuthConfig,
		endpoints: ProviderEndpoints,
	) -> Result<ReqwestTestHandler> {
		DiscordOAuth::with_http_client(config, test_reqwest_http_client())
			.with_endpoints(endpoints)
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {httpmock as _, tokio as _};
