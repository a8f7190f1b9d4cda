//! Framework-agnostic HTTP replies produced by the handlers.
//!
//! A host router translates [`HttpReply`] into its own response type via the status, location,
//! content-type, and body accessors. The message constants are the crate's complete
//! user-visible error vocabulary; upstream bodies and hook errors are logged, never echoed.

// crates.io
use serde_json::json;
// self
use crate::_prelude::*;

/// Body served when required credentials are missing (text on the authorize route, JSON `error`
/// value on the callback route).
pub const NOT_CONFIGURED: &str = "Discord OAuth is not configured";
/// JSON `error` value when the callback carries neither a code nor a provider error.
pub const MISSING_CODE: &str = "Missing \"code\" query parameter";
/// JSON `error` value when the token exchange fails.
pub const TOKEN_EXCHANGE_FAILED: &str = "Failed to exchange Discord OAuth token";
/// JSON `error` value when the profile fetch fails.
pub const USER_FETCH_FAILED: &str = "Failed to fetch Discord user";
/// JSON `error` value for any unexpected failure inside the flow.
pub const INTERNAL_ERROR: &str = "Internal server error during OAuth flow";

/// Response value a host router renders into its own response type.
#[derive(Clone, Debug, PartialEq)]
pub enum HttpReply {
	/// 302 redirect.
	Redirect {
		/// Target URL to place in the `Location` header.
		location: Url,
	},
	/// JSON body with the given status.
	Json {
		/// HTTP status code.
		status: u16,
		/// Body value, serialized as `application/json`.
		body: serde_json::Value,
	},
	/// Plain-text body with the given status.
	Text {
		/// HTTP status code.
		status: u16,
		/// Body text, served as `text/plain`.
		body: String,
	},
}
impl HttpReply {
	/// Builds a 302 redirect reply.
	pub fn redirect(location: Url) -> Self {
		Self::Redirect { location }
	}

	/// Builds a JSON reply.
	pub fn json(status: u16, body: serde_json::Value) -> Self {
		Self::Json { status, body }
	}

	/// Builds the canonical JSON error body `{"error": <message>}`.
	pub fn error_json(status: u16, message: &str) -> Self {
		Self::json(status, json!({ "error": message }))
	}

	/// Builds a plain-text reply.
	pub fn text(status: u16, body: impl Into<String>) -> Self {
		Self::Text { status, body: body.into() }
	}

	/// HTTP status code of the reply.
	pub fn status(&self) -> u16 {
		match self {
			Self::Redirect { .. } => 302,
			Self::Json { status, .. } | Self::Text { status, .. } => *status,
		}
	}

	/// `Location` header target for redirect replies.
	pub fn location(&self) -> Option<&Url> {
		match self {
			Self::Redirect { location } => Some(location),
			_ => None,
		}
	}

	/// `Content-Type` header value, when the reply carries a body.
	pub fn content_type(&self) -> Option<&'static str> {
		match self {
			Self::Redirect { .. } => None,
			Self::Json { .. } => Some("application/json"),
			Self::Text { .. } => Some("text/plain; charset=utf-8"),
		}
	}

	/// Consumes the reply and renders its body bytes (empty for redirects).
	pub fn into_body_bytes(self) -> Vec<u8> {
		match self {
			Self::Redirect { .. } => Vec::new(),
			Self::Json { body, .. } => body.to_string().into_bytes(),
			Self::Text { body, .. } => body.into_bytes(),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn error_json_uses_the_literal_error_key() {
		let reply = HttpReply::error_json(400, MISSING_CODE);

		assert_eq!(reply.status(), 400);
		assert_eq!(reply.content_type(), Some("application/json"));
		assert_eq!(
			reply,
			HttpReply::json(400, json!({ "error": "Missing \"code\" query parameter" }))
		);
	}

	#[test]
	fn redirect_exposes_location_and_an_empty_body() {
		let location =
			Url::parse("https://discord.com/api/oauth2/authorize?client_id=x")
				.expect("Redirect target should parse.");
		let reply = HttpReply::redirect(location.clone());

		assert_eq!(reply.status(), 302);
		assert_eq!(reply.location(), Some(&location));
		assert_eq!(reply.content_type(), None);
		assert!(reply.into_body_bytes().is_empty());
	}

	#[test]
	fn text_reply_round_trips_its_body() {
		let reply = HttpReply::text(500, NOT_CONFIGURED);

		assert_eq!(reply.status(), 500);
		assert_eq!(reply.content_type(), Some("text/plain; charset=utf-8"));
		assert_eq!(reply.into_body_bytes(), NOT_CONFIGURED.as_bytes());
	}
}
