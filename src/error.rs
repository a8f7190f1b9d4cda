//! Error taxonomy shared by the authorize and callback handlers.
//!
//! Every failure is terminal for the request; nothing here is retried. The mapping from these
//! variants to HTTP replies lives next to the callback handler so the taxonomy stays
//! transport-agnostic.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Boxed error type carried by transports and caller-supplied hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical handler error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Provider answered with a non-success status.
	#[error(transparent)]
	Upstream(#[from] UpstreamError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Caller-supplied post-auth hook rejected the authenticated user.
	#[error("Post-auth hook failed.")]
	Hook {
		/// Failure raised by the hook implementation.
		#[source]
		source: BoxError,
	},
	/// Caller-supplied response shaper failed to produce a body.
	#[error("Response shaper failed.")]
	ResponseShape {
		/// Failure raised by the shaper implementation.
		#[source]
		source: BoxError,
	},
	/// Provider responded with JSON the wire models cannot parse.
	#[error("The {endpoint} endpoint returned malformed JSON.")]
	ResponseParse {
		/// Which provider endpoint produced the payload.
		endpoint: &'static str,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Configuration failures raised by the handlers.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Client identifier, client secret, or redirect URI is empty.
	///
	/// Deliberately does not name the missing field so the HTTP surface never leaks which
	/// credential is absent.
	#[error("Discord OAuth is not configured.")]
	MissingCredentials,
	/// Custom endpoint override must use HTTPS (loopback hosts excepted).
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
}

/// Non-success responses from the provider's endpoints.
#[derive(Debug, ThisError)]
pub enum UpstreamError {
	/// Token endpoint rejected the code-for-token exchange.
	#[error("Token exchange returned HTTP {status}.")]
	TokenExchange {
		/// HTTP status code returned by the token endpoint.
		status: u16,
	},
	/// Current-user endpoint rejected the profile fetch.
	#[error("User fetch returned HTTP {status}.")]
	UserFetch {
		/// HTTP status code returned by the current-user endpoint.
		status: u16,
	},
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the provider.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the provider.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
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
