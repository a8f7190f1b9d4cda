//! Discord endpoint set consumed by both handlers.
//!
//! Production deployments use [`ProviderEndpoints::discord`]; tests and self-hosted proxies may
//! override the set, subject to HTTPS validation (loopback hosts excepted so local mock servers
//! stay usable).

// self
use crate::{_prelude::*, error::ConfigError};

/// Endpoint set for the authorization-code handshake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderEndpoints {
	/// Authorization endpoint the consent redirect points at.
	pub authorization: Url,
	/// Token endpoint used for the code-for-token exchange.
	pub token: Url,
	/// Current-user endpoint used for the profile fetch.
	pub current_user: Url,
}
impl ProviderEndpoints {
	/// Discord's authorization endpoint.
	pub const AUTHORIZATION_URL: &'static str = "https://discord.com/api/oauth2/authorize";
	/// Discord's current-user endpoint.
	pub const CURRENT_USER_URL: &'static str = "https://discord.com/api/users/@me";
	/// Discord's token endpoint.
	pub const TOKEN_URL: &'static str = "https://discord.com/api/oauth2/token";

	/// Returns the fixed Discord endpoint set.
	pub fn discord() -> Self {
		Self {
			authorization: Url::parse(Self::AUTHORIZATION_URL)
				.expect("Discord authorization endpoint constant must parse."),
			token: Url::parse(Self::TOKEN_URL)
				.expect("Discord token endpoint constant must parse."),
			current_user: Url::parse(Self::CURRENT_USER_URL)
				.expect("Discord current-user endpoint constant must parse."),
		}
	}

	/// Validates that every endpoint uses HTTPS; loopback hosts are exempt.
	pub fn validate(&self) -> Result<(), ConfigError> {
		validate_endpoint("authorization", &self.authorization)?;
		validate_endpoint("token", &self.token)?;
		validate_endpoint("current-user", &self.current_user)?;

		Ok(())
	}
}
impl Default for ProviderEndpoints {
	fn default() -> Self {
		Self::discord()
	}
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), ConfigError> {
	if url.scheme() == "https" || is_loopback(url) {
		Ok(())
	} else {
		Err(ConfigError::InsecureEndpoint { endpoint: name, url: url.to_string() })
	}
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(url::Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(url::Host::Ipv4(addr)) => addr.is_loopback(),
		Some(url::Host::Ipv6(addr)) => addr.is_loopback(),
		None => false,
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Failed to parse endpoint URL for test.")
	}

	#[test]
	fn discord_defaults_point_at_the_fixed_endpoints() {
		let endpoints = ProviderEndpoints::default();

		assert_eq!(endpoints.authorization.as_str(), ProviderEndpoints::AUTHORIZATION_URL);
		assert_eq!(endpoints.token.as_str(), ProviderEndpoints::TOKEN_URL);
		assert_eq!(endpoints.current_user.as_str(), ProviderEndpoints::CURRENT_USER_URL);
		assert!(endpoints.validate().is_ok());
	}

	#[test]
	fn validation_rejects_plain_http_on_public_hosts() {
		let endpoints = ProviderEndpoints {
			authorization: url("http://example.com/authorize"),
			token: url("https://example.com/token"),
			current_user: url("https://example.com/users/@me"),
		};
		let err =
			endpoints.validate().expect_err("Plain HTTP on a public host must be rejected.");

		assert!(matches!(err, ConfigError::InsecureEndpoint { endpoint: "authorization", .. }));
	}

	#[test]
	fn validation_allows_loopback_hosts() {
		let endpoints = ProviderEndpoints {
			authorization: url("http://127.0.0.1:5000/authorize"),
			token: url("http://localhost:5000/token"),
			current_user: url("http://[::1]:5000/users/@me"),
		};

		assert!(endpoints.validate().is_ok());
	}
}
