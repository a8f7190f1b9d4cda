//! Integration configuration and route-prefix handling.

// self
use crate::_prelude::*;

/// Route prefix used when none (or an empty one) is supplied.
pub const DEFAULT_ROUTE_PREFIX: &str = "/auth/discord";
/// Scopes requested when the caller supplies none.
pub const DEFAULT_SCOPES: &[&str] = &["identify"];

/// Immutable configuration for one Discord OAuth2 integration.
///
/// Credential fields are intentionally not validated at construction time: an empty
/// `client_id`/`client_secret`/`redirect_uri` is reported when a request reaches the handler, so
/// a partially configured deployment serves explicit errors instead of failing at registration.
#[derive(Clone)]
pub struct DiscordOAuthConfig {
	/// OAuth2 client identifier issued by the Discord developer portal.
	pub client_id: String,
	/// OAuth2 client secret paired with the identifier.
	pub client_secret: String,
	/// Redirect URI registered with the provider; must match the mounted callback route.
	pub redirect_uri: String,
	/// Route prefix the host mounts the two handlers under.
	pub route_prefix: String,
	/// Scopes requested on the consent screen, space-joined into the `scope` parameter.
	pub scopes: Vec<String>,
}
impl DiscordOAuthConfig {
	/// Creates a configuration with the default route prefix and scope list.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		redirect_uri: impl Into<String>,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			redirect_uri: redirect_uri.into(),
			route_prefix: DEFAULT_ROUTE_PREFIX.into(),
			scopes: DEFAULT_SCOPES.iter().map(|scope| (*scope).into()).collect(),
		}
	}

	/// Overrides the route prefix; normalization happens when routes are derived.
	pub fn with_route_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.route_prefix = prefix.into();

		self
	}

	/// Replaces the requested scope list.
	pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scopes = scopes.into_iter().map(Into::into).collect();

		self
	}

	/// Derives the two mountable route paths from the configured prefix.
	pub fn routes(&self) -> RoutePaths {
		RoutePaths::from_prefix(&self.route_prefix)
	}

	/// Space-joined scope list used as the consent URL's `scope` parameter.
	pub fn scope_param(&self) -> String {
		self.scopes.join(" ")
	}

	/// Whether the authorize route has the credentials it needs (identifier + redirect URI).
	pub(crate) fn has_authorize_credentials(&self) -> bool {
		!self.client_id.is_empty() && !self.redirect_uri.is_empty()
	}

	/// Whether the callback route has the credentials it needs (identifier, secret, redirect URI).
	pub(crate) fn has_callback_credentials(&self) -> bool {
		self.has_authorize_credentials() && !self.client_secret.is_empty()
	}
}
impl Debug for DiscordOAuthConfig {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("DiscordOAuthConfig")
			.field("client_id", &self.client_id)
			.field("client_secret_set", &!self.client_secret.is_empty())
			.field("redirect_uri", &self.redirect_uri)
			.field("route_prefix", &self.route_prefix)
			.field("scopes", &self.scopes)
			.finish()
	}
}

/// The two mountable route paths derived from a prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePaths {
	/// Path of the consent-redirect route (`GET <prefix>`).
	pub authorize: String,
	/// Path of the callback route (`GET <prefix>/callback`).
	pub callback: String,
}
impl RoutePaths {
	/// Normalizes the prefix and derives both paths from it.
	pub fn from_prefix(raw: &str) -> Self {
		let prefix = normalize_route_prefix(raw);
		let callback = format!("{prefix}/callback");

		Self { authorize: prefix, callback }
	}
}

/// Normalizes a route prefix: strips one trailing slash, then falls back to
/// [`DEFAULT_ROUTE_PREFIX`] when the result is empty.
///
/// Idempotent, so paths derived from an already normalized prefix never drift.
pub fn normalize_route_prefix(raw: &str) -> String {
	let trimmed = raw.strip_suffix('/').unwrap_or(raw);

	if trimmed.is_empty() { DEFAULT_ROUTE_PREFIX.into() } else { trimmed.into() }
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn route_prefix_normalization_is_idempotent() {
		for raw in ["", "/x", "/x/", "/auth/discord"] {
			let once = normalize_route_prefix(raw);
			let twice = normalize_route_prefix(&once);

			assert_eq!(once, twice, "Normalizing {raw:?} twice must equal normalizing once.");
			assert_eq!(RoutePaths::from_prefix(raw), RoutePaths::from_prefix(&once));
		}
	}

	#[test]
	fn route_paths_cover_prefix_shapes() {
		assert_eq!(
			RoutePaths::from_prefix(""),
			RoutePaths {
				authorize: "/auth/discord".into(),
				callback: "/auth/discord/callback".into()
			}
		);
		assert_eq!(
			RoutePaths::from_prefix("/x/"),
			RoutePaths { authorize: "/x".into(), callback: "/x/callback".into() }
		);
		assert_eq!(RoutePaths::from_prefix("/"), RoutePaths::from_prefix(""));
	}

	#[test]
	fn config_defaults_and_builders() {
		let config = DiscordOAuthConfig::new("id", "secret", "https://app.example.com/cb");

		assert_eq!(config.route_prefix, DEFAULT_ROUTE_PREFIX);
		assert_eq!(config.scope_param(), "identify");
		assert!(config.has_callback_credentials());

		let config = config.with_scopes(["identify", "email"]).with_route_prefix("/sso/");

		assert_eq!(config.scope_param(), "identify email");
		assert_eq!(config.routes().authorize, "/sso");
		assert_eq!(config.routes().callback, "/sso/callback");
	}

	#[test]
	fn empty_credentials_are_reported_per_route() {
		let config = DiscordOAuthConfig::new("id", "", "https://app.example.com/cb");

		assert!(config.has_authorize_credentials());
		assert!(!config.has_callback_credentials());

		let config = DiscordOAuthConfig::new("", "secret", "https://app.example.com/cb");

		assert!(!config.has_authorize_credentials());
	}

	#[test]
	fn debug_hides_the_client_secret() {
		let rendered =
			format!("{:?}", DiscordOAuthConfig::new("id", "super-secret", "https://cb"));

		assert!(!rendered.contains("super-secret"));
		assert!(rendered.contains("client_secret_set: true"));
	}
}
