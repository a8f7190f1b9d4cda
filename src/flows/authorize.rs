//! Consent-redirect handler (`GET <prefix>`).

// self
use crate::{
	flows::DiscordOAuth,
	http::ProviderHttpClient,
	reply::{self, HttpReply},
};

impl<C> DiscordOAuth<C>
where
	C: ?Sized + ProviderHttpClient,
{
	/// Handles `GET <prefix>`: a 302 redirect to the provider's consent screen, or a 500
	/// plain-text reply when the client identifier or redirect URI is missing.
	///
	/// The redirect carries exactly `client_id`, `response_type=code`, `redirect_uri`, the
	/// space-joined `scope`, and `prompt=consent` so the provider always shows the consent
	/// screen instead of silently re-approving. Nothing is stored between this call and the
	/// later callback.
	pub fn handle_authorize(&self) -> HttpReply {
		if !self.config.has_authorize_credentials() {
			return HttpReply::text(500, reply::NOT_CONFIGURED);
		}

		let mut location = self.endpoints.authorization.clone();

		location
			.query_pairs_mut()
			.append_pair("client_id", &self.config.client_id)
			.append_pair("response_type", "code")
			.append_pair("redirect_uri", &self.config.redirect_uri)
			.append_pair("scope", &self.config.scope_param())
			.append_pair("prompt", "consent");

		HttpReply::redirect(location)
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use crate::{config::DiscordOAuthConfig, flows::ReqwestDiscordOAuth, reply};

	fn config() -> DiscordOAuthConfig {
		DiscordOAuthConfig::new("client-123", "secret-123", "https://app.example.com/cb")
	}

	#[test]
	fn authorize_redirects_with_the_exact_parameter_set() {
		let handler = ReqwestDiscordOAuth::new(config().with_scopes(["identify", "email"]));
		let reply = handler.handle_authorize();
		let location = reply.location().expect("Authorize reply should be a redirect.");

		assert_eq!(reply.status(), 302);
		assert_eq!(location.host_str(), Some("discord.com"));
		assert_eq!(location.path(), "/api/oauth2/authorize");

		let pairs: HashMap<_, _> = location.query_pairs().into_owned().collect();

		assert_eq!(pairs.len(), 5);
		assert_eq!(pairs.get("client_id"), Some(&"client-123".into()));
		assert_eq!(pairs.get("response_type"), Some(&"code".into()));
		assert_eq!(pairs.get("redirect_uri"), Some(&"https://app.example.com/cb".into()));
		assert_eq!(pairs.get("scope"), Some(&"identify email".into()));
		assert_eq!(pairs.get("prompt"), Some(&"consent".into()));
		assert!(!pairs.contains_key("state"), "No anti-forgery state parameter is minted.");
	}

	#[test]
	fn authorize_rejects_missing_credentials_with_plain_text() {
		let mut incomplete = config();

		incomplete.client_id.clear();

		let reply = ReqwestDiscordOAuth::new(incomplete).handle_authorize();

		assert_eq!(reply.status(), 500);
		assert_eq!(reply.content_type(), Some("text/plain; charset=utf-8"));
		assert_eq!(reply.into_body_bytes(), reply::NOT_CONFIGURED.as_bytes());
	}

	#[test]
	fn routes_follow_the_normalized_prefix() {
		let handler = ReqwestDiscordOAuth::new(config().with_route_prefix("/sso/discord/"));

		assert_eq!(handler.routes().authorize, "/sso/discord");
		assert_eq!(handler.routes().callback, "/sso/discord/callback");
	}
}
