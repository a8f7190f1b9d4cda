//! Handler orchestration for the authorize and callback routes.

pub mod authorize;
pub mod callback;

pub use callback::CallbackQuery;

// self
use crate::{
	_prelude::*,
	config::{DiscordOAuthConfig, RoutePaths},
	hooks::{AuthHook, ResponseShaper},
	http::ProviderHttpClient,
	obs::{self, FlowLogger},
	provider::ProviderEndpoints,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Handler specialized for the crate's default reqwest transport.
pub type ReqwestDiscordOAuth = DiscordOAuth<ReqwestHttpClient>;

/// Coordinates the consent redirect and the callback exchange for one Discord integration.
///
/// The handler owns the configuration, endpoint set, transport, hooks, and logging seam so the
/// route implementations stay linear request/response sequences. Each inbound request is handled
/// independently; the struct holds no mutable state, so sharing one instance across router tasks
/// needs no synchronization.
#[derive(Clone)]
pub struct DiscordOAuth<C>
where
	C: ?Sized + ProviderHttpClient,
{
	/// Transport used for the token exchange and profile fetch.
	pub http_client: Arc<C>,
	/// Immutable integration configuration.
	pub config: DiscordOAuthConfig,
	/// Provider endpoint set; Discord's fixed endpoints unless overridden.
	pub endpoints: ProviderEndpoints,
	routes: RoutePaths,
	hook: Option<Arc<dyn AuthHook>>,
	shaper: Option<Arc<dyn ResponseShaper>>,
	logger: Arc<dyn FlowLogger>,
}
impl<C> DiscordOAuth<C>
where
	C: ?Sized + ProviderHttpClient,
{
	/// Creates a handler that reuses the caller-provided transport.
	pub fn with_http_client(config: DiscordOAuthConfig, http_client: impl Into<Arc<C>>) -> Self {
		let routes = config.routes();

		Self {
			http_client: http_client.into(),
			config,
			endpoints: ProviderEndpoints::discord(),
			routes,
			hook: None,
			shaper: None,
			logger: obs::default_logger(),
		}
	}

	/// Overrides the provider endpoints (tests, self-hosted proxies); HTTPS-validated with
	/// loopback hosts excepted.
	pub fn with_endpoints(mut self, endpoints: ProviderEndpoints) -> Result<Self> {
		endpoints.validate()?;

		self.endpoints = endpoints;

		Ok(self)
	}

	/// Attaches the post-auth hook invoked after normalization.
	pub fn with_hook(mut self, hook: Arc<dyn AuthHook>) -> Self {
		self.hook = Some(hook);

		self
	}

	/// Attaches the response shaper that replaces the default success body.
	pub fn with_response_shaper(mut self, shaper: Arc<dyn ResponseShaper>) -> Self {
		self.shaper = Some(shaper);

		self
	}

	/// Replaces the logging collaborator.
	pub fn with_logger(mut self, logger: Arc<dyn FlowLogger>) -> Self {
		self.logger = logger;

		self
	}

	/// The two mountable paths derived from the configured prefix.
	pub fn routes(&self) -> &RoutePaths {
		&self.routes
	}
}
#[cfg(feature = "reqwest")]
impl DiscordOAuth<ReqwestHttpClient> {
	/// Creates a handler with the bundled reqwest transport.
	pub fn new(config: DiscordOAuthConfig) -> Self {
		Self::with_http_client(config, ReqwestHttpClient::default())
	}
}
impl<C> Debug for DiscordOAuth<C>
where
	C: ?Sized + ProviderHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("DiscordOAuth")
			.field("config", &self.config)
			.field("endpoints", &self.endpoints)
			.field("routes", &self.routes)
			.field("hook_set", &self.hook.is_some())
			.field("shaper_set", &self.shaper.is_some())
			.finish()
	}
}
