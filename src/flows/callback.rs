//! Callback handler (`GET <prefix>/callback`): error branching, token exchange, profile fetch,
//! normalization, hooks, and response building.
//!
//! The sequence is linear and terminal on first failure; no retries anywhere. The two outbound
//! calls are strictly sequential because the profile fetch needs the exchanged token.

// crates.io
use serde_json::json;
// self
use crate::{
	_prelude::*,
	error::UpstreamError,
	flows::DiscordOAuth,
	hooks::ResponseContext,
	http::{ProviderHttpClient, ProviderRequest},
	obs::FlowEvent,
	reply::{self, HttpReply},
	token::TokenResponse,
	user::{NormalizedUser, RawUserProfile},
};

/// Parsed callback query; hosts feed their query extractor's output straight into this.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CallbackQuery {
	/// Authorization code issued by the provider.
	#[serde(default)]
	pub code: Option<String>,
	/// Provider-reported error value (e.g. `access_denied`).
	#[serde(default)]
	pub error: Option<String>,
}
impl CallbackQuery {
	/// Query carrying an authorization code.
	pub fn with_code(code: impl Into<String>) -> Self {
		Self { code: Some(code.into()), error: None }
	}

	/// Query carrying a provider-reported error.
	pub fn with_error(error: impl Into<String>) -> Self {
		Self { code: None, error: Some(error.into()) }
	}
}

impl<C> DiscordOAuth<C>
where
	C: ?Sized + ProviderHttpClient,
{
	/// Handles `GET <prefix>/callback`.
	///
	/// Provider-reported errors and a missing code short-circuit with 400 before any outbound
	/// call; an empty-string `code` or `error` counts as absent, so `?code=` never reaches the
	/// token endpoint. Missing credentials yield 500; upstream rejections yield 502 with their
	/// bodies logged rather than echoed; everything else collapses into the generic 500.
	pub async fn handle_callback(&self, query: CallbackQuery) -> HttpReply {
		if let Some(error) = query.error.filter(|error| !error.is_empty()) {
			return HttpReply::json(400, json!({ "error": error }));
		}

		let Some(code) = query.code.filter(|code| !code.is_empty()) else {
			return HttpReply::error_json(400, reply::MISSING_CODE);
		};

		if !self.config.has_callback_credentials() {
			return HttpReply::error_json(500, reply::NOT_CONFIGURED);
		}

		match self.exchange_and_respond(&code).await {
			Ok(success) => success,
			Err(err) => self.reply_for_error(err),
		}
	}

	async fn exchange_and_respond(&self, code: &str) -> Result<HttpReply> {
		let tokens = self.exchange_code(code).await?;
		let raw_user = self.fetch_current_user(&tokens).await?;
		let user = NormalizedUser::from_raw(&raw_user);

		if let Some(hook) = self.hook.as_ref()
			&& let Err(source) = hook.on_user_authenticated(&user, &tokens).await
		{
			self.logger.record(&FlowEvent::HookFailed { detail: source.to_string() });

			return Err(Error::Hook { source });
		}

		let body = if let Some(shaper) = self.shaper.as_ref() {
			shaper
				.shape(ResponseContext { user: &user, raw_user: &raw_user, tokens: &tokens })
				.await
				.map_err(|source| Error::ResponseShape { source })?
		} else {
			json!({
				"user": user,
				"access_token": tokens.access_token,
				"token_type": tokens.token_type,
				"expires_in": tokens.expires_in,
			})
		};

		Ok(HttpReply::json(200, body))
	}

	async fn exchange_code(&self, code: &str) -> Result<TokenResponse> {
		let form = vec![
			("client_id".into(), self.config.client_id.clone()),
			("client_secret".into(), self.config.client_secret.clone()),
			("grant_type".into(), "authorization_code".into()),
			("code".into(), code.into()),
			("redirect_uri".into(), self.config.redirect_uri.clone()),
		];
		let request = ProviderRequest::post_form(self.endpoints.token.clone(), form);
		let response = self.http_client.execute(request).await?;

		if !response.is_success() {
			self.logger.record(&FlowEvent::TokenExchangeFailed {
				status: response.status,
				body: response.body_text(),
			});

			return Err(UpstreamError::TokenExchange { status: response.status }.into());
		}

		parse_json("token", &response.body)
	}

	async fn fetch_current_user(&self, tokens: &TokenResponse) -> Result<RawUserProfile> {
		let request = ProviderRequest::get(self.endpoints.current_user.clone())
			.with_authorization(tokens.authorization_header());
		let response = self.http_client.execute(request).await?;

		if !response.is_success() {
			self.logger.record(&FlowEvent::UserFetchFailed {
				status: response.status,
				body: response.body_text(),
			});

			return Err(UpstreamError::UserFetch { status: response.status }.into());
		}

		parse_json("current-user", &response.body)
	}

	fn reply_for_error(&self, err: Error) -> HttpReply {
		match err {
			Error::Upstream(UpstreamError::TokenExchange { .. }) =>
				HttpReply::error_json(502, reply::TOKEN_EXCHANGE_FAILED),
			Error::Upstream(UpstreamError::UserFetch { .. }) =>
				HttpReply::error_json(502, reply::USER_FETCH_FAILED),
			Error::Config(_) => HttpReply::error_json(500, reply::NOT_CONFIGURED),
			// Recorded as a HookFailed event where it was caught.
			Error::Hook { .. } => HttpReply::error_json(500, reply::INTERNAL_ERROR),
			other => {
				self.logger.record(&FlowEvent::FlowFailed { detail: other.to_string() });

				HttpReply::error_json(500, reply::INTERNAL_ERROR)
			},
		}
	}
}

fn parse_json<T>(endpoint: &'static str, body: &[u8]) -> Result<T>
where
	T: for<'de> Deserialize<'de>,
{
	let mut deserializer = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::ResponseParse { endpoint, source })
}
