//! Caller-supplied strategy hooks invoked at fixed points of the callback flow.
//!
//! Both hooks run strictly sequentially inside a single callback invocation: the post-auth hook
//! after normalization, the response shaper last. Their futures are awaited before the flow
//! proceeds, and a failure from either is caught by the handler and converted into the generic
//! internal-error reply, never surfaced to the end user.

// self
use crate::{
	_prelude::*,
	error::BoxError,
	token::TokenResponse,
	user::{NormalizedUser, RawUserProfile},
};

/// Future returned by [`AuthHook::on_user_authenticated`].
pub type HookFuture<'a> =
	Pin<Box<dyn Future<Output = std::result::Result<(), BoxError>> + 'a + Send>>;
/// Future returned by [`ResponseShaper::shape`].
pub type ShapedBodyFuture<'a> =
	Pin<Box<dyn Future<Output = std::result::Result<serde_json::Value, BoxError>> + 'a + Send>>;

/// Post-authentication hook, typically used to persist the user.
///
/// The crate never stores anything itself; implement this trait to upsert the normalized user
/// (and, if needed, the tokens) into your own storage.
pub trait AuthHook: Send + Sync {
	/// Called once per successful callback with the normalized user and the full token response.
	fn on_user_authenticated<'a>(
		&'a self,
		user: &'a NormalizedUser,
		tokens: &'a TokenResponse,
	) -> HookFuture<'a>;
}

/// Borrowed view of the completed handshake handed to [`ResponseShaper::shape`].
#[derive(Clone, Copy, Debug)]
pub struct ResponseContext<'a> {
	/// Normalized user derived from the raw profile.
	pub user: &'a NormalizedUser,
	/// Provider's literal profile payload.
	pub raw_user: &'a RawUserProfile,
	/// Provider's token-exchange result.
	pub tokens: &'a TokenResponse,
}

/// Replaces the default success body; the returned value becomes the 200 JSON body verbatim.
pub trait ResponseShaper: Send + Sync {
	/// Produces the JSON body for a successful callback.
	fn shape<'a>(&'a self, ctx: ResponseContext<'a>) -> ShapedBodyFuture<'a>;
}
