//! Logging seam for the callback flow's failure paths.
//!
//! # Feature Flags
//!
//! - Enable `tracing` so [`default_logger`] emits structured error events; without it the default
//!   logger discards everything.
//!
//! The seam exists so tests can inject a recorder and assert on what was logged without
//! capturing process output. Upstream response bodies are recorded here for operators and are
//! never echoed to the end user.

// self
use crate::_prelude::*;

/// Events recorded on the callback flow's failure paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowEvent {
	/// Token endpoint returned a non-success status.
	TokenExchangeFailed {
		/// HTTP status code returned by the token endpoint.
		status: u16,
		/// Upstream response body, retained for operators only.
		body: String,
	},
	/// Current-user endpoint returned a non-success status.
	UserFetchFailed {
		/// HTTP status code returned by the current-user endpoint.
		status: u16,
		/// Upstream response body, retained for operators only.
		body: String,
	},
	/// Caller-supplied post-auth hook failed; distinguishable from internal failures here even
	/// though the HTTP reply is the same generic 500.
	HookFailed {
		/// Rendering of the hook's error.
		detail: String,
	},
	/// Any other failure that terminated the flow (transport, malformed JSON, shaper).
	FlowFailed {
		/// Rendering of the terminating error.
		detail: String,
	},
}
impl FlowEvent {
	/// Returns a stable label suitable for log fields.
	pub const fn as_str(&self) -> &'static str {
		match self {
			FlowEvent::TokenExchangeFailed { .. } => "token_exchange_failed",
			FlowEvent::UserFetchFailed { .. } => "user_fetch_failed",
			FlowEvent::HookFailed { .. } => "hook_failed",
			FlowEvent::FlowFailed { .. } => "flow_failed",
		}
	}
}
impl Display for FlowEvent {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Injected logging collaborator with a single record method.
pub trait FlowLogger: Send + Sync {
	/// Records one flow event.
	fn record(&self, event: &FlowEvent);
}

/// Logger that emits `tracing` error events.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;
#[cfg(feature = "tracing")]
impl FlowLogger for TracingLogger {
	fn record(&self, event: &FlowEvent) {
		match event {
			FlowEvent::TokenExchangeFailed { status, body } => tracing::error!(
				kind = event.as_str(),
				status = *status,
				body = body.as_str(),
				"Discord token exchange failed."
			),
			FlowEvent::UserFetchFailed { status, body } => tracing::error!(
				kind = event.as_str(),
				status = *status,
				body = body.as_str(),
				"Discord user fetch failed."
			),
			FlowEvent::HookFailed { detail } => tracing::error!(
				kind = event.as_str(),
				detail = detail.as_str(),
				"Post-auth hook failed."
			),
			FlowEvent::FlowFailed { detail } => tracing::error!(
				kind = event.as_str(),
				detail = detail.as_str(),
				"Discord OAuth flow failed."
			),
		}
	}
}

/// Logger that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLogger;
impl FlowLogger for NoopLogger {
	fn record(&self, _event: &FlowEvent) {}
}

/// Returns the default logger for the enabled feature set.
pub fn default_logger() -> Arc<dyn FlowLogger> {
	#[cfg(feature = "tracing")]
	{
		Arc::new(TracingLogger)
	}
	#[cfg(not(feature = "tracing"))]
	{
		Arc::new(NoopLogger)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn event_labels_are_stable() {
		let event = FlowEvent::TokenExchangeFailed { status: 400, body: "nope".into() };

		assert_eq!(event.as_str(), "token_exchange_failed");
		assert_eq!(event.to_string(), "token_exchange_failed");
		assert_eq!(FlowEvent::HookFailed { detail: String::new() }.as_str(), "hook_failed");
	}

	#[test]
	fn default_logger_accepts_events() {
		// Smoke test: the default logger must be callable whichever feature set is active.
		default_logger().record(&FlowEvent::FlowFailed { detail: "test".into() });
	}
}
