//! Token-exchange wire model.

// self
use crate::_prelude::*;

/// Provider's token-exchange result, passed through the flow unmodified and never persisted by
/// the crate itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
	/// Access token granted for the requested scopes.
	pub access_token: String,
	/// Token type placed verbatim in the `Authorization` header of the user fetch.
	pub token_type: String,
	/// Lifetime in seconds, echoed into the default success body as received.
	pub expires_in: u64,
	/// Optional refresh token; present when the provider grants one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<String>,
	/// Granted scope string; defaulted to empty when the provider omits it.
	#[serde(default)]
	pub scope: String,
}
impl TokenResponse {
	/// `Authorization` header value built from type + token, exactly as received.
	pub fn authorization_header(&self) -> String {
		format!("{} {}", self.token_type, self.access_token)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn deserializes_a_terse_provider_response() {
		let tokens: TokenResponse = serde_json::from_str(
			"{\"access_token\":\"abc\",\"token_type\":\"Bearer\",\"expires_in\":604800}",
		)
		.expect("Terse token response should deserialize.");

		assert_eq!(tokens.authorization_header(), "Bearer abc");
		assert_eq!(tokens.expires_in, 604800);
		assert_eq!(tokens.refresh_token, None);
		assert_eq!(tokens.scope, "");
	}
}
