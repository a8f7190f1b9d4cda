//! Raw and normalized user shapes plus the pure mapping between them.
//!
//! The two shapes overlap but serialize differently on purpose: in [`NormalizedUser`] the
//! `globalName`/`avatar`/`email` trio is always present (explicit `null` when the provider sent
//! nothing), while `discriminator`/`verified`/`locale` are omitted entirely when absent. The
//! asymmetry is observable wire behavior inherited from the upstream contract and is preserved
//! exactly rather than tidied up.

// self
use crate::_prelude::*;

/// Discord's literal `/users/@me` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUserProfile {
	/// Provider user identifier (snowflake rendered as a string).
	pub id: String,
	/// Account username.
	pub username: String,
	/// Display name; `null` when the user never set one.
	#[serde(default)]
	pub global_name: Option<String>,
	/// Avatar hash; `null` when the user has no custom avatar.
	#[serde(default)]
	pub avatar: Option<String>,
	/// Legacy discriminator; omitted for migrated accounts.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub discriminator: Option<String>,
	/// Email address; requires the `email` scope.
	#[serde(default)]
	pub email: Option<String>,
	/// Whether the email address is verified; requires the `email` scope.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub verified: Option<bool>,
	/// Chosen locale, when the provider reports one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub locale: Option<String>,
}

/// Canonical user shape handed to hooks and serialized into the success body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedUser {
	/// Provider user identifier, copied verbatim.
	pub id: String,
	/// Account username, copied verbatim.
	pub username: String,
	/// Display name; serialized as explicit `null` when absent.
	#[serde(default)]
	pub global_name: Option<String>,
	/// Avatar hash; serialized as explicit `null` when absent.
	#[serde(default)]
	pub avatar: Option<String>,
	/// Legacy discriminator; omitted from the output when absent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub discriminator: Option<String>,
	/// Email address; serialized as explicit `null` when absent.
	#[serde(default)]
	pub email: Option<String>,
	/// Email verification flag; omitted from the output when absent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub verified: Option<bool>,
	/// Chosen locale; omitted from the output when absent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub locale: Option<String>,
}
impl NormalizedUser {
	/// Pure, total mapping from the provider's raw profile; no field needs external state.
	pub fn from_raw(raw: &RawUserProfile) -> Self {
		Self {
			id: raw.id.clone(),
			username: raw.username.clone(),
			global_name: raw.global_name.clone(),
			avatar: raw.avatar.clone(),
			discriminator: raw.discriminator.clone(),
			email: raw.email.clone(),
			verified: raw.verified,
			locale: raw.locale.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn minimal_raw() -> RawUserProfile {
		serde_json::from_str("{\"id\":\"1\",\"username\":\"a\",\"global_name\":null}")
			.expect("Minimal raw profile should deserialize.")
	}

	#[test]
	fn normalization_is_deterministic_and_verbatim() {
		let raw = RawUserProfile {
			id: "42".into(),
			username: "someone".into(),
			global_name: Some("Someone".into()),
			avatar: Some("abcd".into()),
			discriminator: Some("0001".into()),
			email: Some("someone@example.com".into()),
			verified: Some(true),
			locale: Some("en-US".into()),
		};
		let user = NormalizedUser::from_raw(&raw);

		assert_eq!(user, NormalizedUser::from_raw(&raw));
		assert_eq!(user.id, raw.id);
		assert_eq!(user.username, raw.username);
		assert_eq!(user.global_name, raw.global_name);
		assert_eq!(user.verified, Some(true));
	}

	#[test]
	fn absent_fields_keep_the_null_vs_omitted_asymmetry() {
		let user = NormalizedUser::from_raw(&minimal_raw());
		let value = serde_json::to_value(&user).expect("Normalized user should serialize.");
		let object = value.as_object().expect("Normalized user must serialize as an object.");

		// Explicit nulls for the always-present trio.
		assert_eq!(object.get("globalName"), Some(&serde_json::Value::Null));
		assert_eq!(object.get("avatar"), Some(&serde_json::Value::Null));
		assert_eq!(object.get("email"), Some(&serde_json::Value::Null));
		// The rest disappear from the output entirely.
		assert!(!object.contains_key("discriminator"));
		assert!(!object.contains_key("verified"));
		assert!(!object.contains_key("locale"));
	}

	#[test]
	fn absent_and_null_display_names_normalize_identically() {
		let absent: RawUserProfile =
			serde_json::from_str("{\"id\":\"1\",\"username\":\"a\"}")
				.expect("Profile without global_name should deserialize.");

		assert_eq!(NormalizedUser::from_raw(&absent), NormalizedUser::from_raw(&minimal_raw()));
	}
}
