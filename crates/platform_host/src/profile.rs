//! Declarative platform profiles and the static store they are loaded from.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{encoding::MessageEncoding, error::ConfigError};

/// Registry key of the editor-embedded webview transport.
pub const HOST_BRIDGE_TRANSPORT: &str = "host-bridge";
/// Registry key of the standalone browser-shell transport.
pub const STANDALONE_BRIDGE_TRANSPORT: &str = "standalone-bridge";

const BUILTIN_PROFILES_JSON: &str = include_str!("../profiles/platform-configs.json");

/// Returns the platform identifier baked into this build, if any.
///
/// The value comes from the `WEBVIEW_PLATFORM` environment variable at compile time. The build
/// script rejects values that have no profile and always overrides `WEBVIEW_BUILD_PLATFORM`, so a
/// `Some` here always names a builtin entry.
pub const fn build_platform_id() -> Option<&'static str> {
    non_empty_platform_id(option_env!("WEBVIEW_BUILD_PLATFORM"))
}

/// An unset `WEBVIEW_PLATFORM` is baked in as the empty string.
const fn non_empty_platform_id(raw: Option<&'static str>) -> Option<&'static str> {
    match raw {
        Some(platform_id) if !platform_id.is_empty() => Some(platform_id),
        _ => None,
    }
}

/// Registry key naming how messages reach the host.
///
/// Kept open (a string key rather than a closed enum) so a new host integration only needs a
/// profile entry plus a registered [`crate::HostTransport`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransportKind(String);

impl TransportKind {
    /// Creates a transport key from any string token.
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    /// Editor-embedded webview bridge.
    pub fn host_bridge() -> Self {
        Self::new(HOST_BRIDGE_TRANSPORT)
    }

    /// Standalone browser-shell bridge.
    pub fn standalone_bridge() -> Self {
        Self::new(STANDALONE_BRIDGE_TRANSPORT)
    }

    /// Returns the raw registry key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransportKind {
    fn from(kind: &str) -> Self {
        Self::new(kind)
    }
}

/// Messaging behavior and feature flags for one host environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlatformProfile {
    /// Whether payloads are transformed before crossing the host boundary.
    #[serde(rename = "messageEncoding")]
    pub encoding: MessageEncoding,
    /// Whether the UI renders its own navigation bar.
    pub show_navbar: bool,
    /// Transport registry key.
    #[serde(rename = "postMessageHandler")]
    pub transport: TransportKind,
    /// Keybinding descriptor for the plan/act toggle.
    pub toggle_plan_act_keys: String,
    /// Whether terminal mentions are offered in the chat input.
    pub supports_terminal_mentions: bool,
}

/// Immutable mapping from platform identifier to [`PlatformProfile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileStore {
    profiles: BTreeMap<String, PlatformProfile>,
}

impl ProfileStore {
    /// Parses the profile table bundled with this crate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProfileSource`] if the bundled table is malformed. The build
    /// script validates the same file, so this only fails if the two drift apart.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_PROFILES_JSON)
    }

    /// Parses a profile table keyed by platform identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProfileSource`] for malformed JSON, unknown encodings, or
    /// unexpected fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let profiles = serde_json::from_str::<BTreeMap<String, PlatformProfile>>(raw)
            .map_err(|err| ConfigError::InvalidProfileSource(err.to_string()))?;
        Ok(Self { profiles })
    }

    /// Builds a store from `(platform_id, profile)` pairs. Later duplicates replace earlier ones.
    pub fn from_profiles<I, K>(profiles: I) -> Self
    where
        I: IntoIterator<Item = (K, PlatformProfile)>,
        K: Into<String>,
    {
        Self {
            profiles: profiles
                .into_iter()
                .map(|(id, profile)| (id.into(), profile))
                .collect(),
        }
    }

    /// Looks up the profile for `platform_id` (exact, case-sensitive match).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownPlatform`] listing the known identifiers.
    pub fn lookup(&self, platform_id: &str) -> Result<&PlatformProfile, ConfigError> {
        self.profiles
            .get(platform_id)
            .ok_or_else(|| ConfigError::UnknownPlatform {
                platform_id: platform_id.to_string(),
                known: self.platform_ids().map(str::to_string).collect(),
            })
    }

    /// Iterates `(platform_id, profile)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlatformProfile)> {
        self.profiles.iter().map(|(id, profile)| (id.as_str(), profile))
    }

    /// Iterates known platform identifiers in sorted order.
    pub fn platform_ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Number of profiles in the store.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Returns whether the store has no profiles.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_store_carries_vscode_and_standalone_profiles() {
        let store = ProfileStore::builtin().expect("builtin profiles parse");

        assert_eq!(
            store.platform_ids().collect::<Vec<_>>(),
            vec!["standalone", "vscode"]
        );
        assert_eq!(
            store.lookup("vscode").expect("vscode"),
            &PlatformProfile {
                encoding: MessageEncoding::None,
                show_navbar: false,
                transport: TransportKind::host_bridge(),
                toggle_plan_act_keys: "Meta+Shift+a".to_string(),
                supports_terminal_mentions: true,
            }
        );
        let standalone = store.lookup("standalone").expect("standalone");
        assert_eq!(standalone.encoding, MessageEncoding::Json);
        assert_eq!(standalone.transport, TransportKind::standalone_bridge());
        assert!(standalone.show_navbar);
        assert!(!standalone.supports_terminal_mentions);
    }

    #[test]
    fn lookup_is_case_sensitive_and_lists_known_ids() {
        let store = ProfileStore::builtin().expect("builtin profiles parse");

        assert_eq!(
            store.lookup("VSCode").expect_err("case mismatch"),
            ConfigError::UnknownPlatform {
                platform_id: "VSCode".to_string(),
                known: vec!["standalone".to_string(), "vscode".to_string()],
            }
        );
    }

    #[test]
    fn new_platforms_are_pure_data_additions() {
        let store = ProfileStore::from_json(
            r#"{
                "jetbrains": {
                    "messageEncoding": "json",
                    "showNavbar": true,
                    "postMessageHandler": "jcef-bridge",
                    "togglePlanActKeys": "Ctrl+Shift+a",
                    "supportsTerminalMentions": false
                }
            }"#,
        )
        .expect("parse");

        let profile = store.lookup("jetbrains").expect("jetbrains");
        assert_eq!(profile.transport.as_str(), "jcef-bridge");
        assert_eq!(profile.toggle_plan_act_keys, "Ctrl+Shift+a");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unknown_encoding_and_stray_fields_are_rejected() {
        let bad_encoding = r#"{"x": {"messageEncoding": "protobuf", "showNavbar": true,
            "postMessageHandler": "host-bridge", "togglePlanActKeys": "",
            "supportsTerminalMentions": false}}"#;
        let stray_field = r#"{"x": {"messageEncoding": "none", "showNavbar": true,
            "postMessageHandler": "host-bridge", "togglePlanActKeys": "",
            "supportsTerminalMentions": false, "showNavBar": false}}"#;

        assert!(matches!(
            ProfileStore::from_json(bad_encoding),
            Err(ConfigError::InvalidProfileSource(_))
        ));
        assert!(matches!(
            ProfileStore::from_json(stray_field),
            Err(ConfigError::InvalidProfileSource(_))
        ));
    }

    #[test]
    fn build_platform_id_names_a_builtin_profile_when_set() {
        let store = ProfileStore::builtin().expect("builtin profiles parse");
        if let Some(platform_id) = build_platform_id() {
            store.lookup(platform_id).expect("build platform is known");
        }
    }

    #[test]
    fn empty_build_identifier_means_unset() {
        assert_eq!(non_empty_platform_id(None), None);
        assert_eq!(non_empty_platform_id(Some("")), None);
        assert_eq!(non_empty_platform_id(Some("vscode")), Some("vscode"));
        assert_ne!(build_platform_id(), Some(""));
    }
}
