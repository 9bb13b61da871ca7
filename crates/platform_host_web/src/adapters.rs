use platform_host::{
    build_platform_id, resolve, ConfigError, ProfileStore, ResolvedPlatform, TransportKind,
    TransportRegistry,
};

use crate::{HostBridgeTransport, StandaloneBridgeTransport};

/// Returns the build-time platform identifier as a diagnostic token.
pub fn build_platform_name() -> &'static str {
    build_platform_id().unwrap_or("unset")
}

/// Builds the registry of browser bridge transports shipped with this crate.
pub fn default_transport_registry() -> TransportRegistry {
    TransportRegistry::new()
        .register(TransportKind::host_bridge(), HostBridgeTransport)
        .register(TransportKind::standalone_bridge(), StandaloneBridgeTransport)
}

/// Resolves `platform_id` against the builtin profiles and default bridges.
///
/// The whole registry is verified against every builtin profile first, so a profile that drifts
/// out of sync with the shipped transports fails startup even when it is not the active one.
///
/// # Errors
///
/// Returns a [`ConfigError`] for malformed profiles, unknown identifiers, or unregistered
/// transports.
pub fn resolve_platform(platform_id: &str) -> Result<ResolvedPlatform, ConfigError> {
    let store = ProfileStore::builtin()?;
    let registry = default_transport_registry();
    registry.verify(&store)?;
    resolve(platform_id, &store, &registry)
}

/// Resolves the platform selected by `WEBVIEW_PLATFORM` at build time.
///
/// This is the only resolution path used by the application entry point; there is no runtime
/// override.
///
/// # Errors
///
/// Returns [`ConfigError::MissingBuildPlatform`] when the build carried no identifier, otherwise
/// the errors of [`resolve_platform`].
pub fn resolve_build_platform() -> Result<ResolvedPlatform, ConfigError> {
    let platform_id = build_platform_id().ok_or(ConfigError::MissingBuildPlatform)?;
    resolve_platform(platform_id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_registry_covers_every_builtin_profile() {
        let store = ProfileStore::builtin().expect("builtin profiles parse");
        let registry = default_transport_registry();

        registry.verify(&store).expect("verified");
        assert_eq!(
            registry.kinds().map(TransportKind::as_str).collect::<Vec<_>>(),
            vec!["host-bridge", "standalone-bridge"]
        );
    }

    #[test]
    fn builtin_platforms_bind_their_bridges() {
        let vscode = resolve_platform("vscode").expect("vscode");
        let standalone = resolve_platform("standalone").expect("standalone");

        assert_eq!(vscode.transport().name(), "vscode");
        assert_eq!(standalone.transport().name(), "standalone");
    }

    #[test]
    fn build_platform_resolution_tracks_the_build_identifier() {
        match build_platform_id() {
            Some(platform_id) => {
                let resolved = resolve_build_platform().expect("build platform resolves");
                assert_eq!(resolved.platform_id(), platform_id);
                assert_eq!(build_platform_name(), platform_id);
            }
            None => {
                assert_eq!(
                    resolve_build_platform().expect_err("no build platform"),
                    ConfigError::MissingBuildPlatform
                );
                assert_eq!(build_platform_name(), "unset");
            }
        }
    }
}
