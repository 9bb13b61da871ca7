//! Leptos context wiring for the resolved webview platform.
//!
//! The entry layer resolves the build platform once and hands the resulting
//! [`PlatformContext`] to [`PlatformProvider`]. Components read it with [`use_platform`] or one
//! of the narrow projection hooks; non-UI code receives the same handle explicitly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{fmt, ops::Deref, rc::Rc};

use leptos::*;
use platform_host::{MessageEncoding, ResolvedPlatform};

/// Shared read-only handle to the process-wide [`ResolvedPlatform`].
///
/// Clones share one allocation; there is no way to mutate or replace the configuration through
/// the handle.
#[derive(Clone)]
pub struct PlatformContext {
    config: Rc<ResolvedPlatform>,
}

impl PlatformContext {
    /// Publishes `config` behind a shared handle.
    pub fn new(config: ResolvedPlatform) -> Self {
        Self {
            config: Rc::new(config),
        }
    }

    /// Returns the resolved configuration.
    pub fn config(&self) -> &ResolvedPlatform {
        &self.config
    }

    /// Returns whether both handles point at the same configuration.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config)
    }
}

impl Deref for PlatformContext {
    type Target = ResolvedPlatform;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}

impl fmt::Debug for PlatformContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PlatformContext").field(&*self.config).finish()
    }
}

#[component]
/// Provides [`PlatformContext`] to descendant components.
pub fn PlatformProvider(
    /// Platform handle resolved by the entry layer before mounting.
    platform: PlatformContext,
    children: Children,
) -> impl IntoView {
    provide_context(platform);
    children().into_view()
}

/// Returns the current [`PlatformContext`].
///
/// # Panics
///
/// Panics if called outside [`PlatformProvider`].
pub fn use_platform() -> PlatformContext {
    use_context::<PlatformContext>().expect("PlatformContext not provided")
}

/// Returns whether the UI renders its own navigation bar.
pub fn use_show_navbar() -> bool {
    use_platform().show_navbar()
}

/// Returns the plan/act toggle keybinding descriptor.
pub fn use_toggle_plan_act_keys() -> String {
    use_platform().toggle_plan_act_keys().to_string()
}

/// Returns whether terminal mentions are offered.
pub fn use_supports_terminal_mentions() -> bool {
    use_platform().supports_terminal_mentions()
}

/// Returns the message encoding bound for this build.
pub fn use_message_encoding() -> MessageEncoding {
    use_platform().encoding()
}

#[cfg(test)]
mod tests {
    use platform_host::{
        resolve, MemoryTransport, NoopTransport, ProfileStore, TransportKind, TransportRegistry,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn context_for(platform_id: &str, bridge: MemoryTransport) -> PlatformContext {
        let store = ProfileStore::builtin().expect("builtin profiles parse");
        let registry = TransportRegistry::new()
            .register(TransportKind::host_bridge(), bridge)
            .register(TransportKind::standalone_bridge(), NoopTransport);
        PlatformContext::new(resolve(platform_id, &store, &registry).expect("resolve"))
    }

    #[test]
    fn clones_share_one_configuration() {
        let platform = context_for("vscode", MemoryTransport::default());
        let clone = platform.clone();
        let other = context_for("vscode", MemoryTransport::default());

        assert!(platform.ptr_eq(&clone));
        assert!(std::ptr::eq(platform.config(), clone.config()));
        assert!(!platform.ptr_eq(&other));
    }

    #[test]
    fn handle_exposes_projections_and_transport() {
        let bridge = MemoryTransport::default();
        let platform = context_for("vscode", bridge.clone());

        platform.post_message(&json!({"type": "ready"}));

        assert_eq!(bridge.delivered(), vec![json!({"type": "ready"})]);
        assert_eq!(platform.platform_id(), "vscode");
        assert_eq!(platform.encoding(), MessageEncoding::None);
        assert_eq!(platform.toggle_plan_act_keys(), "Meta+Shift+a");
        assert!(!platform.show_navbar());
        assert!(platform.supports_terminal_mentions());
        assert!(format!("{platform:?}").contains("platform_id: \"vscode\""));
    }
}
