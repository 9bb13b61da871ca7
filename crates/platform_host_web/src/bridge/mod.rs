//! Host bridge bindings used by the transport adapters.
//!
//! Each host injects its own delivery endpoint into the webview runtime. This module exposes a
//! uniform, target-independent surface over them; the JS glue lives in `interop`.

mod interop;

use platform_host::{DeliveryError, HostMessage};

/// Stable diagnostic name of the editor-embedded webview bridge.
pub const HOST_BRIDGE_NAME: &str = "vscode";
/// Stable diagnostic name of the standalone shell bridge.
pub const STANDALONE_BRIDGE_NAME: &str = "standalone";

/// Returns whether the editor webview API can be acquired in this runtime.
pub fn host_bridge_available() -> bool {
    interop::host_bridge_available()
}

/// Posts a structured message through the editor webview API.
pub fn host_bridge_post(message: &HostMessage) -> Result<(), DeliveryError> {
    interop::host_bridge_post(message)
}

/// Returns whether the standalone shell injected `window.standalonePostMessage`.
pub fn standalone_bridge_available() -> bool {
    interop::standalone_bridge_available()
}

/// Posts serialized JSON text through `window.standalonePostMessage`.
pub fn standalone_bridge_post(json: &str) -> Result<(), DeliveryError> {
    interop::standalone_bridge_post(json)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn bridges_are_absent_off_wasm() {
        assert!(!host_bridge_available());
        assert!(!standalone_bridge_available());
        assert_eq!(
            host_bridge_post(&json!({"type": "ready"})),
            Err(DeliveryError::BridgeUnavailable {
                bridge: HOST_BRIDGE_NAME
            })
        );
        assert_eq!(
            standalone_bridge_post(r#"{"type":"ready"}"#),
            Err(DeliveryError::BridgeUnavailable {
                bridge: STANDALONE_BRIDGE_NAME
            })
        );
    }
}
