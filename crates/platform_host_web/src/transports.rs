//! Concrete [`HostTransport`] implementations for the supported webview hosts.

use platform_host::{DeliveryError, HostMessage, HostTransport};

use crate::bridge;

/// Maximum number of characters of an outgoing standalone payload echoed to diagnostics.
pub const STANDALONE_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, Default)]
/// Editor-embedded webview transport backed by the VS Code webview API.
///
/// Messages are forwarded as structured values; the host performs its own cloning.
pub struct HostBridgeTransport;

impl HostTransport for HostBridgeTransport {
    fn name(&self) -> &'static str {
        bridge::HOST_BRIDGE_NAME
    }

    fn post_message(&self, message: &HostMessage) -> Result<(), DeliveryError> {
        if !bridge::host_bridge_available() {
            return Err(DeliveryError::BridgeUnavailable {
                bridge: bridge::HOST_BRIDGE_NAME,
            });
        }
        bridge::host_bridge_post(message)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Standalone shell transport backed by `window.standalonePostMessage`.
///
/// The host only accepts text, so every message is serialized to JSON before delivery.
pub struct StandaloneBridgeTransport;

impl HostTransport for StandaloneBridgeTransport {
    fn name(&self) -> &'static str {
        bridge::STANDALONE_BRIDGE_NAME
    }

    fn post_message(&self, message: &HostMessage) -> Result<(), DeliveryError> {
        if !bridge::standalone_bridge_available() {
            return Err(DeliveryError::BridgeUnavailable {
                bridge: bridge::STANDALONE_BRIDGE_NAME,
            });
        }
        let json =
            serde_json::to_string(message).map_err(|err| DeliveryError::Serialize(err.to_string()))?;
        tracing::debug!(
            preview = truncate_chars(&json, STANDALONE_PREVIEW_CHARS),
            "standalone postMessage"
        );
        bridge::standalone_bridge_post(&json)
    }
}

/// Returns at most `max_chars` leading characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
