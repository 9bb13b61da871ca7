//! Error taxonomy for platform resolution, host delivery, and message codecs.

use thiserror::Error;

use crate::profile::TransportKind;

/// Fatal configuration failures raised while resolving the active platform.
///
/// None of these are recoverable at runtime: continuing would bind an undefined transport or
/// encoding and corrupt every message exchanged with the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The build did not carry a platform identifier.
    #[error("no build platform configured; rebuild with WEBVIEW_PLATFORM set to a known profile")]
    MissingBuildPlatform,
    /// The platform identifier has no entry in the profile store.
    #[error("unknown platform `{platform_id}` (known: {})", .known.join(", "))]
    UnknownPlatform {
        /// Identifier that was requested.
        platform_id: String,
        /// Identifiers present in the store, sorted.
        known: Vec<String>,
    },
    /// A profile names a transport kind that no registry entry implements.
    #[error("platform `{platform_id}` requires unregistered transport `{transport}`")]
    UnregisteredTransport {
        /// Profile that referenced the transport.
        platform_id: String,
        /// Missing registry key.
        transport: TransportKind,
    },
    /// The profile source could not be parsed.
    #[error("invalid platform profile source: {0}")]
    InvalidProfileSource(String),
}

/// Best-effort delivery failures reported by a [`crate::HostTransport`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// The host did not inject the expected bridge into the runtime.
    #[error("{bridge} bridge is not available")]
    BridgeUnavailable {
        /// Stable bridge name.
        bridge: &'static str,
    },
    /// The message could not be converted into the bridge's wire representation.
    #[error("message serialization failed: {0}")]
    Serialize(String),
    /// The bridge exists but threw while accepting the message.
    #[error("{bridge} bridge rejected the message: {reason}")]
    Rejected {
        /// Stable bridge name.
        bridge: &'static str,
        /// Host-provided failure text.
        reason: String,
    },
}

/// Failures from the typed encode/decode helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The outgoing value could not be encoded.
    #[error("message encode failed: {0}")]
    Encode(String),
    /// The incoming value could not be decoded into the requested type.
    #[error("message decode failed: {0}")]
    Decode(String),
}
