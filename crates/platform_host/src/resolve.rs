//! Platform resolution: binds one profile to its transport and encoding policy.

use std::{fmt, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    encoding::MessageEncoding,
    error::{CodecError, ConfigError, DeliveryError},
    profile::{ProfileStore, TransportKind},
    transport::{HostMessage, HostTransport, TransportRegistry},
};

/// Immutable platform configuration consumed by the rest of the UI.
///
/// Built once by [`resolve`]; every field is private and exposed through `&self` accessors only.
pub struct ResolvedPlatform {
    platform_id: String,
    encoding: MessageEncoding,
    transport_kind: TransportKind,
    transport: Rc<dyn HostTransport>,
    show_navbar: bool,
    toggle_plan_act_keys: String,
    supports_terminal_mentions: bool,
}

/// Resolves `platform_id` against `store`, binding its transport from `registry`.
///
/// Either a complete [`ResolvedPlatform`] is returned or nothing is.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownPlatform`] when the store has no such profile and
/// [`ConfigError::UnregisteredTransport`] when the profile names a transport the registry lacks.
pub fn resolve(
    platform_id: &str,
    store: &ProfileStore,
    registry: &TransportRegistry,
) -> Result<ResolvedPlatform, ConfigError> {
    let profile = store.lookup(platform_id)?;
    let transport = registry.get(platform_id, &profile.transport)?;

    tracing::info!(
        platform = platform_id,
        encoding = profile.encoding.as_str(),
        transport = transport.name(),
        "build platform resolved"
    );

    Ok(ResolvedPlatform {
        platform_id: platform_id.to_string(),
        encoding: profile.encoding,
        transport_kind: profile.transport.clone(),
        transport,
        show_navbar: profile.show_navbar,
        toggle_plan_act_keys: profile.toggle_plan_act_keys.clone(),
        supports_terminal_mentions: profile.supports_terminal_mentions,
    })
}

impl ResolvedPlatform {
    /// Identifier of the resolved profile.
    pub fn platform_id(&self) -> &str {
        &self.platform_id
    }

    /// Encoding mode bound from the profile.
    pub fn encoding(&self) -> MessageEncoding {
        self.encoding
    }

    /// Bound transport.
    pub fn transport(&self) -> &Rc<dyn HostTransport> {
        &self.transport
    }

    /// Registry key the transport was bound from.
    pub fn transport_kind(&self) -> &TransportKind {
        &self.transport_kind
    }

    /// Best-effort delivery: failures are logged and the message is dropped.
    ///
    /// A missing editor bridge is logged as a warning (the bundle is being previewed outside the
    /// editor); every other failure is an error.
    ///
    /// Callers must not assume the host received the message.
    pub fn post_message(&self, message: &HostMessage) {
        let Err(err) = self.try_post_message(message) else {
            return;
        };
        if matches!(err, DeliveryError::BridgeUnavailable { .. })
            && self.transport_kind == TransportKind::host_bridge()
        {
            tracing::warn!(
                platform = %self.platform_id,
                transport = self.transport.name(),
                error = %err,
                "host message dropped"
            );
        } else {
            tracing::error!(
                platform = %self.platform_id,
                transport = self.transport.name(),
                error = %err,
                "host message dropped"
            );
        }
    }

    /// Delivers `message` and reports the transport outcome to the caller.
    ///
    /// # Errors
    ///
    /// Propagates the [`DeliveryError`] returned by the bound transport.
    pub fn try_post_message(&self, message: &HostMessage) -> Result<(), DeliveryError> {
        self.transport.post_message(message)
    }

    /// Applies the bound outbound policy with a caller-supplied `encoder`.
    pub fn encode<T, F>(&self, message: T, encoder: F) -> T
    where
        F: FnOnce(T) -> T,
    {
        self.encoding.encode(message, encoder)
    }

    /// Applies the bound inbound policy with a caller-supplied `decoder`.
    pub fn decode<T, F>(&self, raw: T, decoder: F) -> T
    where
        F: FnOnce(T) -> T,
    {
        self.encoding.decode(raw, decoder)
    }

    /// Typed outbound conversion; see [`MessageEncoding::encode_message`].
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] when `message` cannot be represented as JSON.
    pub fn encode_message<T>(&self, message: &T) -> Result<HostMessage, CodecError>
    where
        T: Serialize + ?Sized,
    {
        self.encoding.encode_message(message)
    }

    /// Typed inbound conversion; see [`MessageEncoding::decode_message`].
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Decode`] when `raw` does not decode into `T`.
    pub fn decode_message<T>(&self, raw: HostMessage) -> Result<T, CodecError>
    where
        T: DeserializeOwned,
    {
        self.encoding.decode_message(raw)
    }

    /// Whether the UI renders its own navigation bar.
    pub fn show_navbar(&self) -> bool {
        self.show_navbar
    }

    /// Keybinding descriptor for the plan/act toggle.
    pub fn toggle_plan_act_keys(&self) -> &str {
        &self.toggle_plan_act_keys
    }

    /// Whether terminal mentions are offered.
    pub fn supports_terminal_mentions(&self) -> bool {
        self.supports_terminal_mentions
    }
}

impl fmt::Debug for ResolvedPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedPlatform")
            .field("platform_id", &self.platform_id)
            .field("encoding", &self.encoding)
            .field("transport_kind", &self.transport_kind)
            .field("transport", &self.transport.name())
            .field("show_navbar", &self.show_navbar)
            .field("toggle_plan_act_keys", &self.toggle_plan_act_keys)
            .field(
                "supports_terminal_mentions",
                &self.supports_terminal_mentions,
            )
            .finish()
    }
}
