//! Host transport contracts, shared adapters, and the transport registry.

use std::{cell::RefCell, collections::BTreeMap, fmt, rc::Rc};

use crate::{
    error::{ConfigError, DeliveryError},
    profile::{ProfileStore, TransportKind},
};

/// Opaque message value crossing the host boundary.
pub type HostMessage = serde_json::Value;

/// Fire-and-forget delivery of one message to the host process.
///
/// Implementations must never block. A missing bridge is reported as
/// [`DeliveryError::BridgeUnavailable`] rather than by panicking.
pub trait HostTransport {
    /// Stable name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Hands `message` to the host. Success means the bridge accepted it, not that the host
    /// processed it.
    fn post_message(&self, message: &HostMessage) -> Result<(), DeliveryError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Transport that accepts and drops every message.
pub struct NoopTransport;

impl HostTransport for NoopTransport {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn post_message(&self, _message: &HostMessage) -> Result<(), DeliveryError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory transport that records delivered messages in order.
pub struct MemoryTransport {
    delivered: Rc<RefCell<Vec<HostMessage>>>,
}

impl MemoryTransport {
    /// Returns a snapshot of every message delivered so far.
    pub fn delivered(&self) -> Vec<HostMessage> {
        self.delivered.borrow().clone()
    }

    /// Removes and returns the recorded messages.
    pub fn take_delivered(&self) -> Vec<HostMessage> {
        std::mem::take(&mut *self.delivered.borrow_mut())
    }
}

impl HostTransport for MemoryTransport {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn post_message(&self, message: &HostMessage) -> Result<(), DeliveryError> {
        self.delivered.borrow_mut().push(message.clone());
        Ok(())
    }
}

/// Transport implementations keyed by [`TransportKind`].
#[derive(Clone, Default)]
pub struct TransportRegistry {
    transports: BTreeMap<TransportKind, Rc<dyn HostTransport>>,
}

impl TransportRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `transport` under `kind`, replacing any previous entry.
    pub fn register(
        mut self,
        kind: impl Into<TransportKind>,
        transport: impl HostTransport + 'static,
    ) -> Self {
        self.transports.insert(kind.into(), Rc::new(transport));
        self
    }

    /// Registers an already shared transport under `kind`.
    pub fn register_shared(
        mut self,
        kind: impl Into<TransportKind>,
        transport: Rc<dyn HostTransport>,
    ) -> Self {
        self.transports.insert(kind.into(), transport);
        self
    }

    /// Returns the transport registered for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnregisteredTransport`] attributed to `platform_id`.
    pub fn get(
        &self,
        platform_id: &str,
        kind: &TransportKind,
    ) -> Result<Rc<dyn HostTransport>, ConfigError> {
        self.transports
            .get(kind)
            .cloned()
            .ok_or_else(|| ConfigError::UnregisteredTransport {
                platform_id: platform_id.to_string(),
                transport: kind.clone(),
            })
    }

    /// Iterates registered kinds in key order.
    pub fn kinds(&self) -> impl Iterator<Item = &TransportKind> {
        self.transports.keys()
    }

    /// Checks that every profile in `store` names a registered transport.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::UnregisteredTransport`] in platform identifier order.
    pub fn verify(&self, store: &ProfileStore) -> Result<(), ConfigError> {
        for (platform_id, profile) in store.iter() {
            self.get(platform_id, &profile.transport)?;
        }
        Ok(())
    }
}

impl fmt::Debug for TransportRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.transports
                    .iter()
                    .map(|(kind, transport)| (kind.as_str(), transport.name())),
            )
            .finish()
    }
}
