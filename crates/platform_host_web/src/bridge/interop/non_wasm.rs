use super::*;
use crate::bridge::{HOST_BRIDGE_NAME, STANDALONE_BRIDGE_NAME};

pub fn host_bridge_available() -> bool {
    false
}

pub fn host_bridge_post(_message: &HostMessage) -> Result<(), DeliveryError> {
    Err(DeliveryError::BridgeUnavailable {
        bridge: HOST_BRIDGE_NAME,
    })
}

pub fn standalone_bridge_available() -> bool {
    false
}

pub fn standalone_bridge_post(_json: &str) -> Result<(), DeliveryError> {
    Err(DeliveryError::BridgeUnavailable {
        bridge: STANDALONE_BRIDGE_NAME,
    })
}
