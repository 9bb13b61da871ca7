//! Target-specific bridge glue.
//!
//! Routes calls to the wasm implementation in the browser and to an always-absent shim
//! elsewhere, keeping one API for the bridge module above.

use platform_host::{DeliveryError, HostMessage};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub fn host_bridge_available() -> bool {
    imp::host_bridge_available()
}

pub fn host_bridge_post(message: &HostMessage) -> Result<(), DeliveryError> {
    imp::host_bridge_post(message)
}

pub fn standalone_bridge_available() -> bool {
    imp::standalone_bridge_available()
}

pub fn standalone_bridge_post(json: &str) -> Result<(), DeliveryError> {
    imp::standalone_bridge_post(json)
}
