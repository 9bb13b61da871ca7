use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use super::*;
use crate::bridge::{HOST_BRIDGE_NAME, STANDALONE_BRIDGE_NAME};

// `acquireVsCodeApi` may only be called once per webview, so the handle is cached here.
// `standalonePostMessage` is injected by the standalone host; the name is part of its contract.
#[wasm_bindgen(inline_js = r#"
let hostApi = null;
let hostApiAcquired = false;

function acquireHostApi() {
  if (!hostApiAcquired) {
    hostApiAcquired = true;
    hostApi = typeof acquireVsCodeApi === 'function' ? acquireVsCodeApi() : null;
  }
  return hostApi;
}

export function hostBridgeAvailable() {
  return acquireHostApi() != null;
}

export function hostBridgePost(message) {
  const api = acquireHostApi();
  if (api == null) {
    throw new Error('VS Code webview API unavailable');
  }
  api.postMessage(message);
}

export function standaloneBridgeAvailable() {
  return typeof window !== 'undefined' && typeof window.standalonePostMessage === 'function';
}

export function standaloneBridgePost(json) {
  window.standalonePostMessage(json);
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = hostBridgeAvailable)]
    fn host_bridge_available_js() -> bool;

    #[wasm_bindgen(catch, js_name = hostBridgePost)]
    fn host_bridge_post_js(message: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = standaloneBridgeAvailable)]
    fn standalone_bridge_available_js() -> bool;

    #[wasm_bindgen(catch, js_name = standaloneBridgePost)]
    fn standalone_bridge_post_js(json: &str) -> Result<(), JsValue>;
}

fn js_error_text(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|error| String::from(error.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

pub fn host_bridge_available() -> bool {
    host_bridge_available_js()
}

pub fn host_bridge_post(message: &HostMessage) -> Result<(), DeliveryError> {
    let value = message
        .serialize(&Serializer::json_compatible())
        .map_err(|err| DeliveryError::Serialize(err.to_string()))?;
    host_bridge_post_js(&value).map_err(|err| DeliveryError::Rejected {
        bridge: HOST_BRIDGE_NAME,
        reason: js_error_text(&err),
    })
}

pub fn standalone_bridge_available() -> bool {
    standalone_bridge_available_js()
}

pub fn standalone_bridge_post(json: &str) -> Result<(), DeliveryError> {
    standalone_bridge_post_js(json).map_err(|err| DeliveryError::Rejected {
        bridge: STANDALONE_BRIDGE_NAME,
        reason: js_error_text(&err),
    })
}
