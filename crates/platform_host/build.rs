use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

const PLATFORM_ENV: &str = "WEBVIEW_PLATFORM";
const BUILD_PLATFORM_ENV: &str = "WEBVIEW_BUILD_PLATFORM";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[allow(dead_code)]
struct ProfileEntry {
    message_encoding: String,
    show_navbar: bool,
    post_message_handler: String,
    toggle_plan_act_keys: String,
    supports_terminal_mentions: bool,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("profiles").join("platform-configs.json");
    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rerun-if-env-changed={PLATFORM_ENV}");
    println!("cargo:rerun-if-env-changed={BUILD_PLATFORM_ENV}");

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let profiles: BTreeMap<String, ProfileEntry> = serde_json::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    for (platform_id, profile) in &profiles {
        if !matches!(profile.message_encoding.as_str(), "none" | "json") {
            panic!(
                "profile `{platform_id}` in {}: messageEncoding must be `none` or `json`, found `{}`",
                path.display(),
                profile.message_encoding
            );
        }
        if profile.post_message_handler.trim().is_empty() {
            panic!(
                "profile `{platform_id}` in {}: postMessageHandler must not be empty",
                path.display()
            );
        }
    }

    // Emitted unconditionally; overrides any inherited WEBVIEW_BUILD_PLATFORM.
    let platform_id = std::env::var(PLATFORM_ENV).unwrap_or_default();
    if !platform_id.is_empty() && !profiles.contains_key(&platform_id) {
        let known = profiles.keys().cloned().collect::<Vec<_>>().join(", ");
        panic!("{PLATFORM_ENV}=`{platform_id}` is not a known platform profile (known: {known})");
    }
    println!("cargo:rustc-env={BUILD_PLATFORM_ENV}={platform_id}");
}
