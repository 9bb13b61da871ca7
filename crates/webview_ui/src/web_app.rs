use leptos::*;
use platform_context::{
    use_platform, use_show_navbar, use_supports_terminal_mentions, use_toggle_plan_act_keys,
    PlatformContext, PlatformProvider,
};
use platform_host::{CodecError, HostMessage};
use serde::Serialize;
use serde_json::json;

/// Top-level views the host can be asked to reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HostView {
    /// Conversation view.
    Chat,
    /// Task history.
    History,
    /// Extension settings.
    Settings,
    /// Account page.
    Account,
}

impl HostView {
    const ALL: [Self; 4] = [Self::Chat, Self::History, Self::Settings, Self::Account];

    fn label(self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::History => "History",
            Self::Settings => "Settings",
            Self::Account => "Account",
        }
    }
}

/// Navigation request posted when a navbar entry is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationRequest {
    #[serde(rename = "type")]
    kind: &'static str,
    view: HostView,
}

impl NavigationRequest {
    /// Request to reveal `view`.
    pub fn show(view: HostView) -> Self {
        Self {
            kind: "showView",
            view,
        }
    }

    /// Builds the structured envelope handed to the transport.
    ///
    /// The envelope itself is never run through the platform encoding; transports that need
    /// text serialize the whole envelope exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Encode`] if serialization fails.
    pub fn to_message(&self) -> Result<HostMessage, CodecError> {
        serde_json::to_value(self).map_err(|err| CodecError::Encode(err.to_string()))
    }
}

#[component]
/// Wraps the application in the platform context provider.
pub fn Providers(
    /// Platform handle resolved before mounting.
    platform: PlatformContext,
    children: Children,
) -> impl IntoView {
    view! { <PlatformProvider platform=platform>{children()}</PlatformProvider> }
}

#[component]
/// Navigation bar shown on hosts that do not provide their own chrome.
pub fn Navbar() -> impl IntoView {
    let platform = use_platform();

    view! {
        <nav class="webview-navbar">
            {HostView::ALL
                .into_iter()
                .map(|target| {
                    let platform = platform.clone();
                    let on_click = move |_| match NavigationRequest::show(target).to_message() {
                        Ok(message) => platform.post_message(&message),
                        Err(err) => tracing::warn!(error = %err, "navigation request not sent"),
                    };
                    view! {
                        <button class="webview-navbar-item" on:click=on_click>
                            {target.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
/// Root view; announces readiness to the host once on first render.
pub fn WebviewApp() -> impl IntoView {
    let platform = use_platform();
    let show_navbar = use_show_navbar();
    let supports_terminal_mentions = use_supports_terminal_mentions();
    let toggle_keys = use_toggle_plan_act_keys();

    platform.post_message(&json!({"type": "webviewDidLaunch"}));

    view! {
        <Show when=move || show_navbar>
            <Navbar />
        </Show>
        <main class="webview-root">
            <p class="plan-act-hint">{format!("Toggle Plan/Act: {toggle_keys}")}</p>
            <Show when=move || supports_terminal_mentions>
                <p class="mention-hint">"Type @terminal to reference terminal output."</p>
            </Show>
        </main>
    }
}
