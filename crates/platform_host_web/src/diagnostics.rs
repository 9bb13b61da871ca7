//! Tracing layer that forwards diagnostics to the browser console.
//!
//! ```text
//! tracing::error!("host message dropped")
//!        │
//!        ▼
//!   ConsoleLogLayer::on_event()
//!        │
//!        ▼
//!   console.error / warn / info / debug   (wasm32)
//!   stderr                                 (other targets)
//! ```

use tracing::{
    field::{Field, Visit},
    Level, Subscriber,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Destination for rendered console lines.
pub type ConsoleSink = fn(Level, &str);

/// Tracing layer that renders each event as one console line.
pub struct ConsoleLogLayer {
    max_level: Level,
    sink: ConsoleSink,
}

impl ConsoleLogLayer {
    /// Forwards events at `max_level` or more severe to the platform console.
    pub fn new(max_level: Level) -> Self {
        Self::with_sink(max_level, emit_to_console)
    }

    /// Forwards events to a custom sink instead of the console.
    pub fn with_sink(max_level: Level, sink: ConsoleSink) -> Self {
        Self { max_level, sink }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLogLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let metadata = event.metadata();
        if *metadata.level() > self.max_level {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let line = format!("[{}] {}", metadata.target(), visitor.finish());
        (self.sink)(*metadata.level(), &line);
    }
}

/// Installs [`ConsoleLogLayer`] as the global subscriber.
///
/// Returns `false` if a global subscriber was already installed; the existing one is kept.
pub fn install_console_diagnostics(max_level: Level) -> bool {
    tracing_subscriber::registry()
        .with(ConsoleLogLayer::new(max_level))
        .try_init()
        .is_ok()
}

/// Collects the `message` field plus any extra `key=value` fields of an event.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else {
            format!("{} {}", self.message, self.fields.join(" "))
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }
}

fn emit_to_console(level: Level, line: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let line = wasm_bindgen::JsValue::from_str(line);
        match level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("{level:>5} {line}");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;

    thread_local! {
        static LINES: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn record_line(level: Level, line: &str) {
        LINES.with(|lines| lines.borrow_mut().push((level, line.to_string())));
    }

    fn take_lines() -> Vec<(Level, String)> {
        LINES.with(|lines| std::mem::take(&mut *lines.borrow_mut()))
    }

    #[test]
    fn layer_renders_message_and_fields_and_filters_by_level() {
        let subscriber = tracing_subscriber::registry()
            .with(ConsoleLogLayer::with_sink(Level::INFO, record_line));

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(target: "bridge", transport = "standalone", "host message dropped");
            tracing::info!(target: "resolve", "build platform resolved");
            tracing::debug!(target: "bridge", "filtered out");
        });

        assert_eq!(
            take_lines(),
            vec![
                (
                    Level::ERROR,
                    "[bridge] host message dropped transport=standalone".to_string()
                ),
                (Level::INFO, "[resolve] build platform resolved".to_string()),
            ]
        );
    }
}
