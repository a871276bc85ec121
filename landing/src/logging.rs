//! Browser logging: a `tracing` layer that writes to the devtools console.
//!
//! Events route to `console.error` / `warn` / `info` / `debug` by level and
//! carry a `%c` style so they stand out from framework noise.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use wasm_bindgen::JsValue;

/// Install the console layer as the global subscriber.
///
/// A second call is a no-op; the first subscriber stays installed.
pub fn init(max_level: Level) {
    let installed = tracing_subscriber::registry()
        .with(ConsoleLayer.with_filter(LevelFilter::from_level(max_level)))
        .try_init();

    if installed.is_err() {
        web_sys::console::warn_1(&JsValue::from_str("tracing subscriber already installed"));
    }
}

/// Forwards each event to the browser console.
pub struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let line = format_event_line(meta.level(), meta.target(), &fields.finish());
        emit(*meta.level(), &line);
    }
}

fn emit(level: Level, line: &str) {
    let text = JsValue::from_str(&format!("%c{line}"));
    let style = JsValue::from_str(level_style(level));

    match level {
        Level::ERROR => web_sys::console::error_2(&text, &style),
        Level::WARN => web_sys::console::warn_2(&text, &style),
        Level::INFO => web_sys::console::info_2(&text, &style),
        _ => web_sys::console::debug_2(&text, &style),
    }
}

/// CSS applied through the `%c` directive.
pub fn level_style(level: Level) -> &'static str {
    match level {
        Level::ERROR => "color: #ff5555; font-weight: bold;",
        Level::WARN => "color: #ffcc00;",
        Level::INFO => "color: #00ff88;",
        _ => "color: #888888;",
    }
}

/// `LEVEL target: message`
pub fn format_event_line(level: &Level, target: &str, message: &str) -> String {
    format!("{:>5} {target}: {message}", level.as_str())
}

/// Collects the `message` field first, then other fields as `key=value`.
#[derive(Default)]
struct FieldCollector {
    message: String,
    extra: String,
}

impl FieldCollector {
    fn finish(self) -> String {
        if self.extra.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.extra.trim_start().to_string()
        } else {
            format!("{}{}", self.message, self.extra)
        }
    }
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.extra, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.extra, " {}={value:?}", field.name());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_line_pads_level() {
        assert_eq!(
            format_event_line(&Level::INFO, "saas_landing::app", "mounted"),
            " INFO saas_landing::app: mounted"
        );
        assert_eq!(
            format_event_line(&Level::ERROR, "saas_platform::load", "boom"),
            "ERROR saas_platform::load: boom"
        );
    }

    #[test]
    fn errors_are_bold() {
        assert!(level_style(Level::ERROR).contains("bold"));
        assert!(!level_style(Level::DEBUG).contains("bold"));
        assert_eq!(level_style(Level::TRACE), level_style(Level::DEBUG));
    }

    #[test]
    fn collector_orders_message_before_fields() {
        let collector = FieldCollector {
            message: "loaded".into(),
            extra: " count=3".into(),
        };
        assert_eq!(collector.finish(), "loaded count=3");

        let fields_only = FieldCollector {
            message: String::new(),
            extra: " count=3".into(),
        };
        assert_eq!(fields_only.finish(), "count=3");
    }
}
