// Logging setup
//
// Renders every tracing event as a single `asctime - LEVEL - message` line on
// stderr, so framework output on stdout stays separate from our own log.

use std::fmt::{self, Write as _};
use tracing::{field::Visit, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

/// Environment variable that turns on debug logging
pub const DEBUG_ENV: &str = "YOLOKIT_DEBUG";

/// Tracing layer printing timestamped log lines to stderr
pub struct LineFormatLayer {
    show_debug: bool,
}

impl LineFormatLayer {
    pub fn new() -> Self {
        Self { show_debug: false }
    }

    pub fn with_debug() -> Self {
        Self { show_debug: true }
    }

    fn should_show(&self, level: &Level) -> bool {
        match *level {
            Level::ERROR | Level::WARN | Level::INFO => true,
            Level::DEBUG | Level::TRACE => self.show_debug,
        }
    }
}

impl Default for LineFormatLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for LineFormatLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let level = event.metadata().level();
        if !self.should_show(level) {
            return;
        }

        let mut visitor = MessageVisitor::new();
        event.record(&mut visitor);

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f");
        eprintln!(
            "{}",
            format_line(&timestamp.to_string(), level, &visitor.into_message())
        );
    }
}

/// Level names as they appear in the log
pub fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        Level::TRACE => "TRACE",
    }
}

/// Build one log line
pub fn format_line(timestamp: &str, level: &Level, message: &str) -> String {
    format!("{} - {} - {}", timestamp, level_name(level), message)
}

/// Collects the message and any structured fields of an event
pub(crate) struct MessageVisitor {
    message: Option<String>,
    fields: Vec<(&'static str, String)>,
}

impl MessageVisitor {
    pub(crate) fn new() -> Self {
        Self {
            message: None,
            fields: Vec::new(),
        }
    }

    pub(crate) fn into_message(self) -> String {
        let mut out = self.message.unwrap_or_default();
        for (name, value) in self.fields {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "{}={}", name, value);
        }
        out
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            self.fields.push((field.name(), format!("{:?}", value)));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }
}

/// Whether `YOLOKIT_DEBUG` asks for debug output
pub fn debug_requested() -> bool {
    std::env::var(DEBUG_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Install the global subscriber
///
/// Default level is INFO (DEBUG when `debug` is set); `RUST_LOG` overrides both.
pub fn init_logging(debug: bool) {
    let show_debug = debug || debug_requested();
    let default_level = if show_debug { "debug" } else { "info" };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let layer = if show_debug {
        LineFormatLayer::with_debug()
    } else {
        LineFormatLayer::new()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .init();
}
