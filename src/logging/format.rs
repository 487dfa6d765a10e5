//! Log output formats
//!
//! Two formats, selected by the resolved settings: a colorized console
//! format for interactive use and a machine-readable JSON format for
//! log pipelines. Both run every field name through the masking rules,
//! so a sensitive value never reaches the sink in clear text.

use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::field::RecordFields;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use super::mask::{self, REDACTION_MARKER};
use crate::config::Environment;

// =============================================================================
// Console Fields
// =============================================================================

/// Field formatter for console output that masks sensitive field names
pub struct MaskFields;

impl<'writer> FormatFields<'writer> for MaskFields {
    fn format_fields<R: RecordFields>(&self, writer: Writer<'writer>, fields: R) -> fmt::Result {
        let mut visitor = MaskVisitor {
            writer,
            result: Ok(()),
            seen: false,
        };
        fields.record(&mut visitor);
        visitor.result
    }
}

struct MaskVisitor<'writer> {
    writer: Writer<'writer>,
    result: fmt::Result,
    seen: bool,
}

impl Visit for MaskVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if self.result.is_err() {
            return;
        }
        let pad = if self.seen { " " } else { "" };
        self.seen = true;
        self.result = if field.name() == "message" {
            write!(self.writer, "{pad}{value:?}")
        } else if mask::is_sensitive(field.name()) {
            write!(self.writer, "{pad}{}={REDACTION_MARKER}", field.name())
        } else {
            write!(self.writer, "{pad}{}={value:?}", field.name())
        };
    }
}

// =============================================================================
// JSON Events
// =============================================================================

/// Event formatter that emits one JSON object per line
pub struct JsonFormat {
    environment: Environment,
}

impl JsonFormat {
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }
}

impl<S, N> FormatEvent<S, N> for JsonFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        let mut record = serde_json::Map::new();
        record.insert(
            "timestamp".to_string(),
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        record.insert(
            "level".to_string(),
            Value::String(metadata.level().to_string()),
        );
        record.insert(
            "target".to_string(),
            Value::String(metadata.target().to_string()),
        );
        record.insert(
            "environment".to_string(),
            Value::String(self.environment.to_string()),
        );
        record.insert(
            "message".to_string(),
            Value::String(visitor.message.unwrap_or_default()),
        );
        if !visitor.fields.is_empty() {
            record.insert("fields".to_string(), Value::Object(visitor.fields));
        }

        let line = serde_json::to_string(&record).map_err(|_| fmt::Error)?;
        writeln!(writer, "{line}")
    }
}

#[derive(Default)]
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, Value>,
}

impl JsonVisitor {
    fn insert_masked(&mut self, field: &Field, value: Value) {
        let value = if mask::is_sensitive(field.name()) {
            Value::String(REDACTION_MARKER.to_string())
        } else {
            value
        };
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for JsonVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
            return;
        }
        self.insert_masked(field, Value::String(value.to_string()));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert_masked(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert_masked(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert_masked(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        let value = serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(value.to_string()));
        self.insert_masked(field, value);
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
            return;
        }
        self.insert_masked(field, Value::String(format!("{value:?}")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::layer::SubscriberExt;

    /// Shared buffer the fmt layer writes into, so tests can assert on
    /// exactly what reached the sink
    #[derive(Clone, Default)]
    struct Capture {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
        }
    }

    struct CaptureHandle {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl io::Write for CaptureHandle {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = CaptureHandle;

        fn make_writer(&'a self) -> Self::Writer {
            CaptureHandle {
                buffer: Arc::clone(&self.buffer),
            }
        }
    }

    #[test]
    fn test_console_fields_mask_sensitive_values() {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(false)
                .fmt_fields(MaskFields)
                .with_writer(capture.clone()),
        );

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(user = "alice", db_password = "hunter2", "connecting");
        });

        let output = capture.contents();
        assert!(output.contains("connecting"));
        assert!(output.contains("user=\"alice\""));
        assert!(output.contains("db_password=[REDACTED]"));
        assert!(!output.contains("hunter2"));
    }

    #[test]
    fn test_json_events_mask_sensitive_fields() {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .event_format(JsonFormat::new(Environment::Prod))
                .with_writer(capture.clone()),
        );

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(user = "alice", password = "hunter2", "user login");
        });

        let output = capture.contents();
        let line: Value = serde_json::from_str(output.lines().next().unwrap()).unwrap();
        assert_eq!(line["message"], "user login");
        assert_eq!(line["level"], "INFO");
        assert_eq!(line["environment"], "prod");
        assert_eq!(line["fields"]["user"], "alice");
        assert_eq!(line["fields"]["password"], REDACTION_MARKER);
        assert!(!output.contains("hunter2"));
    }

    #[test]
    fn test_json_masks_numeric_fields_by_name() {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .event_format(JsonFormat::new(Environment::Dev))
                .with_writer(capture.clone()),
        );

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(port = 8000_u64, token_ttl_secs = 3600_u64, "started");
        });

        let line: Value =
            serde_json::from_str(capture.contents().lines().next().unwrap()).unwrap();
        assert_eq!(line["fields"]["port"], 8000);
        // masking is by field name, so a numeric token_* field is hidden too
        assert_eq!(line["fields"]["token_ttl_secs"], REDACTION_MARKER);
    }

    #[test]
    fn test_json_omits_fields_object_when_empty() {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .event_format(JsonFormat::new(Environment::Dev))
                .with_writer(capture.clone()),
        );

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("plain message");
        });

        let line: Value =
            serde_json::from_str(capture.contents().lines().next().unwrap()).unwrap();
        assert_eq!(line["message"], "plain message");
        assert!(line.get("fields").is_none());
    }
}
