//! OTLP JSON encoding of exported spans.
//!
//! Each export batch becomes one `resourceSpans` document shaped after the
//! OTLP/HTTP JSON mapping, so trace files can be replayed into any collector.

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;
use std::time::SystemTime;

/// Instrumentation scope name written with every batch.
const SCOPE_NAME: &str = "Lumina";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument {
    resource_spans: Vec<ResourceSpans>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceSpans {
    resource: ResourceJson,
    scope_spans: Vec<ScopeSpans>,
}

#[derive(Debug, Serialize)]
struct ResourceJson {
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
struct ScopeSpans {
    scope: Scope,
    spans: Vec<SpanJson>,
}

#[derive(Debug, Serialize)]
struct Scope {
    name: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpanJson {
    trace_id: String,
    span_id: String,
    parent_span_id: String,
    name: String,
    kind: u8,
    start_time_unix_nano: String,
    end_time_unix_nano: String,
    attributes: Vec<Attribute>,
    events: Vec<EventJson>,
    links: Vec<LinkJson>,
    status: StatusJson,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventJson {
    time_unix_nano: String,
    name: String,
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LinkJson {
    trace_id: String,
    span_id: String,
    attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
struct StatusJson {
    code: u8,
    message: String,
}

#[derive(Debug, PartialEq, Serialize)]
struct Attribute {
    key: String,
    value: AnyValue,
}

/// OTLP `AnyValue`. Integers travel as strings, arrays as their debug text.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
enum AnyValue {
    BoolValue(bool),
    IntValue(String),
    DoubleValue(f64),
    StringValue(String),
}

impl From<&Value> for AnyValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => Self::BoolValue(*b),
            Value::I64(i) => Self::IntValue(i.to_string()),
            Value::F64(f) => Self::DoubleValue(*f),
            Value::String(s) => Self::StringValue(s.to_string()),
            Value::Array(_) => Self::StringValue(format!("{value:?}")),
        }
    }
}

/// Serializes span batches for the file exporter.
pub struct SpanFormatter {
    resource: Resource,
}

impl SpanFormatter {
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Encodes `batch` as a single-line OTLP JSON document.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if encoding fails.
    pub fn format_batch(&self, batch: &[SpanData]) -> serde_json::Result<String> {
        let resource = ResourceJson {
            attributes: self
                .resource
                .iter()
                .map(|(key, value)| Attribute {
                    key: key.to_string(),
                    value: value.into(),
                })
                .collect(),
        };

        let document = ExportDocument {
            resource_spans: vec![ResourceSpans {
                resource,
                scope_spans: vec![ScopeSpans {
                    scope: Scope { name: SCOPE_NAME },
                    spans: batch.iter().map(encode_span).collect(),
                }],
            }],
        };

        serde_json::to_string(&document)
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter")
            .field("resource_len", &self.resource.len())
            .finish()
    }
}

fn encode_span(span: &SpanData) -> SpanJson {
    let parent_span_id = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (code, message) = status_code(&span.status);

    SpanJson {
        trace_id: format!("{:032x}", span.span_context.trace_id()),
        span_id: format!("{:016x}", span.span_context.span_id()),
        parent_span_id,
        name: span.name.to_string(),
        kind: kind_code(&span.span_kind),
        start_time_unix_nano: unix_nanos(span.start_time),
        end_time_unix_nano: unix_nanos(span.end_time),
        attributes: encode_attributes(&span.attributes),
        events: span.events.iter().map(encode_event).collect(),
        links: span.links.iter().map(encode_link).collect(),
        status: StatusJson { code, message },
    }
}

fn encode_attributes(attributes: &[KeyValue]) -> Vec<Attribute> {
    attributes
        .iter()
        .map(|kv| Attribute {
            key: kv.key.to_string(),
            value: (&kv.value).into(),
        })
        .collect()
}

fn encode_event(event: &Event) -> EventJson {
    EventJson {
        time_unix_nano: unix_nanos(event.timestamp),
        name: event.name.to_string(),
        attributes: encode_attributes(&event.attributes),
    }
}

fn encode_link(link: &Link) -> LinkJson {
    LinkJson {
        trace_id: format!("{:032x}", link.span_context.trace_id()),
        span_id: format!("{:016x}", link.span_context.span_id()),
        attributes: encode_attributes(&link.attributes),
    }
}

/// Nanoseconds since the epoch as a decimal string; pre-epoch clamps to zero.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(SystemTime::UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos())
        .to_string()
}

const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status_code(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn empty_batch_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "Lumina")]);
        let json = SpanFormatter::new(resource).format_batch(&[]).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

        let group = &doc["resourceSpans"][0];
        let attrs = group["resource"]["attributes"].as_array().unwrap();
        assert!(attrs.iter().any(|a| a["key"] == "service.name"
            && a["value"]["stringValue"] == "Lumina"));
        assert_eq!(group["scopeSpans"][0]["scope"]["name"], "Lumina");
        assert!(group["scopeSpans"][0]["spans"].as_array().unwrap().is_empty());
        assert!(!json.contains('\n'));
    }

    #[test]
    fn values_use_otlp_tags() {
        let encoded = serde_json::to_value(AnyValue::from(&Value::I64(42))).unwrap();
        assert_eq!(encoded, serde_json::json!({ "intValue": "42" }));

        let encoded = serde_json::to_value(AnyValue::from(&Value::Bool(true))).unwrap();
        assert_eq!(encoded, serde_json::json!({ "boolValue": true }));
    }

    #[test]
    fn nanos_are_decimal_strings() {
        let t = SystemTime::UNIX_EPOCH + Duration::from_millis(1500);
        assert_eq!(unix_nanos(t), "1500000000");
        assert_eq!(unix_nanos(SystemTime::UNIX_EPOCH), "0");
    }

    #[test]
    fn status_mapping() {
        assert_eq!(status_code(&Status::Unset), (0, String::new()));
        assert_eq!(status_code(&Status::error("boom")), (2, "boom".to_string()));
    }
}
