use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::metrics::CalculatedMetrics;
use crate::provider::ProviderType;

// NOTE: Schema-on-Read
//
// Capture files keep request/response bodies as raw JSON. Provider-specific
// shapes are derived on demand via `typed_request`/`typed_response`, driven
// by the record's provider tag. Captures from providers this build does not
// model stay loadable and listable; only the typed view degrades.

/// One captured request/response pair for an external API call.
/// Maps 1:1 to a capture file on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRecord {
    /// Opaque exchange identifier assigned at capture time
    pub id: String,

    /// Which provider-specific shape `request`/`response` conform to
    pub provider: ProviderType,

    pub request: RawRequest,
    pub response: RawResponse,

    /// Capture environment details, display-only
    #[serde(default)]
    pub metadata: ExchangeMetadata,

    /// Free-form key/value pairs attached by the caller, display-only
    #[serde(default)]
    pub properties: BTreeMap<String, String>,

    /// Metrics precomputed upstream; absent fields render blank
    #[serde(default, alias = "calculatedFields")]
    pub calculated: CalculatedMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub body: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// HTTP status of the upstream call. Missing when the call never
    /// completed; classified as failure, never as success. Some proxies
    /// record sentinel values outside the HTTP range (-1); the raw number
    /// is kept so the status badge can interpolate it verbatim.
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<i64>,
    #[serde(default)]
    pub body: Value,
}

/// Accept any JSON value for `status`. A non-integer value degrades to
/// None (classified as failure) instead of failing the whole record.
fn lenient_status<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
}

/// Request payload, typed per the record's provider tag
#[derive(Debug, Clone)]
pub enum ExchangeRequest {
    OpenAi(OpenAiRequestBody),
    Other(Value),
}

/// Response payload plus HTTP status, typed per the record's provider tag
#[derive(Debug, Clone)]
pub enum ExchangeResponse {
    OpenAi {
        status: Option<i64>,
        body: OpenAiResponseBody,
    },
    Other {
        status: Option<i64>,
        body: Value,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenAiRequestBody {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenAiResponseBody {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: Option<ChatMessage>,
}

/// Token accounting from the provider. Either side may be absent when the
/// call failed before usage was counted.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: Option<u32>,
    #[serde(default)]
    pub completion_tokens: Option<u32>,
}

impl ExchangeRecord {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let record = serde_json::from_str(&raw)?;
        Ok(record)
    }

    /// Typed view of the request body. Malformed variant bodies degrade to
    /// defaults rather than failing; the detail view renders blanks.
    pub fn typed_request(&self) -> ExchangeRequest {
        match self.provider {
            ProviderType::OpenAi => {
                let body = serde_json::from_value(self.request.body.clone()).unwrap_or_default();
                ExchangeRequest::OpenAi(body)
            }
            ProviderType::AzureOpenAi | ProviderType::Anthropic => {
                ExchangeRequest::Other(self.request.body.clone())
            }
        }
    }

    /// Typed view of the response body, carrying the HTTP status alongside.
    pub fn typed_response(&self) -> ExchangeResponse {
        match self.provider {
            ProviderType::OpenAi => {
                let body = serde_json::from_value(self.response.body.clone()).unwrap_or_default();
                ExchangeResponse::OpenAi {
                    status: self.response.status,
                    body,
                }
            }
            ProviderType::AzureOpenAi | ProviderType::Anthropic => ExchangeResponse::Other {
                status: self.response.status,
                body: self.response.body.clone(),
            },
        }
    }
}

impl ExchangeResponse {
    pub fn status(&self) -> Option<i64> {
        match self {
            ExchangeResponse::OpenAi { status, .. } => *status,
            ExchangeResponse::Other { status, .. } => *status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn openai_record() -> ExchangeRecord {
        serde_json::from_value(json!({
            "id": "exc_01",
            "provider": "OpenAI",
            "request": {
                "body": {
                    "model": "gpt-4",
                    "messages": [{"role": "user", "content": "hello"}]
                }
            },
            "response": {
                "status": 200,
                "body": {
                    "choices": [{"message": {"role": "assistant", "content": "hi"}}],
                    "usage": {"prompt_tokens": 9, "completion_tokens": 12}
                }
            },
            "calculatedFields": {"totalTokens": 21, "totalCost": 0.0031, "duration": 834}
        }))
        .unwrap()
    }

    #[test]
    fn test_typed_request_openai() {
        let record = openai_record();
        match record.typed_request() {
            ExchangeRequest::OpenAi(body) => {
                assert_eq!(body.model.as_deref(), Some("gpt-4"));
                assert_eq!(body.messages.len(), 1);
            }
            ExchangeRequest::Other(_) => panic!("expected OpenAI request shape"),
        }
    }

    #[test]
    fn test_typed_response_carries_status_and_usage() {
        let record = openai_record();
        match record.typed_response() {
            ExchangeResponse::OpenAi { status, body } => {
                assert_eq!(status, Some(200));
                let usage = body.usage.unwrap();
                assert_eq!(usage.prompt_tokens, Some(9));
                assert_eq!(usage.completion_tokens, Some(12));
            }
            ExchangeResponse::Other { .. } => panic!("expected OpenAI response shape"),
        }
    }

    #[test]
    fn test_non_openai_provider_stays_raw() {
        let record: ExchangeRecord = serde_json::from_value(json!({
            "id": "exc_02",
            "provider": "Anthropic",
            "request": {"body": {"model": "claude-3", "max_tokens": 64}},
            "response": {"status": 200, "body": {"content": []}}
        }))
        .unwrap();

        match record.typed_request() {
            ExchangeRequest::Other(value) => assert_eq!(value["model"], "claude-3"),
            ExchangeRequest::OpenAi(_) => panic!("Anthropic body must not be typed as OpenAI"),
        }
    }

    #[test]
    fn test_out_of_range_status_still_loads() {
        let record: ExchangeRecord = serde_json::from_value(json!({
            "id": "exc_neg",
            "provider": "OpenAI",
            "request": {"body": {"model": "gpt-4"}},
            "response": {"status": -1, "body": {}}
        }))
        .unwrap();
        assert_eq!(record.response.status, Some(-1));
        assert_eq!(record.typed_response().status(), Some(-1));
    }

    #[test]
    fn test_non_integer_status_degrades_to_none() {
        let record: ExchangeRecord = serde_json::from_value(json!({
            "id": "exc_str",
            "provider": "OpenAI",
            "request": {"body": {}},
            "response": {"status": "timeout", "body": {}}
        }))
        .unwrap();
        assert_eq!(record.response.status, None);
    }

    #[test]
    fn test_malformed_body_degrades_to_defaults() {
        let record: ExchangeRecord = serde_json::from_value(json!({
            "id": "exc_03",
            "provider": "OpenAI",
            "request": {"body": "not an object"},
            "response": {"body": {}}
        }))
        .unwrap();

        match record.typed_request() {
            ExchangeRequest::OpenAi(body) => {
                assert_eq!(body.model, None);
                assert!(body.messages.is_empty());
            }
            ExchangeRequest::Other(_) => panic!("expected OpenAI request shape"),
        }
        assert_eq!(record.response.status, None);
    }
}
