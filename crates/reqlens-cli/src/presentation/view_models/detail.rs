use chrono::{DateTime, Utc};
use reqlens_types::{ExchangeRequest, ExchangeResponse};
use serde::Serialize;

/// Payload display format chosen by the user. View state, not data: seeded
/// once per mounted detail screen, thereafter only a key press changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Chat,
    Json,
}

impl DisplayMode {
    /// Seed for a fresh mount. A failed call's body rarely holds a renderable
    /// chat structure, so failures open on the raw JSON view.
    pub fn initial(is_success: bool) -> Self {
        if is_success {
            DisplayMode::Chat
        } else {
            DisplayMode::Json
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Chat => DisplayMode::Json,
            DisplayMode::Json => DisplayMode::Chat,
        }
    }
}

/// Detail view of one captured exchange. Produced by the detail presenter
/// only for records whose provider shape it can interpret.
#[derive(Debug, Serialize)]
pub struct DetailViewModel {
    pub id: String,
    pub provider: String,
    /// When the request was captured, if the capture recorded it
    pub captured_at: Option<DateTime<Utc>>,
    pub success: bool,
    /// Exactly five fields, fixed order: Model, Tokens, Cost, Status, Latency
    pub summary: Vec<SummaryField>,
    pub initial_mode: DisplayMode,

    /// Typed payloads for the chat view
    #[serde(skip)]
    pub request: ExchangeRequest,
    #[serde(skip)]
    pub response: ExchangeResponse,

    /// Raw payloads for the JSON view
    #[serde(skip)]
    pub request_json: serde_json::Value,
    #[serde(skip)]
    pub response_json: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct SummaryField {
    pub title: &'static str,
    pub description: FieldDescription,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldDescription {
    /// Single tag value (model name)
    Tag { text: Option<String> },
    /// Token counts: primary total plus the prompt/completion breakdown.
    /// Each side of the breakdown renders blank independently when absent.
    Tokens {
        total: Option<i64>,
        prompt: Option<u32>,
        completion: Option<u32>,
    },
    /// Preformatted text (cost, latency); None renders blank
    Text { text: Option<String> },
    /// Status badge with a positive or negative affordance
    Badge { text: String, tone: BadgeTone },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Success,
    Error,
}
