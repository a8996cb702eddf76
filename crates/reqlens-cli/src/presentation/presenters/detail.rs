use crate::presentation::formatters::{format_cost, format_duration_ms};
use crate::presentation::view_models::{
    BadgeTone, DetailViewModel, DisplayMode, FieldDescription, SummaryField,
};
use reqlens_types::{ExchangeRecord, ExchangeRequest, ExchangeResponse, ProviderType};

/// Success classification: HTTP status in [200, 300). A missing status
/// (call never completed) or an out-of-range sentinel like -1 is failure.
/// Derived fresh from the record on every call; never cached.
pub fn is_success(status: Option<i64>) -> bool {
    matches!(status, Some(s) if (200..300).contains(&s))
}

/// Build the detail view for one captured exchange.
///
/// Returns None for providers whose payload shape this view does not
/// interpret. That is the expected silent outcome, not an error: the
/// summary extraction below is OpenAI-specific and must not run against
/// other shapes.
pub fn present_detail(record: &ExchangeRecord) -> Option<DetailViewModel> {
    if record.provider != ProviderType::OpenAi {
        return None;
    }

    let request = record.typed_request();
    let response = record.typed_response();
    let success = is_success(response.status());

    let summary = build_summary(record, &request, &response, success);

    Some(DetailViewModel {
        id: record.id.clone(),
        provider: record.provider.to_string(),
        captured_at: record.request.timestamp,
        success,
        summary,
        initial_mode: DisplayMode::initial(success),
        request,
        response,
        request_json: record.request.body.clone(),
        response_json: record.response.body.clone(),
    })
}

/// The five summary fields, fixed order: Model, Tokens, Cost, Status,
/// Latency. Never sorted, filtered, or reordered by data values; absent
/// inputs produce blank descriptions, not missing rows.
fn build_summary(
    record: &ExchangeRecord,
    request: &ExchangeRequest,
    response: &ExchangeResponse,
    success: bool,
) -> Vec<SummaryField> {
    let model = match request {
        ExchangeRequest::OpenAi(body) => body.model.clone(),
        ExchangeRequest::Other(_) => None,
    };

    let usage = match response {
        ExchangeResponse::OpenAi { body, .. } => body.usage,
        ExchangeResponse::Other { .. } => None,
    };

    vec![
        SummaryField {
            title: "Model",
            description: FieldDescription::Tag { text: model },
        },
        SummaryField {
            title: "Tokens",
            description: FieldDescription::Tokens {
                total: record.calculated.total_tokens,
                prompt: usage.and_then(|u| u.prompt_tokens),
                completion: usage.and_then(|u| u.completion_tokens),
            },
        },
        SummaryField {
            title: "Cost",
            description: FieldDescription::Text {
                text: record.calculated.total_cost.map(format_cost),
            },
        },
        SummaryField {
            title: "Status",
            description: status_badge(response.status(), success),
        },
        SummaryField {
            title: "Latency",
            description: FieldDescription::Text {
                text: record.calculated.duration_ms.map(format_duration_ms),
            },
        },
    ]
}

fn status_badge(status: Option<i64>, success: bool) -> FieldDescription {
    if success {
        return FieldDescription::Badge {
            text: "Success".to_string(),
            tone: BadgeTone::Success,
        };
    }

    // A record with no status interpolates verbatim, matching the capture
    // console's historical "undefined Error" badge.
    let code = match status {
        Some(s) => s.to_string(),
        None => "undefined".to_string(),
    };
    FieldDescription::Badge {
        text: format!("{} Error", code),
        tone: BadgeTone::Error,
    }
}
