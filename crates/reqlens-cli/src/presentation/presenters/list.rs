use crate::presentation::view_models::{ListEntry, ListViewModel};
use reqlens_types::{ExchangeRecord, ExchangeRequest};

/// Build the list view over a set of loaded records. Unlike the detail
/// view, the list is provider-agnostic: unmatched providers still get a
/// row, with the model probed from the raw body where possible.
pub fn present_list(records: &[ExchangeRecord], limit: usize, skipped: usize) -> ListViewModel {
    let total_count = records.len();

    let exchanges = records
        .iter()
        .take(limit)
        .map(|record| {
            let model = match record.typed_request() {
                ExchangeRequest::OpenAi(body) => body.model,
                ExchangeRequest::Other(value) => value
                    .get("model")
                    .and_then(|m| m.as_str())
                    .map(str::to_string),
            };
            ListEntry {
                id: record.id.clone(),
                provider: record.provider.to_string(),
                model,
                status: record.response.status,
                cost: record.calculated.total_cost,
            }
        })
        .collect();

    ListViewModel {
        exchanges,
        total_count,
        limit,
        skipped,
    }
}
