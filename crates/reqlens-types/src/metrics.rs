use serde::{Deserialize, Serialize};

/// Metrics precomputed upstream at capture time. Every field is optional:
/// a failed call may have no token accounting, and older captures predate
/// cost calculation. Absence stays absence, it is never coerced to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatedMetrics {
    #[serde(default, alias = "totalTokens", skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<i64>,

    #[serde(default, alias = "totalCost", skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,

    /// Wall-clock latency of the captured call in milliseconds.
    #[serde(default, alias = "duration", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<i64>,
}
