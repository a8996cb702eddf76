use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ListViewModel {
    pub exchanges: Vec<ListEntry>,
    pub total_count: usize,
    pub limit: usize,
    /// Files that were present but did not parse as capture records
    pub skipped: usize,
}

#[derive(Debug, Serialize)]
pub struct ListEntry {
    pub id: String,
    pub provider: String,
    pub model: Option<String>,
    pub status: Option<i64>,
    pub cost: Option<f64>,
}
