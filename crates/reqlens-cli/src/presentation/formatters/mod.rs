pub mod cost;
pub mod options;
pub mod time;

pub use cost::format_cost;
pub use options::FormatOptions;
pub use time::format_duration_ms;
