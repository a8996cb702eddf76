pub mod error;
pub mod exchange;
pub mod metrics;
pub mod provider;

pub use error::{Error, Result};
pub use exchange::*;
pub use metrics::CalculatedMetrics;
pub use provider::ProviderType;
