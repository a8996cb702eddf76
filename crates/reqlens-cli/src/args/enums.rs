use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Interactive terminal view (detail view only; `list` falls back to plain)
    Tui,
    /// Human-readable text on stdout
    Plain,
    /// View model serialized as JSON on stdout
    Json,
}
