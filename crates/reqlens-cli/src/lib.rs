// NOTE: reqlens Architecture Rationale
//
// Why Schema-on-Read (not normalize at capture time)?
// - Provider response schemas change without notice
// - Capture files stay loadable even when a body no longer parses; only the
//   typed detail view degrades, `list` keeps working
// - Trade-off: bodies are re-parsed per view, acceptable at single-exchange scale
//
// Why a provider gate on the detail view (not best-effort rendering)?
// - Summary extraction (model, usage, choices) is OpenAI-shape-specific
// - Running it against other shapes reads fields that do not exist; the view
//   renders nothing for unmatched providers rather than guessing

mod args;
mod commands;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
