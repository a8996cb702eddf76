use crate::args::OutputFormat;
use crate::presentation::formatters::FormatOptions;
use crate::presentation::presenters;
use crate::presentation::renderers::{console::ConsoleDetailView, tui};
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle(file: &Path, format: OutputFormat, options: FormatOptions) -> Result<()> {
    let record = reqlens_types::ExchangeRecord::load(file)
        .with_context(|| format!("Failed to load capture file: {}", file.display()))?;

    // Provider gate: nothing to render for unmatched providers. Silent
    // empty output, exit 0.
    let Some(view_model) = presenters::present_detail(&record) else {
        return Ok(());
    };

    match format {
        OutputFormat::Tui => tui::run(view_model, file),
        OutputFormat::Plain => {
            print!("{}", ConsoleDetailView {
                view_model: &view_model,
                options,
            });
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&view_model)?);
            Ok(())
        }
    }
}
