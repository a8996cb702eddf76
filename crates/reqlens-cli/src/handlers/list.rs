use crate::args::OutputFormat;
use crate::presentation::formatters::FormatOptions;
use crate::presentation::presenters;
use crate::presentation::renderers::console::ConsoleListView;
use anyhow::{Context, Result};
use reqlens_types::ExchangeRecord;
use std::path::Path;

pub fn handle(dir: &Path, limit: usize, format: OutputFormat, options: FormatOptions) -> Result<()> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    // Unreadable files are counted, not fatal; one bad capture must not
    // hide the rest of the directory.
    let mut records = Vec::new();
    let mut skipped = 0;
    for path in &paths {
        match ExchangeRecord::load(path) {
            Ok(record) => records.push(record),
            Err(_) => skipped += 1,
        }
    }

    let view_model = presenters::present_list(&records, limit, skipped);

    match format {
        // The list has no interactive view; tui falls back to plain.
        OutputFormat::Tui | OutputFormat::Plain => {
            print!("{}", ConsoleListView {
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
