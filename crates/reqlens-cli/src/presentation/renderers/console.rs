use crate::presentation::formatters::FormatOptions;
use crate::presentation::view_models::{
    BadgeTone, DetailViewModel, FieldDescription, ListViewModel,
};
use owo_colors::OwoColorize;
use std::fmt;

/// Console rendering of the exchange detail view
pub struct ConsoleDetailView<'a> {
    pub view_model: &'a DetailViewModel,
    pub options: FormatOptions,
}

impl fmt::Display for ConsoleDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vm = self.view_model;
        let enable_color = self.options.enable_color;

        if enable_color {
            writeln!(
                f,
                "{} {}",
                format!("Exchange {}", vm.id).bright_white().bold(),
                format!("({})", vm.provider).dimmed()
            )?;
        } else {
            writeln!(f, "Exchange {} ({})", vm.id, vm.provider)?;
        }
        if let Some(ts) = vm.captured_at {
            let captured = format!("Captured {}", ts.format("%Y-%m-%d %H:%M:%S UTC"));
            if enable_color {
                writeln!(f, "{}", captured.dimmed())?;
            } else {
                writeln!(f, "{}", captured)?;
            }
        }
        writeln!(f)?;

        for field in &vm.summary {
            let label = format!("{}:", field.title);
            write!(f, "  {:<9}", label)?;
            write_description(f, &field.description, enable_color)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

fn write_description(
    f: &mut fmt::Formatter<'_>,
    description: &FieldDescription,
    enable_color: bool,
) -> fmt::Result {
    match description {
        FieldDescription::Tag { text } => match text {
            Some(text) if enable_color => write!(f, "{}", text.cyan()),
            Some(text) => write!(f, "{}", text),
            None => Ok(()),
        },
        FieldDescription::Tokens {
            total,
            prompt,
            completion,
        } => {
            if let Some(total) = total {
                write!(f, "{}", total)?;
            }
            write!(
                f,
                " (prompt: {}, completion: {})",
                opt(*prompt),
                opt(*completion)
            )
        }
        FieldDescription::Text { text } => match text {
            Some(text) => write!(f, "{}", text),
            None => Ok(()),
        },
        FieldDescription::Badge { text, tone } => {
            if !enable_color {
                return write!(f, "{}", text);
            }
            match tone {
                BadgeTone::Success => write!(f, "{}", text.green()),
                BadgeTone::Error => write!(f, "{}", text.red()),
            }
        }
    }
}

fn opt(value: Option<u32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Console rendering of the exchange list
pub struct ConsoleListView<'a> {
    pub view_model: &'a ListViewModel,
    pub options: FormatOptions,
}

impl fmt::Display for ConsoleListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vm = self.view_model;

        if vm.exchanges.is_empty() {
            writeln!(f, "No exchanges found.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<20} {:<12} {:<24} {:<8} {}",
            "ID", "PROVIDER", "MODEL", "STATUS", "COST"
        )?;
        for entry in &vm.exchanges {
            let status = entry
                .status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            let cost = entry
                .cost
                .map(crate::presentation::formatters::format_cost)
                .unwrap_or_else(|| "-".to_string());
            let model = entry.model.as_deref().unwrap_or("-");

            let line = format!(
                "{:<20} {:<12} {:<24} {:<8} {}",
                entry.id, entry.provider, model, status, cost
            );
            if self.options.enable_color {
                writeln!(f, "{}", line.white())?;
            } else {
                writeln!(f, "{}", line)?;
            }
        }

        if vm.total_count > vm.exchanges.len() {
            writeln!(
                f,
                "\nShowing {} of {} exchanges (use --limit to see more)",
                vm.exchanges.len(),
                vm.total_count
            )?;
        }
        if vm.skipped > 0 {
            writeln!(f, "Skipped {} unreadable file(s)", vm.skipped)?;
        }

        Ok(())
    }
}
