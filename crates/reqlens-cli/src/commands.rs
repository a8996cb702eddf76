use super::args::{Cli, Commands};
use super::handlers;
use crate::presentation::formatters::FormatOptions;
use anyhow::Result;
use is_terminal::IsTerminal;

pub fn run(cli: Cli) -> Result<()> {
    let is_tty = std::io::stdout().is_terminal();
    let enable_color = !cli.no_color && is_tty;
    let options = FormatOptions { enable_color };

    // The interactive view needs a real terminal; piped output gets the
    // plain rendering instead.
    let format = match cli.format {
        crate::args::OutputFormat::Tui if !is_tty => crate::args::OutputFormat::Plain,
        other => other,
    };

    match cli.command {
        Commands::Show { file } => handlers::show::handle(&file, format, options),
        Commands::List { dir, limit } => handlers::list::handle(&dir, limit, format, options),
    }
}
