mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "reqlens")]
#[command(about = "Inspect captured LLM API exchanges", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format: tui opens the interactive detail view, plain and json
    /// render to stdout
    #[arg(long, default_value = "tui", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}
