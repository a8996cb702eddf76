use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Show the detail view for one captured exchange
    Show {
        /// Path to a capture file (JSON)
        file: PathBuf,
    },

    /// List captured exchanges in a directory
    List {
        /// Directory containing capture files
        dir: PathBuf,

        /// Maximum number of exchanges to list
        #[arg(long, default_value_t = 50)]
        limit: usize,
    },
}
