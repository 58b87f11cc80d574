// NOTE: Command Organization
//
// - `browse` is the interactive list and the default when no command is given
// - `list` is the same fetch, printed once for scripting
// - Connection and logging flags are global so both commands share them;
//   `--format` only shapes `list` output and lives on that command

mod commands;

pub use commands::*;

use crate::types::LogLevel;
use clap::Parser;

#[derive(Parser)]
#[command(name = "postdeck")]
#[command(about = "Browse a remote post feed with expandable rows", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Feed URL (overrides POSTDECK_ENDPOINT and the config file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Config file (default: <config dir>/postdeck/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log file (default: <state dir>/postdeck/postdeck.log)
    #[arg(long, global = true)]
    pub log_file: Option<String>,

    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
