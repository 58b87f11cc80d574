use clap::Subcommand;

use crate::types::OutputFormat;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Browse posts interactively (default)")]
    Browse {
        #[arg(long, help = "Use the built-in sample feed instead of the network")]
        offline_sample: bool,
    },

    #[command(about = "Fetch posts once and print them")]
    List {
        #[arg(long, help = "Include full title and body for every post")]
        expand: bool,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,

        #[arg(long, help = "Use the built-in sample feed instead of the network")]
        offline_sample: bool,
    },
}
