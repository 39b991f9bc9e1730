use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "codelyzer")]
#[clap(about = "Linter, security scanner and AI feedback for code snippets", long_about = None)]
pub struct Cli {
    /// Path to a configuration file (defaults to ~/codelyzer/config.toml)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
