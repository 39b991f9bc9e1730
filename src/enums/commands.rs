use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP analysis server
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
    },
    /// Analyze a single file and print the JSON report
    Analyze {
        file: PathBuf,
        #[clap(short, long)]
        language: Option<String>,
        #[clap(short, long)]
        prompt: Option<String>,
    },
    /// Write a sample configuration file
    Init,
    /// Check the configuration and the API credential
    Validate,
}
