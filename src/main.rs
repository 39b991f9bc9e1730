use clap::Parser;
use codelyzer::structs::cli::Cli;
use codelyzer::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli.config);

    runner
        .run_command(cli.command)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))
}
