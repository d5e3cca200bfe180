use clap::Parser;
use std::process::ExitCode;

mod args;
use args::{Args, build_harvest};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging, info level unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let harvest = match build_harvest(args) {
        Ok(harvest) => harvest,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match harvest.run().await {
        Ok(summary) => {
            if let Some(path) = summary.output {
                ::log::debug!("Report written to {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Failed to start harvest: {}", e);
            ExitCode::FAILURE
        }
    }
}
