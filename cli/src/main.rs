use clap::Parser;
use gatecheck_cli::{cli, commands};
use gatecheck_core::types::RunId;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Diagnostics go to stderr; stdout carries only the summary line.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();
    let env = gatecheck_core::config::snapshot_env();
    let run_id = RunId(Uuid::new_v4().to_string());

    let code = match args.command {
        cli::Commands::HttpApi(gate_args) => {
            tracing::info!(run_id = %run_id, gate = "http-api", "gate run starting");
            commands::http_api::run(&gate_args, &env).await
        }
        cli::Commands::Function(gate_args) => {
            tracing::info!(run_id = %run_id, gate = "function", "gate run starting");
            commands::function::run(&gate_args, &env).await
        }
    };
    std::process::exit(code);
}
