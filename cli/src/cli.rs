use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gatecheck", about = "Infrastructure verification gates")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify a deployed HTTP API is wired to its function and answers live.
    HttpApi(GateArgs),
    /// Verify a function's configuration and attachments.
    Function(GateArgs),
}

#[derive(clap::Args, Debug, Default)]
pub struct GateArgs {
    /// Report output path (overrides GATE_OUT).
    #[arg(long)]
    pub out: Option<PathBuf>,
}
