use anyhow::Result;
use clap::Parser;
use sim_readiness::{cli, workflow};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();
    let args = cli::RootArgs::parse();
    workflow::run(args)
}

/// Logs go to stderr so JSON on stdout stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
