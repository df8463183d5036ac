use std::io;

use clap::Parser;
use tracing::debug;

use planner_cli::app;
use planner_cli::cli::Cli;
use planner_cli::logging::init_logging;

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;
    debug!(state = %cli.state.display(), command = ?cli.command, "starting");

    app::run(cli, &mut io::stdout()).await
}
