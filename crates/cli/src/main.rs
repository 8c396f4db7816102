use clap::Parser;
use season_sim::cli::Cli;
use std::io;
use tracing::debug;
use tracing_log::AsTrace;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.log_level_filter().as_trace())
        .with_writer(io::stderr)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!(config = ?cli);

    season_sim::run(&cli, &mut io::stdout().lock())?;
    Ok(())
}
