pub mod cli;
pub mod error;
pub mod report;

use crate::cli::Cli;
use crate::error::Error;
use config::Season;
use rand::{SeedableRng, rngs::StdRng};
use std::io::Write;
use tracing::info;

/// Load the season named on the command line, race it, and write both
/// standings tables to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<(), Error> {
    let season = Season::load(&cli.season)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, "seeding race stream");
    let mut rng = StdRng::seed_from_u64(seed);

    let summary = kernel::run_season(&season, &mut rng)?;
    report::write_standings(out, &summary.standings).map_err(Error::Report)
}
