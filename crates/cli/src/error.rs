use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to load season: {0}")]
    Season(#[from] config::Error),

    #[error("Season simulation failed: {0}")]
    Simulation(#[from] kernel::Error),

    #[error("Failed to write standings: {0}")]
    Report(#[source] io::Error),
}
