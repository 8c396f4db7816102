mod error;
pub mod points;
pub mod race;
pub mod season;

pub use error::Error;
pub use race::{RaceResult, RaceSimulator};
pub use season::{FinalStandings, RaceReport, SeasonSummary, Standings, run_season};
