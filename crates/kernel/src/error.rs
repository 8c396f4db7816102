/// Represents all possible errors that can occur in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A driver references a team with no performance rating.
    #[error("Driver {driver:?} races for unknown team {team:?}")]
    UnknownTeam { driver: String, team: String },

    /// Points were awarded to a name that was never entered in the standings.
    #[error("No standings entry for {0:?}")]
    MissingStanding(String),
}
