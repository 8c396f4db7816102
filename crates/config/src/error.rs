#![forbid(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to extract season document: {0}")]
    Extract(#[from] figment::Error),

    #[error("invalid path: {0}")]
    InvalidPath(PathBuf),

    #[error("unsupported season document format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("driver {driver:?} races for unknown team {team:?}")]
    UnknownTeam { driver: String, team: String },

    #[error("driver {0:?} is listed more than once")]
    DuplicateDriver(String),
}
