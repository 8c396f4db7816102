#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

/// A driver entered for the whole season.
///
/// Ratings are conventionally `0..=100` but nothing here enforces that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Driver {
    pub name: String,
    /// Name of the team this driver races for.
    pub team: String,
    pub experience: f64,
    pub racecraft: f64,
    pub awareness: f64,
    pub pace: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Track {
    #[serde(alias = "track")]
    pub name: String,
    pub track_pace_factor: f64,
}

/// Tuning knobs shared by every race of the season.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Magnitude of the per-driver noise term.
    pub randomness: f64,
    /// DNF probability before the awareness adjustment.
    pub dnf_base_rate: f64,
}
