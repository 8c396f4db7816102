use crate::Error;
use config::{Driver, Settings, Track};
use rand::Rng;
use std::collections::BTreeMap;
use tracing::debug;

/// Score recorded for a driver who did not finish. Far below anything a
/// finisher can reach with ratings in the usual `0..=100` range.
pub const DNF_SCORE: f64 = -9999.0;

/// Extra DNF probability per point of awareness below 100.
const AWARENESS_DNF_WEIGHT: f64 = 0.0005;

#[derive(Debug, Clone, PartialEq)]
pub struct RaceResult {
    pub name: String,
    pub team: String,
    /// [`DNF_SCORE`] when `dnf` is set.
    pub score: f64,
    pub dnf: bool,
}

/// Scores and ranks every driver for a single track.
#[derive(Debug, Clone, Copy)]
pub struct RaceSimulator {
    randomness: f64,
    dnf_base_rate: f64,
}

impl RaceSimulator {
    pub fn new(settings: &Settings) -> Self {
        Self {
            randomness: settings.randomness,
            dnf_base_rate: settings.dnf_base_rate,
        }
    }

    /// Probability that `driver` retires from a race.
    ///
    /// Not clamped: extreme settings can push this outside `[0, 1]`, which
    /// makes the outcome certain one way or the other.
    pub fn dnf_chance(&self, driver: &Driver) -> f64 {
        self.dnf_base_rate + (100.0 - driver.awareness) * AWARENESS_DNF_WEIGHT
    }

    /// Race score of a finisher. `noise` is the random draw in `[-1, 1]`.
    pub fn score(&self, driver: &Driver, team_performance: f64, track: &Track, noise: f64) -> f64 {
        // pace dominates; the weights sum to 1
        let skill = driver.experience * 0.15
            + driver.racecraft * 0.25
            + driver.awareness * 0.10
            + driver.pace * 0.50;
        let team = team_performance * 0.5;
        let track = track.track_pace_factor * 5.0;
        let noise = noise * (self.randomness * 15.0);

        skill + team + track + noise
    }

    /// Run one race and return the classification, best score first.
    ///
    /// Each driver consumes one draw for the DNF check and, when they finish,
    /// one more for the noise term. Order among several DNFs is unspecified.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        drivers: &[Driver],
        teams: &BTreeMap<String, f64>,
        track: &Track,
    ) -> Result<Vec<RaceResult>, Error> {
        let mut results = Vec::with_capacity(drivers.len());

        for driver in drivers {
            let Some(team_performance) = teams.get(&driver.team).copied() else {
                return Err(Error::UnknownTeam {
                    driver: driver.name.clone(),
                    team: driver.team.clone(),
                });
            };

            let dnf = rng.random::<f64>() < self.dnf_chance(driver);
            let score = if dnf {
                DNF_SCORE
            } else {
                let noise = rng.random_range(-1.0..=1.0);
                self.score(driver, team_performance, track, noise)
            };
            debug!(driver = %driver.name, score, dnf, "classified");

            results.push(RaceResult {
                name: driver.name.clone(),
                team: driver.team.clone(),
                score,
                dnf,
            });
        }

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(results)
    }
}
