use crate::Error;
use crate::points::{Tally, apply_constructor_points, apply_driver_points, race_total};
use crate::race::{RaceResult, RaceSimulator};
use config::{Season, Track};
use itertools::Itertools;
use rand::Rng;
use tracing::info;

/// Running championship totals while the season is in progress.
///
/// Every driver and team of the season starts with an entry at zero, so
/// awarding points never has to create one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Standings {
    drivers: Tally,
    constructors: Tally,
}

impl Standings {
    pub fn new(season: &Season) -> Self {
        Self {
            drivers: season
                .drivers
                .iter()
                .map(|driver| (driver.name.clone(), 0))
                .collect(),
            constructors: season.teams.keys().map(|team| (team.clone(), 0)).collect(),
        }
    }

    /// Fold one race classification into the totals.
    pub fn apply(mut self, results: &[RaceResult]) -> Result<Self, Error> {
        apply_driver_points(&mut self.drivers, results)?;
        apply_constructor_points(&mut self.constructors, results)?;
        Ok(self)
    }

    pub fn drivers(&self) -> &Tally {
        &self.drivers
    }

    pub fn constructors(&self) -> &Tally {
        &self.constructors
    }

    /// Close the season. The returned totals can no longer change.
    pub fn complete(self) -> FinalStandings {
        FinalStandings {
            drivers: self.drivers,
            constructors: self.constructors,
        }
    }
}

/// Championship totals after the last race.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalStandings {
    drivers: Tally,
    constructors: Tally,
}

impl FinalStandings {
    pub fn drivers(&self) -> &Tally {
        &self.drivers
    }

    pub fn constructors(&self) -> &Tally {
        &self.constructors
    }

    /// Drivers by descending points. Ties keep name order.
    pub fn ranked_drivers(&self) -> Vec<(&str, u32)> {
        rank(&self.drivers)
    }

    /// Teams by descending points. Ties keep name order.
    pub fn ranked_constructors(&self) -> Vec<(&str, u32)> {
        rank(&self.constructors)
    }
}

fn rank(tally: &Tally) -> Vec<(&str, u32)> {
    tally
        .iter()
        .map(|(name, points)| (name.as_str(), *points))
        .sorted_by(|a, b| b.1.cmp(&a.1))
        .collect()
}

/// What happened in one round.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceReport {
    /// 1-based round number.
    pub round: usize,
    pub track: String,
    /// `None` when nobody finished.
    pub winner: Option<String>,
    pub dnfs: usize,
    pub points_awarded: u32,
}

impl RaceReport {
    fn new(round: usize, track: &Track, results: &[RaceResult]) -> Self {
        Self {
            round,
            track: track.name.clone(),
            winner: results
                .first()
                .filter(|result| !result.dnf)
                .map(|result| result.name.clone()),
            dnfs: results.iter().filter(|result| result.dnf).count(),
            points_awarded: race_total(results),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonSummary {
    pub standings: FinalStandings,
    /// One entry per track, in race order.
    pub races: Vec<RaceReport>,
}

/// Simulate every track of `season` in order and total the points.
///
/// `rng` is the only source of randomness; seeding it fixes the outcome.
/// The first failing race aborts the season and no standings are returned.
pub fn run_season<R: Rng + ?Sized>(season: &Season, rng: &mut R) -> Result<SeasonSummary, Error> {
    let simulator = RaceSimulator::new(&season.settings);
    let mut races = Vec::with_capacity(season.tracks.len());

    let standings = season.tracks.iter().enumerate().try_fold(
        Standings::new(season),
        |standings, (index, track)| {
            let round = index + 1;
            let span = tracing::info_span!("round", round, track = %track.name);
            let _enter = span.enter();

            let results = simulator.simulate(rng, &season.drivers, &season.teams, track)?;
            let report = RaceReport::new(round, track, &results);
            info!(
                winner = report.winner.as_deref().unwrap_or("-"),
                dnfs = report.dnfs,
                points = report.points_awarded,
                "race complete"
            );
            races.push(report);

            standings.apply(&results)
        },
    )?;

    Ok(SeasonSummary {
        standings: standings.complete(),
        races,
    })
}
