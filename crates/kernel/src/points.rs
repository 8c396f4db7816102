use crate::Error;
use crate::race::RaceResult;
use std::collections::BTreeMap;

/// Points awarded by finishing position, winner first.
pub const POINTS_TABLE: [u32; 11] = [25, 18, 15, 12, 10, 8, 6, 4, 3, 2, 1];

/// Cumulative points keyed by driver or team name.
pub type Tally = BTreeMap<String, u32>;

/// Points for a 0-based finishing position. A DNF never scores.
#[inline]
pub fn points_for(rank: usize, dnf: bool) -> u32 {
    if dnf {
        return 0;
    }
    POINTS_TABLE.get(rank).copied().unwrap_or(0)
}

/// Total points handed out for one ranked race.
pub fn race_total(results: &[RaceResult]) -> u32 {
    results
        .iter()
        .enumerate()
        .map(|(rank, result)| points_for(rank, result.dnf))
        .sum()
}

/// Add each driver's points for this race to their running total.
pub fn apply_driver_points(tally: &mut Tally, results: &[RaceResult]) -> Result<(), Error> {
    award(tally, results, |result| result.name.as_str())
}

/// Add each finisher's points to their team's running total.
pub fn apply_constructor_points(tally: &mut Tally, results: &[RaceResult]) -> Result<(), Error> {
    award(tally, results, |result| result.team.as_str())
}

fn award(
    tally: &mut Tally,
    results: &[RaceResult],
    key: impl Fn(&RaceResult) -> &str,
) -> Result<(), Error> {
    for (rank, result) in results.iter().enumerate() {
        let name = key(result);
        let total = tally
            .get_mut(name)
            .ok_or_else(|| Error::MissingStanding(name.to_owned()))?;
        *total += points_for(rank, result.dnf);
    }
    Ok(())
}
