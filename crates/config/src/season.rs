#![forbid(unsafe_code)]

use crate::error::Error;
use crate::model::{Driver, Settings, Track};
use figment::{
    Figment,
    providers::{Format, Json, Toml},
};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashSet},
    ffi::OsStr,
    path::Path,
};
use tracing::debug;

/// Static description of a season: who races, for whom, and where.
///
/// A `Season` obtained through [`Season::load`], [`Season::from_json`] or
/// [`Season::from_toml`] has already passed [`Season::validate`], so every
/// driver's team has a performance rating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Season {
    pub drivers: Vec<Driver>,

    /// Team name to performance rating.
    pub teams: BTreeMap<String, f64>,

    /// Race order is the order of this list.
    pub tracks: Vec<Track>,

    pub settings: Settings,
}

impl Season {
    /// Load a season document. The format is picked from the extension,
    /// either `.json` or `.toml`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_owned()));
        }

        let figment = match path.extension().and_then(OsStr::to_str) {
            Some("json") => Figment::from(Json::file(path)),
            Some("toml") => Figment::from(Toml::file(path)),
            _ => return Err(Error::UnsupportedFormat(path.to_owned())),
        };
        Self::extract(figment)
    }

    pub fn from_json(doc: &str) -> Result<Self, Error> {
        Self::extract(Figment::from(Json::string(doc)))
    }

    pub fn from_toml(doc: &str) -> Result<Self, Error> {
        Self::extract(Figment::from(Toml::string(doc)))
    }

    fn extract(figment: Figment) -> Result<Self, Error> {
        let season: Self = figment.extract()?;
        season.validate()?;
        debug!(
            drivers = season.drivers.len(),
            teams = season.teams.len(),
            tracks = season.tracks.len(),
            "loaded season"
        );
        Ok(season)
    }

    /// Check that driver names are unique and that every driver's team is
    /// known.
    pub fn validate(&self) -> Result<(), Error> {
        let mut seen = HashSet::with_capacity(self.drivers.len());
        for driver in &self.drivers {
            if !seen.insert(driver.name.as_str()) {
                return Err(Error::DuplicateDriver(driver.name.clone()));
            }
            if !self.teams.contains_key(&driver.team) {
                return Err(Error::UnknownTeam {
                    driver: driver.name.clone(),
                    team: driver.team.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn team_performance(&self, team: &str) -> Option<f64> {
        self.teams.get(team).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::io::Write;
    use tempfile::Builder;

    const SEASON_JSON: &str = r#"{
        "drivers": [
            {"name": "Alpha", "team": "Xeno", "experience": 80, "racecraft": 80, "awareness": 90, "pace": 90},
            {"name": "Bravo", "team": "Yotta", "experience": 50, "racecraft": 50, "awareness": 50, "pace": 50}
        ],
        "teams": {"Xeno": 80, "Yotta": 40},
        "tracks": [{"name": "Monza", "track_pace_factor": 5}],
        "settings": {"randomness": 0.0, "dnf_base_rate": 0.0}
    }"#;

    const SEASON_TOML: &str = r#"
        tracks = [{ track = "Monza", track_pace_factor = 5.0 }]

        [[drivers]]
        name = "Alpha"
        team = "Xeno"
        experience = 80.0
        racecraft = 80.0
        awareness = 90.0
        pace = 90.0

        [[drivers]]
        name = "Bravo"
        team = "Yotta"
        experience = 50.0
        racecraft = 50.0
        awareness = 50.0
        pace = 50.0

        [teams]
        Xeno = 80.0
        Yotta = 40.0

        [settings]
        randomness = 0.0
        dnf_base_rate = 0.0
    "#;

    fn driver(name: &str, team: &str) -> Driver {
        Driver {
            name: name.into(),
            team: team.into(),
            experience: 50.0,
            racecraft: 50.0,
            awareness: 50.0,
            pace: 50.0,
        }
    }

    #[test]
    fn json_and_toml_describe_the_same_season() {
        let json = Season::from_json(SEASON_JSON).unwrap();
        let toml = Season::from_toml(SEASON_TOML).unwrap();
        assert_eq!(json, toml);

        assert_eq!(json.drivers[0].name, "Alpha");
        assert_eq!(json.drivers[0].awareness, 90.0);
        assert_eq!(json.team_performance("Xeno"), Some(80.0));
        assert_eq!(json.team_performance("Zulu"), None);
        assert_eq!(json.tracks[0].name, "Monza");
        assert_eq!(json.tracks[0].track_pace_factor, 5.0);
        assert_eq!(json.settings.dnf_base_rate, 0.0);
    }

    #[test]
    fn load_picks_format_from_extension() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(SEASON_JSON.as_bytes()).unwrap();

        let season = Season::load(file.path()).unwrap();
        assert_eq!(season.drivers.len(), 2);
        assert_eq!(season.tracks.len(), 1);
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(SEASON_JSON.as_bytes()).unwrap();

        let err = Season::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)), "{err}");
    }

    #[test]
    fn load_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Season::load(dir.path().join("season.json")).unwrap_err();
        assert!(matches!(err, Error::InvalidPath(_)), "{err}");
    }

    #[test]
    fn missing_top_level_field_fails_extraction() {
        let err = Season::from_json(r#"{"drivers": [], "teams": {}, "tracks": []}"#).unwrap_err();
        assert!(matches!(err, Error::Extract(_)), "{err}");
    }

    #[test]
    fn mistyped_field_fails_extraction() {
        let doc = SEASON_JSON.replace(r#""pace": 50"#, r#""pace": "fast""#);
        let err = Season::from_json(&doc).unwrap_err();
        assert!(matches!(err, Error::Extract(_)), "{err}");
    }

    #[test]
    fn unknown_team_is_rejected() {
        let doc = SEASON_JSON.replace(r#""team": "Yotta""#, r#""team": "Zulu""#);
        let err = Season::from_json(&doc).unwrap_err();
        match err {
            Error::UnknownTeam { driver, team } => {
                assert_eq!(driver, "Bravo");
                assert_eq!(team, "Zulu");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_driver_is_rejected() {
        let season = Season {
            drivers: vec![driver("Alpha", "Xeno"), driver("Alpha", "Xeno")],
            teams: BTreeMap::from([("Xeno".to_string(), 80.0)]),
            tracks: Vec::new(),
            settings: Settings {
                randomness: 0.0,
                dnf_base_rate: 0.0,
            },
        };
        let err = season.validate().unwrap_err();
        assert!(matches!(err, Error::DuplicateDriver(ref name) if name == "Alpha"));
    }

    proptest! {
        #[test]
        fn validate_accepts_exactly_known_teams(
            teams in prop::collection::btree_set("[A-Z][a-z]{2,6}", 1..6),
            picks in prop::collection::vec(any::<prop::sample::Index>(), 0..20),
            stray in "[0-9]{3}",
        ) {
            let teams: Vec<String> = teams.into_iter().collect();
            let mut drivers: Vec<Driver> = picks
                .iter()
                .enumerate()
                .map(|(i, pick)| driver(&format!("driver-{i}"), pick.get::<String>(&teams)))
                .collect();
            let mut season = Season {
                drivers: drivers.clone(),
                teams: teams.iter().map(|t| (t.clone(), 50.0)).collect(),
                tracks: Vec::new(),
                settings: Settings { randomness: 0.5, dnf_base_rate: 0.05 },
            };
            prop_assert!(season.validate().is_ok());

            drivers.push(driver("stray", &stray));
            season.drivers = drivers;
            let is_unknown_team = matches!(season.validate(), Err(Error::UnknownTeam { .. }));
            prop_assert!(is_unknown_team);
        }
    }
}
