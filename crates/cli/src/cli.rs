use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::{Path, PathBuf};

/// Season simulator: races every track of a season and prints the
/// championship standings.
///
/// The season document lists drivers, teams, tracks and tuning settings,
/// as JSON or TOML.
#[derive(Debug, Parser, Clone)]
#[command(about, long_about, version)]
pub struct Cli {
    /// Path to the season document.
    #[arg(value_parser = validate_file)]
    pub season: PathBuf,

    /// Seed for the race random stream.
    ///
    /// A random seed is picked (and logged) when omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

/// Check if the file exists.
#[inline(always)]
fn validate_file(file: &str) -> Result<PathBuf, String> {
    let path = Path::new(file);
    if path.is_file() {
        Ok(path.to_owned())
    } else {
        Err(format!("File not found: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;
    use std::ffi::OsStr;

    #[test]
    fn season_path_is_required() {
        let err = Cli::try_parse_from(["season-sim"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_season_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = Cli::try_parse_from([OsStr::new("season-sim"), path.as_os_str()]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn parses_path_and_seed() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let cli = Cli::try_parse_from([
            OsStr::new("season-sim"),
            file.path().as_os_str(),
            OsStr::new("--seed"),
            OsStr::new("42"),
        ])
        .unwrap();
        assert_eq!(cli.season, file.path());
        assert_eq!(cli.seed, Some(42));
    }
}
