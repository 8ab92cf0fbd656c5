use std::ffi::OsString;
use std::path::PathBuf;

use crate::data::model::Year;
use crate::data::sample::POPULAR_MIN_VOTES;

/// Inputs and constants of one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Sample collected before the analysis (`FILM`, `Fandango_*` columns).
    pub previous_path: PathBuf,
    /// Sample collected after the analysis (`movie`, `year`, `fandango`).
    pub after_path: PathBuf,
    pub previous_year: Year,
    pub after_year: Year,
    pub sample_size: usize,
    /// Fixed up front so nobody can shop for a favourable sample.
    pub sample_seed: u64,
    pub popular_min_votes: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            previous_path: PathBuf::from("fandango_score_comparison.csv"),
            after_path: PathBuf::from("movie_ratings_16_17.csv"),
            previous_year: 2015,
            after_year: 2016,
            sample_size: 10,
            sample_seed: 1,
            popular_min_votes: POPULAR_MIN_VOTES,
        }
    }
}

impl AnalysisConfig {
    /// Defaults, with up to two positional arguments replacing the
    /// previous-sample and after-sample paths.  Extra arguments are ignored.
    pub fn from_args(args: impl IntoIterator<Item = OsString>) -> Self {
        let mut config = Self::default();
        let mut args = args.into_iter();
        if let Some(previous) = args.next() {
            config.previous_path = previous.into();
        }
        if let Some(after) = args.next() {
            config.after_path = after.into();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_keeps_defaults() {
        assert_eq!(AnalysisConfig::from_args(Vec::<OsString>::new()), AnalysisConfig::default());
    }

    #[test]
    fn positional_args_replace_paths() {
        let config = AnalysisConfig::from_args([OsString::from("a.csv"), OsString::from("b.csv")]);
        assert_eq!(config.previous_path, PathBuf::from("a.csv"));
        assert_eq!(config.after_path, PathBuf::from("b.csv"));
        assert_eq!(config.sample_seed, 1);

        let config = AnalysisConfig::from_args([OsString::from("only.csv")]);
        assert_eq!(config.previous_path, PathBuf::from("only.csv"));
        assert_eq!(config.after_path, AnalysisConfig::default().after_path);
    }
}
