//! The full comparison run: load, select, filter, spot-check, summarize.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::AnalysisConfig;
use crate::data::filter::{filter_by_year, year_counts, Dated};
use crate::data::loader::load_csv;
use crate::data::model::{AfterRating, PreviousRating, Year};
use crate::data::sample::{count_unpopular, sample_rows};
use crate::error::Result;
use crate::report::{Comparison, FrequencyTable, YearCounts, STATISTICS};
use crate::stats::{kde_curve, linspace, relative_frequencies, summarize, Summary};

/// Star ratings live on a 0–5 scale.
pub const STAR_RANGE: (f64, f64) = (0.0, 5.0);
const DENSITY_POINTS: usize = 501;

/// Everything computed for one year's ratings.
#[derive(Debug, Clone)]
pub struct YearSample {
    pub label: String,
    pub year: Year,
    /// Name of the rating column the values came from.
    pub column: &'static str,
    /// Release years left after filtering; a single entry for `year`.
    pub years: BTreeMap<Year, usize>,
    pub ratings: Vec<f64>,
    /// `(stars, percent)` sorted by stars.
    pub frequencies: Vec<(f64, f64)>,
    pub summary: Summary,
    /// `None` when the ratings have no spread to estimate a density from.
    pub density: Option<Vec<[f64; 2]>>,
}

impl YearSample {
    fn new<R: Dated>(
        year: Year,
        column: &'static str,
        rows: &[R],
        rating: impl Fn(&R) -> f64,
    ) -> Result<Self> {
        let years = year_counts(rows)?;
        let ratings: Vec<f64> = rows.iter().map(rating).collect();
        let frequencies = relative_frequencies(&ratings, column)?;
        let summary = summarize(&ratings, column)?;
        let grid = linspace(STAR_RANGE.0, STAR_RANGE.1, DENSITY_POINTS);
        let density = kde_curve(&ratings, &grid, column)?;
        if density.is_none() {
            log::warn!("{year}: {column} has no spread, skipping density curve");
        }
        Ok(YearSample {
            label: year.to_string(),
            year,
            column,
            years,
            ratings,
            frequencies,
            summary,
            density,
        })
    }
}

/// Result of a full run, ready to print or plot.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Release years in the previous sample, before filtering.
    pub previous_years: BTreeMap<Year, usize>,
    /// Release years in the after sample, before filtering.
    pub after_years: BTreeMap<Year, usize>,
    pub min_votes: u32,
    /// Movies in the previous sample below the popularity threshold.
    pub unpopular: usize,
    /// Fixed-seed rows of the after sample to check by hand on the website.
    pub spot_check: Vec<AfterRating>,
    pub samples: [YearSample; 2],
    pub comparison: Comparison,
}

/// Run the comparison described by `config`.  Any error aborts the run.
pub fn run(config: &AnalysisConfig) -> Result<Analysis> {
    let previous: Vec<PreviousRating> = load_csv(&config.previous_path)?.records()?;
    let after: Vec<AfterRating> = load_csv(&config.after_path)?.records()?;
    log::info!(
        "loaded {} previous and {} after ratings",
        previous.len(),
        after.len()
    );

    let spot_check = sample_rows(&after, config.sample_size, config.sample_seed)?;

    let unpopular = count_unpopular(&previous, config.popular_min_votes);
    if unpopular > 0 {
        log::warn!(
            "{unpopular} movies in {} have fewer than {} votes",
            config.previous_path.display(),
            config.popular_min_votes
        );
    }

    let previous_years = year_counts(&previous)?;
    let after_years = year_counts(&after)?;

    let first = filter_by_year(&previous, config.previous_year)?;
    let second = filter_by_year(&after, config.after_year)?;
    log::info!(
        "{} movies released in {}, {} in {}",
        first.len(),
        config.previous_year,
        second.len(),
        config.after_year
    );

    let first = YearSample::new(config.previous_year, "Fandango_Stars", &first, |r| r.stars)?;
    let second = YearSample::new(config.after_year, "fandango", &second, |r| r.fandango)?;
    let comparison = Comparison::new(
        first.label.clone(),
        first.summary,
        second.label.clone(),
        second.summary,
    );

    Ok(Analysis {
        previous_years,
        after_years,
        min_votes: config.popular_min_votes,
        unpopular,
        spot_check,
        samples: [first, second],
        comparison,
    })
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Spot-check sample ({} movies):", self.spot_check.len())?;
        for r in &self.spot_check {
            writeln!(f, "  {:<45}{:>6}{:>6.1}", r.movie, r.year, r.fandango)?;
        }
        writeln!(
            f,
            "\nMovies with fewer than {} votes: {}\n",
            self.min_votes, self.unpopular
        )?;

        writeln!(f, "Release years, previous sample:\n{}", YearCounts(&self.previous_years))?;
        writeln!(f, "Release years, after sample:\n{}", YearCounts(&self.after_years))?;

        for sample in &self.samples {
            writeln!(
                f,
                "Release years after filtering to {}:\n{}",
                sample.year,
                YearCounts(&sample.years)
            )?;
        }

        for sample in &self.samples {
            writeln!(
                f,
                "{}",
                FrequencyTable {
                    title: &sample.label,
                    rows: &sample.frequencies,
                }
            )?;
        }

        writeln!(f, "{}", self.comparison)?;
        for (name, diff) in STATISTICS.iter().zip(self.comparison.relative_differences()) {
            match diff {
                Some(d) => writeln!(
                    f,
                    "{name} change {} -> {}: {:+.2}%",
                    self.comparison.labels[0],
                    self.comparison.labels[1],
                    -d * 100.0
                )?,
                None => writeln!(f, "{name} change: undefined (zero baseline)")?,
            }
        }
        Ok(())
    }
}
