//! Writes two synthetic CSV files shaped like the published Fandango
//! datasets, so the analysis can run without downloading them.

use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fandango_ratings::data::model::{AfterRating, PreviousRating};

fn gauss(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.random::<f64>().max(1e-15);
    let u2: f64 = rng.random();
    mean + std_dev * (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

fn half_stars(value: f64, round_up: bool) -> f64 {
    let doubled = value.clamp(0.0, 5.0) * 2.0;
    if round_up { doubled.ceil() / 2.0 } else { doubled.round() / 2.0 }
}

const PREVIOUS_FILE: &str = "fandango_score_comparison.csv";
const AFTER_FILE: &str = "movie_ratings_16_17.csv";

/// Write both sample files into `dir`.
fn write_samples(dir: &Path) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    // Before the analysis: ratings rounded up to the next half star.
    let path = dir.join(PREVIOUS_FILE);
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    for i in 0..146 {
        let year = if rng.random_bool(0.88) { 2015 } else { 2014 };
        let rating_value = (gauss(&mut rng, 3.85, 0.45) * 10.0).round() / 10.0;
        let rating_value = rating_value.clamp(2.5, 5.0);
        let stars = half_stars(rating_value, true);
        writer
            .serialize(PreviousRating {
                film: format!("Movie {i} ({year})"),
                stars,
                rating_value,
                votes: rng.random_range(35..15_000),
                difference: ((stars - rating_value) * 10.0).round() / 10.0,
            })
            .with_context(|| format!("writing {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;

    // After the analysis: ordinary rounding, slightly lower overall.
    let path = dir.join(AFTER_FILE);
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    for i in 0..214 {
        let year = if rng.random_bool(0.89) { 2016 } else { 2017 };
        writer
            .serialize(AfterRating {
                movie: format!("Film {i}"),
                year,
                fandango: half_stars(gauss(&mut rng, 3.85, 0.5), false).max(2.5),
            })
            .with_context(|| format!("writing {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    write_samples(Path::new("."))?;
    println!("Wrote {PREVIOUS_FILE} (146 rows) and {AFTER_FILE} (214 rows)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use fandango_ratings::{run, AnalysisConfig};

    use super::*;

    #[test]
    fn written_samples_load_and_compare() {
        let dir = tempfile::tempdir().unwrap();
        write_samples(dir.path()).unwrap();

        let config = AnalysisConfig {
            previous_path: dir.path().join(PREVIOUS_FILE),
            after_path: dir.path().join(AFTER_FILE),
            ..AnalysisConfig::default()
        };
        let analysis = run(&config).unwrap();
        assert_eq!(analysis.previous_years.values().sum::<usize>(), 146);
        assert_eq!(analysis.after_years.values().sum::<usize>(), 214);
        assert_eq!(analysis.unpopular, 0);
    }

    #[test]
    fn unwritable_directory_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_dir");
        let err = write_samples(&missing).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains(PREVIOUS_FILE), "{message}");
        assert!(message.starts_with("creating"), "{message}");
    }
}
