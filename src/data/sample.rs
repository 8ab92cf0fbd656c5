use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::error::{AnalysisError, Result};

use super::model::PreviousRating;

/// Fan ratings a movie needs on Fandango to count as popular.
pub const POPULAR_MIN_VOTES: u32 = 30;

/// Draw `n` rows without replacement for a manual spot check.
///
/// The same `seed`, rows and `n` always give the same rows in the same
/// order.  The input is not modified.
pub fn sample_rows<R: Clone>(rows: &[R], n: usize, seed: u64) -> Result<Vec<R>> {
    if n > rows.len() {
        return Err(AnalysisError::SampleTooLarge {
            requested: n,
            available: rows.len(),
        });
    }
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(index::sample(&mut rng, rows.len(), n)
        .into_iter()
        .map(|i| rows[i].clone())
        .collect())
}

/// Number of movies with fewer than `min_votes` fan ratings.
pub fn count_unpopular(rows: &[PreviousRating], min_votes: u32) -> usize {
    rows.iter().filter(|r| r.votes < min_votes).count()
}
