//! Point summaries, frequency tables and density curves over one numeric
//! column.

use std::cmp::Ordering;

use crate::error::{AnalysisError, Result};

/// Mean, median and mode of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    /// Most frequent value; the smallest one on ties.
    pub mode: f64,
}

/// Ascending copy with `-0.0` folded into `0.0`, so equal values form one run.
fn sorted(values: &[f64]) -> Vec<f64> {
    let mut v: Vec<f64> = values
        .iter()
        .map(|&x| if x == 0.0 { 0.0 } else { x })
        .collect();
    v.sort_by(f64::total_cmp);
    v
}

/// Distinct values of an ascending slice with their run lengths.
fn runs(sorted: &[f64]) -> Vec<(f64, usize)> {
    let mut out: Vec<(f64, usize)> = Vec::new();
    for &v in sorted {
        match out.last_mut() {
            Some((last, n)) if last.total_cmp(&v) == Ordering::Equal => *n += 1,
            _ => out.push((v, 1)),
        }
    }
    out
}

fn non_empty<'a>(values: &'a [f64], column: &str) -> Result<&'a [f64]> {
    if values.is_empty() {
        Err(AnalysisError::EmptyColumn {
            column: column.to_string(),
        })
    } else {
        Ok(values)
    }
}

/// Compute mean, median and mode of `values`.
///
/// `column` only names the data in the [`AnalysisError::EmptyColumn`] error.
pub fn summarize(values: &[f64], column: &str) -> Result<Summary> {
    let values = non_empty(values, column)?;
    let sorted = sorted(values);
    let n = sorted.len();

    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    // `runs` is ascending; a later run only wins with a strictly higher
    // count, so ties keep the smallest value.
    let counts = runs(&sorted);
    let (mode, _) = counts[1..]
        .iter()
        .fold(counts[0], |best, &run| if run.1 > best.1 { run } else { best });

    Ok(Summary { mean, median, mode })
}

/// Share of each distinct value, in percent, sorted by value.
pub fn relative_frequencies(values: &[f64], column: &str) -> Result<Vec<(f64, f64)>> {
    let values = non_empty(values, column)?;
    let total = values.len() as f64;
    Ok(runs(&sorted(values))
        .into_iter()
        .map(|(value, count)| (value, count as f64 / total * 100.0))
        .collect())
}

// ---------------------------------------------------------------------------
// Kernel density estimate
// ---------------------------------------------------------------------------

/// Sample standard deviation (n - 1 denominator).
fn std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
}

/// Scott's rule bandwidth: `σ · n^(-1/5)`.
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let h = std_dev(values) * (values.len() as f64).powf(-0.2);
    (h.is_finite() && h > 0.0).then_some(h)
}

/// `points` evenly spaced values from `lo` to `hi` inclusive.
pub fn linspace(lo: f64, hi: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let last = (points - 1) as f64;
            (0..points)
                .map(|i| lo + (hi - lo) * i as f64 / last)
                .collect()
        }
    }
}

/// Gaussian kernel density estimate of `values`, evaluated at `grid`.
///
/// Returns `None` when the density is undefined (fewer than two values, or
/// every value identical).
pub fn kde_curve(values: &[f64], grid: &[f64], column: &str) -> Result<Option<Vec<[f64; 2]>>> {
    let values = non_empty(values, column)?;
    let Some(h) = scott_bandwidth(values) else {
        return Ok(None);
    };
    let norm = 1.0 / (values.len() as f64 * h * (2.0 * std::f64::consts::PI).sqrt());
    Ok(Some(
        grid.iter()
            .map(|&x| {
                let density: f64 = values
                    .iter()
                    .map(|&v| (-0.5 * ((x - v) / h).powi(2)).exp())
                    .sum();
                [x, density * norm]
            })
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARS: [f64; 6] = [5.0, 5.0, 4.5, 4.5, 4.5, 4.0];

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn summarizes_star_ratings() {
        let s = summarize(&STARS, "stars").unwrap();
        assert_eq!(s.mode, 4.5);
        assert_eq!(s.median, 4.5);
        assert!(close(s.mean, 27.5 / 6.0), "{}", s.mean);
    }

    #[test]
    fn signed_zeros_are_one_value() {
        let freq = relative_frequencies(&[0.0, -0.0, 1.0], "x").unwrap();
        assert_eq!(freq.len(), 2);
        assert_eq!(freq[0].0, 0.0);
        assert!(close(freq[0].1, 200.0 / 3.0));

        let s = summarize(&[1.0, -0.0, 0.0], "x").unwrap();
        assert_eq!(s.mode, 0.0);
        assert!(s.mode.is_sign_positive());
    }

    #[test]
    fn single_value_is_its_own_mode() {
        let s = summarize(&[3.5], "x").unwrap();
        assert_eq!(s, Summary { mean: 3.5, median: 3.5, mode: 3.5 });
    }

    #[test]
    fn odd_length_median() {
        let s = summarize(&[3.0, 1.0, 2.0], "x").unwrap();
        assert_eq!(s.median, 2.0);
    }

    #[test]
    fn mode_tie_takes_smallest_value() {
        let s = summarize(&[4.0, 3.5, 4.0, 3.5, 5.0], "x").unwrap();
        assert_eq!(s.mode, 3.5);
        let s = summarize(&[2.0, 1.0], "x").unwrap();
        assert_eq!(s.mode, 1.0);
    }

    #[test]
    fn summary_ignores_row_order() {
        let base = summarize(&STARS, "x").unwrap();
        let mut rotated = STARS;
        for _ in 0..STARS.len() {
            rotated.rotate_left(1);
            assert_eq!(summarize(&rotated, "x").unwrap(), base);
        }
        let mut reversed = STARS;
        reversed.reverse();
        assert_eq!(summarize(&reversed, "x").unwrap(), base);
    }

    #[test]
    fn empty_column_errors() {
        assert!(matches!(
            summarize(&[], "fandango"),
            Err(AnalysisError::EmptyColumn { column }) if column == "fandango"
        ));
        assert!(relative_frequencies(&[], "x").is_err());
        assert!(kde_curve(&[], &[0.0], "x").is_err());
    }

    #[test]
    fn frequencies_are_sorted_percentages() {
        let freq = relative_frequencies(&STARS, "x").unwrap();
        let values: Vec<f64> = freq.iter().map(|&(v, _)| v).collect();
        assert_eq!(values, [4.0, 4.5, 5.0]);
        assert!(close(freq[1].1, 50.0));

        let total: f64 = freq.iter().map(|&(_, p)| p).sum();
        assert!((total - 100.0).abs() < 1e-6);
    }

    #[test]
    fn frequencies_sum_to_100_for_awkward_counts() {
        let values: Vec<f64> = (0..97).map(|i| (i % 7) as f64 * 0.5).collect();
        let total: f64 = relative_frequencies(&values, "x")
            .unwrap()
            .iter()
            .map(|&(_, p)| p)
            .sum();
        assert!((total - 100.0).abs() < 1e-6 * 100.0);
    }

    #[test]
    fn linspace_includes_both_ends() {
        let g = linspace(0.0, 5.0, 11);
        assert_eq!(g.len(), 11);
        assert_eq!(g[0], 0.0);
        assert!(close(g[10], 5.0));
        assert!(close(g[1], 0.5));
    }

    #[test]
    fn kde_integrates_to_about_one() {
        let values = [3.0, 3.5, 4.0, 4.0, 4.5, 4.5, 4.5, 5.0];
        let grid = linspace(-2.0, 10.0, 2001);
        let curve = kde_curve(&values, &grid, "x").unwrap().unwrap();
        let dx = grid[1] - grid[0];
        let area: f64 = curve.iter().map(|p| p[1] * dx).sum();
        assert!((area - 1.0).abs() < 1e-3, "{area}");
        // Peak sits near the mode.
        let peak = curve
            .iter()
            .max_by(|a, b| a[1].total_cmp(&b[1]))
            .unwrap();
        assert!((peak[0] - 4.3).abs() < 0.5, "{peak:?}");
    }

    #[test]
    fn kde_is_undefined_without_spread() {
        assert_eq!(kde_curve(&[4.0], &[4.0], "x").unwrap(), None);
        assert_eq!(kde_curve(&[4.0, 4.0, 4.0], &[4.0], "x").unwrap(), None);
    }
}
