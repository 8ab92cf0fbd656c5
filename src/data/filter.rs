use std::collections::BTreeMap;

use crate::error::{AnalysisError, Result};

use super::model::{AfterRating, PreviousRating, Year};

// ---------------------------------------------------------------------------
// Release year extraction
// ---------------------------------------------------------------------------

/// Parse the release year out of a title such as `"Cinderella (2015)"`.
///
/// The year is the four characters immediately before a trailing `)`.
/// Titles shorter than `"2015)"`, titles without the closing parenthesis,
/// and titles whose four characters are not all digits are rejected.
pub fn title_year(title: &str) -> Result<Year> {
    let malformed = || AnalysisError::MalformedTitle {
        title: title.to_string(),
    };

    let body = title.strip_suffix(')').ok_or_else(malformed)?;
    let digits: Vec<char> = body.chars().rev().take(4).collect();
    if digits.len() < 4 || !digits.iter().all(char::is_ascii_digit) {
        return Err(malformed());
    }
    digits
        .iter()
        .rev()
        .collect::<String>()
        .parse()
        .map_err(|_| malformed())
}

/// A row that knows its release year.
pub trait Dated {
    fn release_year(&self) -> Result<Year>;
}

impl Dated for PreviousRating {
    fn release_year(&self) -> Result<Year> {
        title_year(&self.film)
    }
}

impl Dated for AfterRating {
    fn release_year(&self) -> Result<Year> {
        Ok(self.year)
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Rows released in `year`, in their original order.
///
/// Returns a new vector; `rows` is left as it was.  The first row whose
/// year cannot be determined aborts the filter.
pub fn filter_by_year<R: Dated + Clone>(rows: &[R], year: Year) -> Result<Vec<R>> {
    let mut kept = Vec::new();
    for row in rows {
        if row.release_year()? == year {
            kept.push(row.clone());
        }
    }
    Ok(kept)
}

/// Number of rows per release year.
pub fn year_counts<R: Dated>(rows: &[R]) -> Result<BTreeMap<Year, usize>> {
    let mut counts = BTreeMap::new();
    for row in rows {
        *counts.entry(row.release_year()?).or_insert(0) += 1;
    }
    Ok(counts)
}
