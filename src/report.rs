//! Console presentation: frequency tables and the summary comparison.

use std::collections::BTreeMap;
use std::fmt;

use crate::data::model::Year;
use crate::stats::Summary;

/// Row labels of a [`Comparison`], in display order.
pub const STATISTICS: [&str; 3] = ["mean", "median", "mode"];

/// `(a - b) / a`, or `None` when `a` is zero.
pub fn relative_difference(a: f64, b: f64) -> Option<f64> {
    (a != 0.0).then(|| (a - b) / a)
}

/// Two summaries side by side: rows are statistics, columns are samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub labels: [String; 2],
    pub summaries: [Summary; 2],
}

impl Comparison {
    pub fn new(
        first: impl Into<String>,
        first_summary: Summary,
        second: impl Into<String>,
        second_summary: Summary,
    ) -> Self {
        Comparison {
            labels: [first.into(), second.into()],
            summaries: [first_summary, second_summary],
        }
    }

    /// Values of one sample in [`STATISTICS`] order.
    pub fn values(&self, sample: usize) -> [f64; 3] {
        let s = &self.summaries[sample];
        [s.mean, s.median, s.mode]
    }

    /// Relative drop from the first sample to the second, per statistic.
    pub fn relative_differences(&self) -> [Option<f64>; 3] {
        let [a, b] = [self.values(0), self.values(1)];
        [0, 1, 2].map(|i| relative_difference(a[i], b[i]))
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<8}{:>10}{:>10}", "", self.labels[0], self.labels[1])?;
        let [a, b] = [self.values(0), self.values(1)];
        for (i, name) in STATISTICS.iter().enumerate() {
            writeln!(f, "{name:<8}{:>10.6}{:>10.6}", a[i], b[i])?;
        }
        Ok(())
    }
}

/// Percentage frequency table of one sample, printed under a dashed title.
pub struct FrequencyTable<'a> {
    pub title: &'a str,
    pub rows: &'a [(f64, f64)],
}

impl fmt::Display for FrequencyTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n{}", self.title, "-".repeat(16))?;
        for (value, percent) in self.rows {
            writeln!(f, "{value:<6.1}{percent:>10.6}")?;
        }
        Ok(())
    }
}

/// Value counts per year, most frequent first, like a pandas `value_counts`.
pub struct YearCounts<'a>(pub &'a BTreeMap<Year, usize>);

impl fmt::Display for YearCounts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut counts: Vec<(&Year, &usize)> = self.0.iter().collect();
        counts.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        for (year, n) in counts {
            writeln!(f, "{year:<6}{n:>6}")?;
        }
        Ok(())
    }
}
