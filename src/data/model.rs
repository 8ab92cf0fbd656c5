use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{AnalysisError, Result};

/// A release year, either parsed from a title or read from a column.
pub type Year = u16;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, as read from a delimited file.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

// ---------------------------------------------------------------------------
// ColumnType – inferred once per column from all of its cells
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Text,
}

impl ColumnType {
    /// Narrowest type that every non-empty cell parses as.  Non-finite
    /// floats (`NaN`, `inf`) are not numbers here.
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a str>) -> Self {
        let mut ty = ColumnType::Integer;
        for cell in cells {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            if ty == ColumnType::Integer && cell.parse::<i64>().is_ok() {
                continue;
            }
            match cell.parse::<f64>() {
                Ok(v) if v.is_finite() => ty = ColumnType::Float,
                _ => return ColumnType::Text,
            }
        }
        ty
    }

    fn parse(self, cell: &str) -> CellValue {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return CellValue::Null;
        }
        match self {
            ColumnType::Integer => trimmed
                .parse()
                .map(CellValue::Integer)
                .unwrap_or_else(|_| CellValue::Text(cell.to_string())),
            ColumnType::Float => trimmed
                .parse()
                .map(CellValue::Float)
                .unwrap_or_else(|_| CellValue::Text(cell.to_string())),
            ColumnType::Text => CellValue::Text(cell.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the loader's untyped output
// ---------------------------------------------------------------------------

/// Rows of named columns, with one inferred type per column.
///
/// A table is never modified after construction: [`Table::select`] and
/// [`Table::records`] always build new, independently owned values.
#[derive(Debug, Clone)]
pub struct Table {
    source: PathBuf,
    columns: Vec<String>,
    types: Vec<ColumnType>,
    rows: Vec<Vec<CellValue>>,
    /// Cells exactly as read, for text fields and error messages.
    raw: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from raw text cells, inferring each column's type.
    ///
    /// Every row must have exactly one cell per column.
    pub fn from_text_rows(
        source: impl Into<PathBuf>,
        columns: Vec<String>,
        raw_rows: Vec<Vec<String>>,
    ) -> Result<Self> {
        let source = source.into();
        if let Some((row_no, row)) = raw_rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != columns.len())
        {
            return Err(AnalysisError::Parse {
                path: source,
                detail: format!(
                    "row {} has {} fields but the header has {}",
                    row_no + 1,
                    row.len(),
                    columns.len()
                ),
            });
        }

        let types: Vec<ColumnType> = (0..columns.len())
            .map(|col| ColumnType::infer(raw_rows.iter().map(|row| row[col].as_str())))
            .collect();

        let rows = raw_rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&types)
                    .map(|(cell, ty)| ty.parse(cell))
                    .collect()
            })
            .collect();

        Ok(Table {
            source,
            columns,
            types,
            rows,
            raw: raw_rows,
        })
    }

    /// File the table was read from (used in error messages).
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_types(&self) -> &[ColumnType] {
        &self.types
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column, or [`AnalysisError::MissingColumn`].
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| AnalysisError::MissingColumn {
                column: name.to_string(),
                available: self.columns.clone(),
            })
    }

    /// Project onto `names`, in that order, keeping every row in place.
    pub fn select(&self, names: &[&str]) -> Result<Table> {
        let indices = names
            .iter()
            .map(|name| self.column_index(name))
            .collect::<Result<Vec<_>>>()?;

        Ok(Table {
            source: self.source.clone(),
            columns: names.iter().map(|n| n.to_string()).collect(),
            types: indices.iter().map(|&i| self.types[i]).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
                .collect(),
            raw: self
                .raw
                .iter()
                .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        })
    }

    /// Select `R::COLUMNS` and convert every row into an `R`.
    pub fn records<R: Record>(&self) -> Result<Vec<R>> {
        let selected = self.select(R::COLUMNS)?;
        (0..selected.len())
            .map(|index| {
                R::from_row(RowView {
                    table: &selected,
                    index,
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Typed records
// ---------------------------------------------------------------------------

/// A statically typed row shape.
///
/// `from_row` receives a row of a table already projected onto `COLUMNS`,
/// so field `i` of the record is always cell `i` of the view.
pub trait Record: Sized {
    const COLUMNS: &'static [&'static str];

    fn from_row(row: RowView<'_>) -> Result<Self>;
}

/// Borrowed access to one row, with typed getters that report the row
/// number and column name on mismatch.
#[derive(Clone, Copy)]
pub struct RowView<'a> {
    table: &'a Table,
    index: usize,
}

impl RowView<'_> {
    fn cell(&self, col: usize) -> Result<&CellValue> {
        match &self.table.rows[self.index][col] {
            CellValue::Null => Err(self.mismatch(col, "a value")),
            cell => Ok(cell),
        }
    }

    fn raw(&self, col: usize) -> &str {
        &self.table.raw[self.index][col]
    }

    fn mismatch(&self, col: usize, expected: &str) -> AnalysisError {
        AnalysisError::Parse {
            path: self.table.source.clone(),
            detail: format!(
                "row {}, column '{}': expected {expected}, found '{}'",
                self.index + 1,
                self.table.columns[col],
                self.raw(col)
            ),
        }
    }

    /// The cell as written in the file, whatever the column's type.
    pub fn text(&self, col: usize) -> Result<String> {
        self.cell(col)?;
        Ok(self.raw(col).to_string())
    }

    pub fn float(&self, col: usize) -> Result<f64> {
        match self.cell(col)? {
            CellValue::Float(v) => Ok(*v),
            CellValue::Integer(i) => Ok(*i as f64),
            _ => Err(self.mismatch(col, "a number")),
        }
    }

    pub fn integer(&self, col: usize) -> Result<i64> {
        match self.cell(col)? {
            CellValue::Integer(i) => Ok(*i),
            _ => Err(self.mismatch(col, "an integer")),
        }
    }

    /// Integer that must fit `T` (e.g. a non-negative count).
    pub fn integer_as<T: TryFrom<i64>>(&self, col: usize, expected: &str) -> Result<T> {
        let value = self.integer(col)?;
        T::try_from(value).map_err(|_| self.mismatch(col, expected))
    }
}

/// One film from the sample collected before the August 2015 analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviousRating {
    /// Title with the release year in parentheses, e.g. `"Cinderella (2015)"`.
    #[serde(rename = "FILM")]
    pub film: String,
    /// Displayed star rating, 0–5 in half-star steps.
    #[serde(rename = "Fandango_Stars")]
    pub stars: f64,
    /// Rating value hidden in the page HTML, two decimals.
    #[serde(rename = "Fandango_Ratingvalue")]
    pub rating_value: f64,
    #[serde(rename = "Fandango_votes")]
    pub votes: u32,
    /// `stars - rating_value`: how much the display rounds up.
    #[serde(rename = "Fandango_Difference")]
    pub difference: f64,
}

impl Record for PreviousRating {
    const COLUMNS: &'static [&'static str] = &[
        "FILM",
        "Fandango_Stars",
        "Fandango_Ratingvalue",
        "Fandango_votes",
        "Fandango_Difference",
    ];

    fn from_row(row: RowView<'_>) -> Result<Self> {
        Ok(PreviousRating {
            film: row.text(0)?,
            stars: row.float(1)?,
            rating_value: row.float(2)?,
            votes: row.integer_as(3, "a non-negative vote count")?,
            difference: row.float(4)?,
        })
    }
}

/// One film from the 2016–2017 sample collected after the analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AfterRating {
    pub movie: String,
    pub year: Year,
    pub fandango: f64,
}

impl Record for AfterRating {
    const COLUMNS: &'static [&'static str] = &["movie", "year", "fandango"];

    fn from_row(row: RowView<'_>) -> Result<Self> {
        Ok(AfterRating {
            movie: row.text(0)?,
            year: row.integer_as(1, "a release year")?,
            fandango: row.float(2)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
        Table::from_text_rows(
            "test.csv",
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn infers_one_type_per_column() {
        let t = table(
            &["name", "count", "score", "mixed"],
            &[&["a", "1", "1", "2"], &["b", "", "2.5", "x"], &["c", "3", "4", "3"]],
        );
        assert_eq!(
            t.column_types(),
            &[
                ColumnType::Text,
                ColumnType::Integer,
                ColumnType::Float,
                ColumnType::Text
            ]
        );
        assert_eq!(t.rows()[1][1], CellValue::Null);
        assert_eq!(t.rows()[0][2], CellValue::Float(1.0));
    }

    #[test]
    fn nan_is_not_numeric() {
        assert_eq!(ColumnType::infer(["1.5", "NaN"]), ColumnType::Text);
        assert_eq!(ColumnType::infer(["inf"]), ColumnType::Text);
        assert_eq!(ColumnType::infer(["", " 7 "]), ColumnType::Integer);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Table::from_text_rows(
            "bad.csv",
            vec!["a".into(), "b".into()],
            vec![vec!["1".into()]],
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::Parse { .. }));
    }

    #[test]
    fn select_projects_columns_in_requested_order() {
        let t = table(
            &["a", "b", "c"],
            &[&["1", "x", "2.0"], &["3", "y", "4.5"], &["5", "z", "6"]],
        );
        let s = t.select(&["c", "a"]).unwrap();

        assert_eq!(s.columns(), &["c".to_string(), "a".to_string()]);
        assert_eq!(s.len(), t.len());
        for (src, dst) in t.rows().iter().zip(s.rows()) {
            assert_eq!(dst, &vec![src[2].clone(), src[0].clone()]);
        }
        // The source is untouched.
        assert_eq!(t.columns().len(), 3);
    }

    #[test]
    fn select_reports_missing_column() {
        let t = table(&["a"], &[&["1"]]);
        match t.select(&["a", "nope"]) {
            Err(AnalysisError::MissingColumn { column, available }) => {
                assert_eq!(column, "nope");
                assert_eq!(available, vec!["a".to_string()]);
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn converts_rows_into_previous_ratings() {
        let t = table(
            &[
                "FILM",
                "RottenTomatoes",
                "Fandango_Stars",
                "Fandango_Ratingvalue",
                "Fandango_votes",
                "Fandango_Difference",
            ],
            &[&["Cinderella (2015)", "85", "5.0", "4.5", "12640", "0.5"]],
        );
        let records: Vec<PreviousRating> = t.records().unwrap();
        assert_eq!(
            records,
            vec![PreviousRating {
                film: "Cinderella (2015)".into(),
                stars: 5.0,
                rating_value: 4.5,
                votes: 12640,
                difference: 0.5,
            }]
        );
    }

    #[test]
    fn negative_votes_are_a_parse_error() {
        let t = table(
            &[
                "FILM",
                "Fandango_Stars",
                "Fandango_Ratingvalue",
                "Fandango_votes",
                "Fandango_Difference",
            ],
            &[&["Up (2009)", "4", "4", "-3", "0"]],
        );
        let err = t.records::<PreviousRating>().unwrap_err();
        match err {
            AnalysisError::Parse { detail, .. } => {
                assert!(detail.contains("Fandango_votes"), "{detail}");
                assert!(detail.contains("row 1"), "{detail}");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn numeric_looking_titles_keep_their_text() {
        let t = table(
            &["movie", "year", "fandango"],
            &[&["007", "2016", "4"], &["1.50", "2016", "3.5"]],
        );
        let titles: Vec<String> = t
            .records::<AfterRating>()
            .unwrap()
            .into_iter()
            .map(|r| r.movie)
            .collect();
        assert_eq!(titles, ["007", "1.50"]);
    }

    #[test]
    fn parse_error_quotes_the_cell_as_written() {
        let t = table(
            &["movie", "year", "fandango"],
            &[&["Arrival", "2016.0", "4"], &["Split", "2016", "3.5"]],
        );
        match t.records::<AfterRating>() {
            Err(AnalysisError::Parse { detail, .. }) => {
                assert!(detail.contains("found '2016.0'"), "{detail}");
                assert!(detail.contains("column 'year'"), "{detail}");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn text_in_rating_column_is_a_parse_error() {
        let t = table(
            &["movie", "year", "fandango"],
            &[&["Arrival", "2016", "4"], &["Split", "2016", "n/a"]],
        );
        assert!(matches!(
            t.records::<AfterRating>(),
            Err(AnalysisError::Parse { .. })
        ));
    }
}
