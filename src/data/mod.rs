/// Data layer: typed records, loading, year filtering and sampling.
///
/// Architecture:
/// ```text
///   fandango_score_comparison.csv   movie_ratings_16_17.csv
///              │                              │
///              ▼                              ▼
///        ┌──────────┐                   ┌──────────┐
///        │  loader   │  parse file → Table (inferred column types)
///        └──────────┘                   └──────────┘
///              │ select + records()             │
///              ▼                              ▼
///      Vec<PreviousRating>             Vec<AfterRating>
///              │                              │
///              ▼                              ▼
///        ┌──────────┐                   ┌──────────┐
///        │  filter   │  release year == target → new Vec
///        └──────────┘                   └──────────┘
/// ```
///
/// `sample` draws the fixed-seed spot check and counts unpopular movies;
/// it never feeds back into the filtered data.

pub mod filter;
pub mod loader;
pub mod model;
pub mod sample;
