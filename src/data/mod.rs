/// Data layer: core types, loading, filtering, and export.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, header order
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  column == value, first N matches
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  Dataset → file
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
