/// Data layer: core types, ingestion, and derived series.
///
/// Architecture:
/// ```text
///        .csv
///         │
///         ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///         │
///         ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<RowRecord>, ordered schema
///   └──────────┘
///         │
///         ├──────────────────┐
///         ▼                  ▼
///   ┌──────────┐      ┌──────────┐
///   │ forecast  │      │ metrics   │
///   │ per-row   │      │ static    │
///   │ series    │      │ table     │
///   └──────────┘      └──────────┘
/// ```

pub mod forecast;
pub mod loader;
pub mod metrics;
pub mod model;
