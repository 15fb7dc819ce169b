/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  https://… / local .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  download → cache file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, site / category index
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  (site, payload range) → pie summary / scatter rows
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
