/// Data layer: core types, loading, filtering and sampling.
///
/// Architecture:
/// ```text
///  scoring .txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ScoringTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ ScoringTable  │  Vec<ScoringRow>
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  valence band → matching indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  sample   │  seeded draw without replacement
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod sample;
