/// Data layer: core types, loading, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse source → Vec<Record>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ aggregate │  counts, average, per-label groups
///   └──────────┘
///        │
///        ▼
///   AggregateView (consumed read-only by the UI)
/// ```
pub mod aggregate;
pub mod loader;
pub mod model;
