//! Data structures and identifiers shared across the basket crates.
//! FxHashMap, ItemVec, lasso-backed item interning, transaction ids, metrics.

pub mod collections;
pub mod identifiers;
pub mod interning;
pub mod metric;

pub use collections::{FxHashMap, FxHashSet, ItemVec};
pub use identifiers::{ItemId, TransactionId};
pub use interning::ItemInterner;
pub use metric::RuleMetric;
