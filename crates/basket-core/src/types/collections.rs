//! Collection types for item-level hot paths.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

use super::identifiers::ItemId;

/// Inline item storage for itemsets. Frequent itemsets in basket data rarely
/// exceed four items, so most never allocate.
pub type ItemVec = SmallVec<[ItemId; 4]>;
