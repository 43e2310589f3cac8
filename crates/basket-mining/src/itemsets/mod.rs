//! Itemsets and frequent itemsets.

pub mod frequent;
pub mod itemset;

pub use frequent::{FrequentItemSet, SupportTable};
pub use itemset::ItemSet;
