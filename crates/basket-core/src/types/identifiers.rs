//! Identifier types for items and transactions.
//!
//! `ItemId` is a dense column index into the item vocabulary. It maps 1:1
//! onto the `lasso::Spur` the vocabulary interned the label under, so the two
//! can be converted without a lookup.

use std::fmt;

use lasso::{Key, Spur};
use serde::{Deserialize, Serialize};

/// Column index of an item in the vocabulary.
///
/// Ordering follows the vocabulary, which is sorted by label, so comparing
/// two `ItemId`s compares their labels lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Create an ID from a column index.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Column index as `usize`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The interner key this column was registered under.
    pub fn spur(self) -> Option<Spur> {
        Spur::try_from_usize(self.index())
    }
}

impl From<Spur> for ItemId {
    fn from(spur: Spur) -> Self {
        Self(spur.into_usize() as u32)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a raw transaction as supplied by the data loader.
///
/// Integer ids sort before text ids; within a kind the natural order applies.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionId {
    Int(i64),
    Text(String),
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TransactionId {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for TransactionId {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for TransactionId {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<String> for TransactionId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
