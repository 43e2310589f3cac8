//! Transaction encoding: raw (transaction, item) records to a dense boolean
//! incidence matrix over a fixed, label-sorted item vocabulary.

pub mod bitset;
pub mod encoder;
pub mod matrix;

pub use bitset::ItemMask;
pub use encoder::{encode, encode_baskets};
pub use matrix::{IncidenceMatrix, Row};
