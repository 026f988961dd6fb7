#![deny(missing_docs)]

//! Separate-chaining hash table.
//!
//! # chaintable::HashTable
//! A key-value container that resolves collisions with per-bucket chains and doubles its
//! bucket array whenever the load factor exceeds `0.7`.
//!
//! # chaintable::have_same_elements
//! An order-independent comparison of two sequences, handy for checking
//! [`HashTable::values`].
//!
//! ## Cargo features
//!
//! * `serde`: implements `Serialize` and `Deserialize` for [`HashTable`].
//! * `logging`: emits a `debug` record through the `log` crate whenever a [`HashTable`] is
//!   resized.

pub use equivalent::Equivalent;

mod error;
pub use error::Error;

pub mod hash_table;
pub use hash_table::{have_same_elements, HashTable, DEFAULT_CAPACITY, LOAD_FACTOR_THRESHOLD};

#[cfg(feature = "serde")]
mod serde;
