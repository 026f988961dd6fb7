#![allow(clippy::module_name_repetitions)]

/// [`Error`] types returned by [`HashTable`](crate::HashTable) operations.
#[derive(thiserror::Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// InvalidCapacity: the requested number of buckets is less than one.
    #[error("capacity must be a positive number, got {0}")]
    InvalidCapacity(usize),
    /// KeyNotFound: no entry with the given key exists.
    #[error("key not found")]
    KeyNotFound,
    /// EmptyTable: an entry was requested from an empty table.
    #[error("hash table is empty")]
    EmptyTable,
}
