//! Errors reported by fallible [`Tree`](crate::Tree) operations.

use thiserror::Error;

use crate::Key;

/// Why an insertion or removal did not change the tree. Both are ordinary outcomes and leave the
/// tree exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key is already stored. Keys are unique so nothing was inserted.
    #[error("key {0} is already present")]
    DuplicateKey(Key),

    /// The key is not stored so nothing was removed.
    #[error("key {0} is not present")]
    NotFound(Key),
}
