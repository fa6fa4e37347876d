use crate::Key;

/// What happened when a key was unlinked from the subtree owned by a slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum DeleteResult {
    /// The key wasn't found so nothing was deleted.
    NotFound,
    /// The matched node had no children. Its slot is now empty.
    Detached,
    /// The matched node had exactly one child which now occupies its slot.
    Spliced,
    /// The matched node had two children. It stays in place holding its in-order successor's key
    /// and the successor was unlinked from the right subtree.
    Replaced {
        /// The key that moved up into the matched node.
        successor: Key,
    },
}
