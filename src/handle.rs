//! A handle-based surface over [`Tree`] for callers that pass trees around as optional handles.
//!
//! Every function accepts an absent handle (`None`) and treats it as an empty tree: lookups miss,
//! mutations fail and teardown is a no-op. [`find_min`] and [`find_max`] keep the historical
//! contract of returning `0` for an absent or empty tree, which can't be told apart from a stored
//! `0`. Prefer [`Tree::min`] and [`Tree::max`] when that matters.
//!
//! # Examples
//!
//! ```
//! use ordtree::handle;
//!
//! let mut tree = handle::create();
//! for key in [7, 2, 11, 9, 1] {
//!     assert!(handle::insert(Some(&mut tree), key));
//! }
//!
//! let mut buf = String::with_capacity(handle::buffer_capacity(handle::size(Some(&tree))));
//! handle::traverse_inorder(Some(&tree), &mut buf);
//! assert_eq!(buf, "1 2 7 9 11 ");
//!
//! assert_eq!(handle::find_min(None), 0);
//! assert_eq!(handle::destroy(Some(tree)), 5);
//! assert_eq!(handle::destroy(None), 0);
//! ```

use std::io;

use crate::tree::write_keys;
use crate::{Key, Tree};

/// Characters needed for the widest key, `-2147483648`.
const MAX_KEY_DIGITS: usize = 11;

/// Creates an empty tree.
pub fn create() -> Tree {
    Tree::new()
}

/// Tears the tree down and returns the number of nodes released. Nothing happens for an absent
/// handle.
pub fn destroy(tree: Option<Tree>) -> usize {
    tree.map_or(0, Tree::destroy)
}

/// The number of keys in the tree, `0` for an absent handle.
pub fn size(tree: Option<&Tree>) -> usize {
    tree.map_or(0, Tree::len)
}

/// Whether `key` is stored in the tree.
pub fn search(tree: Option<&Tree>, key: Key) -> bool {
    tree.is_some_and(|t| t.contains(key))
}

/// Inserts `key`. Returns `false` for a duplicate key or an absent handle.
pub fn insert(tree: Option<&mut Tree>, key: Key) -> bool {
    tree.is_some_and(|t| t.insert(key))
}

/// Removes `key`. Returns `false` if it isn't stored or the handle is absent.
pub fn remove(tree: Option<&mut Tree>, key: Key) -> bool {
    tree.is_some_and(|t| t.remove(key))
}

/// The smallest key, or `0` for an absent or empty tree.
pub fn find_min(tree: Option<&Tree>) -> Key {
    tree.and_then(Tree::min).unwrap_or_default()
}

/// The largest key, or `0` for an absent or empty tree.
pub fn find_max(tree: Option<&Tree>) -> Key {
    tree.and_then(Tree::max).unwrap_or_default()
}

/// Bytes needed to hold the traversal of a tree with `size` keys: the widest key plus a separator
/// per entry and one spare byte. This always covers the older sizing rule of 4 bytes per entry,
/// doubled.
pub fn buffer_capacity(size: usize) -> usize {
    let capacity = size * (MAX_KEY_DIGITS + 1) + 1;
    debug_assert!(capacity >= size * 2 * 4);
    capacity
}

/// Clears `buf` and fills it with the in-order keys, each followed by a space. The buffer grows as
/// needed so it never has to be pre-sized.
pub fn traverse_inorder(tree: Option<&Tree>, buf: &mut String) {
    buf.clear();
    if let Some(tree) = tree {
        write_keys(&tree.inorder(), buf);
    }
}

/// Clears `buf` and fills it with the pre-order keys, each followed by a space.
pub fn traverse_preorder(tree: Option<&Tree>, buf: &mut String) {
    buf.clear();
    if let Some(tree) = tree {
        write_keys(&tree.preorder(), buf);
    }
}

/// Prints the in-order keys to standard output behind
/// [`DISPLAY_LABEL`](crate::tree::DISPLAY_LABEL). An absent handle prints like an empty tree.
pub fn display(tree: Option<&Tree>) -> io::Result<()> {
    match tree {
        Some(tree) => tree.display(),
        None => Tree::new().display(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::init_test_logging;

    fn filled(keys: &[Key]) -> Tree {
        let mut tree = create();
        for &key in keys {
            insert(Some(&mut tree), key);
        }
        tree
    }

    #[test]
    fn create_destroy() {
        init_test_logging();
        let tree = create();
        assert_eq!(size(Some(&tree)), 0);
        assert_eq!(destroy(Some(tree)), 0);
    }

    #[test]
    fn absent_handle_is_empty() {
        assert_eq!(size(None), 0);
        assert!(!search(None, 1));
        assert!(!insert(None, 1));
        assert!(!remove(None, 1));
        assert_eq!(destroy(None), 0);

        let mut buf = String::from("stale");
        traverse_inorder(None, &mut buf);
        assert_eq!(buf, "");
        traverse_preorder(None, &mut buf);
        assert_eq!(buf, "");
    }

    #[test]
    fn min_max_sentinel() {
        assert_eq!(find_min(None), 0);
        assert_eq!(find_max(None), 0);

        let mut tree = create();
        assert_eq!(find_min(Some(&tree)), 0);
        assert_eq!(find_max(Some(&tree)), 0);

        insert(Some(&mut tree), 1000);
        assert_eq!(find_min(Some(&tree)), 1000);
        assert_eq!(find_max(Some(&tree)), 1000);
    }

    #[test]
    fn find_min_max() {
        let mut tree = filled(&[7, 2, 11, 9, 1]);
        assert_eq!(find_min(Some(&tree)), 1);
        assert_eq!(find_max(Some(&tree)), 11);

        for key in [-5, 1000, 10, -150] {
            insert(Some(&mut tree), key);
        }
        assert_eq!(find_min(Some(&tree)), -150);
        assert_eq!(find_max(Some(&tree)), 1000);
    }

    #[test]
    fn insert_sizes() {
        let mut tree = create();
        for (expected, key) in [(1, 7), (2, 2), (3, 11), (3, 11), (4, 9), (5, 1)] {
            insert(Some(&mut tree), key);
            assert_eq!(size(Some(&tree)), expected);
        }
    }

    #[test]
    fn search_hits_and_misses() {
        let tree = filled(&[7, 2, 11, 9, 1, 53, 99, 17, 3, 4]);

        assert!(search(Some(&tree), 1));
        assert!(search(Some(&tree), 53));
        assert!(!search(Some(&tree), 43));
        assert!(!search(Some(&tree), 5));
    }

    #[test]
    fn traversals_reuse_buffer() {
        let mut tree = filled(&[7, 2, 11, 9, 1, 53, 99, 17, 3, 4]);
        let mut buf = String::with_capacity(buffer_capacity(size(Some(&tree))));

        traverse_preorder(Some(&tree), &mut buf);
        assert_eq!(buf, "7 2 1 3 4 11 9 53 17 99 ");
        traverse_inorder(Some(&tree), &mut buf);
        assert_eq!(buf, "1 2 3 4 7 9 11 17 53 99 ");

        insert(Some(&mut tree), 42);
        traverse_preorder(Some(&tree), &mut buf);
        assert_eq!(buf, "7 2 1 3 4 11 9 53 17 42 99 ");
        traverse_inorder(Some(&tree), &mut buf);
        assert_eq!(buf, "1 2 3 4 7 9 11 17 42 53 99 ");
    }

    #[test]
    fn buffer_capacity_fits_widest_keys() {
        let tree = filled(&[Key::MIN, -1_000_000_000, Key::MAX]);
        let mut buf = String::new();
        traverse_inorder(Some(&tree), &mut buf);

        assert!(buf.len() < buffer_capacity(size(Some(&tree))));
        assert_eq!(buffer_capacity(0), 1);
        assert!(buffer_capacity(10) >= 10 * 2 * 4);
    }

    #[test]
    fn remove_scenarios() {
        init_test_logging();
        let mut tree = filled(&[7, 2, 11, 9, 1]);

        assert!(remove(Some(&mut tree), 7));
        assert!(!search(Some(&tree), 7));
        assert!(remove(Some(&mut tree), 2));
        assert!(remove(Some(&mut tree), 11));
        assert_eq!(size(Some(&tree)), 2);
        assert!(remove(Some(&mut tree), 9));
        assert!(remove(Some(&mut tree), 1));
        assert!(!remove(Some(&mut tree), 1));
        assert_eq!(destroy(Some(tree)), 0);
    }

    #[test]
    fn display_does_not_fail() {
        let tree = filled(&[3, 1, 2]);
        display(Some(&tree)).unwrap();
        display(None).unwrap();
    }
}
