//! An unbalanced BST of unique integer keys. Every node is owned by exactly one parent (or by the
//! `Tree` for the root) so dropping a node drops its whole subtree.
//!
//! The shape of the tree is purely a function of insertion order. Inserting keys in sorted order
//! produces a tree that is really a linked list. To keep that case from exhausting the stack, every
//! operation walks the tree with loops or explicit stacks instead of recursing once per level.
//!
//! # Examples
//!
//! ```
//! use ordtree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(1));
//! assert_eq!(tree.min(), None);
//!
//! for key in [7, 2, 11, 9, 1] {
//!     assert!(tree.insert(key));
//! }
//!
//! // Keys are unique.
//! assert!(!tree.insert(11));
//! assert_eq!(tree.len(), 5);
//!
//! assert_eq!(tree.inorder_string(), "1 2 7 9 11 ");
//! assert_eq!(tree.preorder_string(), "7 2 1 11 9 ");
//!
//! // Removing a node with two children moves its successor up.
//! assert!(tree.remove(7));
//! assert_eq!(tree.preorder_string(), "9 2 1 11 ");
//! assert!(!tree.contains(7));
//! ```

use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::io;

use tracing::{debug, trace};

use crate::util::DeleteResult;
use crate::{Error, Key};

/// Written in front of the in-order keys by [`Tree::display`].
pub const DISPLAY_LABEL: &str = "BST contains: ";

/// A child slot. Either empty or the sole owner of a subtree.
type Link = Option<Box<Node>>;

/// A Binary Search Tree holding unique [`Key`]s. It never rebalances.
pub struct Tree {
    root: Link,
    /// Number of nodes reachable from `root`. Maintained on every insert and remove.
    len: usize,
}

struct Node {
    key: Key,
    left: Link,
    right: Link,
}

impl Node {
    fn new_boxed(key: Key) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        release(self.root.take());
    }
}

impl Clone for Tree {
    /// Re-inserting the keys in pre-order rebuilds exactly the same shape.
    fn clone(&self) -> Self {
        self.preorder().into_iter().collect()
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("keys", &self.inorder())
            .finish()
    }
}

impl FromIterator<Key> for Tree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Key> for Tree {
    /// Inserts every key in iteration order. Duplicates are skipped.
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl Tree {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Tears the tree down and returns how many nodes were released. Every node is released
    /// exactly once and always after both of its children.
    ///
    /// Dropping a `Tree` does the same thing; this just reports the count.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree = [5, 3, 8].into_iter().collect();
    /// assert_eq!(tree.destroy(), 3);
    ///
    /// assert_eq!(Tree::new().destroy(), 0);
    /// ```
    pub fn destroy(mut self) -> usize {
        let released = release(self.root.take());
        debug_assert_eq!(released, self.len);
        debug!(released, "destroyed tree");
        self.len = 0;
        released
    }

    /// Releases every node, leaving an empty tree that can be reused.
    pub fn clear(&mut self) {
        release(self.root.take());
        self.len = 0;
    }

    /// The number of keys in the tree. This is a maintained counter, not a recount.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `key` is stored in the tree. Takes `O(height)` which is `O(len)` for a tree built
    /// from sorted keys.
    pub fn contains(&self, key: Key) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Inserts `key` as a new leaf. Returns `false` if it was already present, in which case the
    /// tree is unchanged.
    pub fn insert(&mut self, key: Key) -> bool {
        self.try_insert(key).is_ok()
    }

    /// Inserts `key` as a new leaf at the first empty slot found by searching for it.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if the key is already stored. Existing keys are never overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.try_insert(4), Ok(()));
    /// assert_eq!(tree.try_insert(4), Err(Error::DuplicateKey(4)));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn try_insert(&mut self, key: Key) -> Result<(), Error> {
        let mut slot = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = slot {
            slot = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    debug!(key, "rejected duplicate key");
                    return Err(Error::DuplicateKey(key));
                }
                Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }

        *slot = Some(Node::new_boxed(key));
        self.len += 1;
        trace!(key, depth, len = self.len, "inserted leaf");
        Ok(())
    }

    /// Removes `key` from the tree. Returns `false` if it wasn't present, in which case the tree
    /// is unchanged.
    pub fn remove(&mut self, key: Key) -> bool {
        self.try_remove(key).is_ok()
    }

    /// Removes the node holding `key` and repairs the tree around it:
    ///
    /// * a node without children simply disappears,
    /// * a node with one child is replaced by that child,
    /// * a node with two children takes its in-order successor's key (the smallest key in its
    ///   right subtree) and the successor is removed from the right subtree instead.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the key isn't stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Error, Tree};
    ///
    /// let mut tree: Tree = [7, 2, 11, 9, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.try_remove(7), Ok(()));
    /// assert_eq!(tree.try_remove(7), Err(Error::NotFound(7)));
    /// assert_eq!(tree.preorder(), vec![9, 2, 1, 11]);
    /// ```
    pub fn try_remove(&mut self, key: Key) -> Result<(), Error> {
        match unlink(&mut self.root, key) {
            DeleteResult::NotFound => {
                debug!(key, "key to remove not found");
                return Err(Error::NotFound(key));
            }
            DeleteResult::Replaced { successor } => {
                debug!(key, successor, "removed key, successor moved up");
            }
            result @ (DeleteResult::Detached | DeleteResult::Spliced) => {
                debug!(key, ?result, "removed key");
            }
        }

        self.len -= 1;
        Ok(())
    }

    /// The smallest key, or `None` if the tree is empty.
    pub fn min(&self) -> Option<Key> {
        min_key(&self.root)
    }

    /// The largest key, or `None` if the tree is empty.
    pub fn max(&self) -> Option<Key> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(node.key)
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a height
    /// of 0 and a tree built from `n` sorted keys has a height of `n`.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    /// The keys in in-order (left, node, right). For a valid BST this is strictly ascending.
    pub fn inorder(&self) -> Vec<Key> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack = Vec::new();
        let mut current = self.root.as_deref();
        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.as_deref();
            }
            let Some(node) = stack.pop() else {
                break;
            };
            keys.push(node.key);
            current = node.right.as_deref();
        }
        keys
    }

    /// The keys in pre-order (node, left, right). This reveals the shape of the tree: inserting
    /// these keys in this order into an empty tree rebuilds the same shape.
    pub fn preorder(&self) -> Vec<Key> {
        let mut keys = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            keys.push(node.key);
            // Right first so the left subtree is popped first.
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        keys
    }

    /// The in-order keys, each followed by a single space. Empty for an empty tree.
    pub fn inorder_string(&self) -> String {
        let mut out = String::new();
        write_keys(&self.inorder(), &mut out);
        out
    }

    /// The pre-order keys, each followed by a single space. Empty for an empty tree.
    pub fn preorder_string(&self) -> String {
        let mut out = String::new();
        write_keys(&self.preorder(), &mut out);
        out
    }

    /// Writes [`DISPLAY_LABEL`] and the in-order keys as a single line.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree = [2, 1, 3].into_iter().collect();
    /// let mut out = Vec::new();
    /// tree.write_display(&mut out).unwrap();
    ///
    /// assert_eq!(out, b"BST contains: 1 2 3 \n");
    /// ```
    pub fn write_display<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "{DISPLAY_LABEL}{}", self.inorder_string())
    }

    /// Prints the tree to standard output. See [`Tree::write_display`].
    pub fn display(&self) -> io::Result<()> {
        self.write_display(io::stdout().lock())
    }
}

/// Appends every key followed by a space to `out`.
pub(crate) fn write_keys(keys: &[Key], out: &mut String) {
    for key in keys {
        // Writing into a `String` can't fail.
        let _ = write!(out, "{key} ");
    }
}

/// The smallest key in the subtree owned by `link`.
fn min_key(link: &Link) -> Option<Key> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    Some(node.key)
}

/// Unlinks `key` from the subtree owned by `slot`.
///
/// The search descends with a loop until it reaches the slot owning the matching node and then
/// repairs that slot in place. Only a node with two children recurses, once, to unlink its
/// successor which by definition has no left child.
fn unlink(mut slot: &mut Link, key: Key) -> DeleteResult {
    // The guards only borrow immutably, so stopping leaves the matched slot free to use below.
    loop {
        let go_left = match slot.as_deref() {
            Some(node) if key < node.key => true,
            Some(node) if key > node.key => false,
            _ => break,
        };
        let node = slot.as_deref_mut().expect("slot checked non-empty above");
        slot = if go_left { &mut node.left } else { &mut node.right };
    }

    let Some(node) = slot.as_deref_mut() else {
        return DeleteResult::NotFound;
    };
    let successor = match (node.left.is_some(), min_key(&node.right)) {
        (true, Some(successor)) => successor,
        _ => {
            // At most one child: it takes the node's place and the node is dropped.
            let child = node.left.take().or_else(|| node.right.take());
            let result = if child.is_some() {
                DeleteResult::Spliced
            } else {
                DeleteResult::Detached
            };
            *slot = child;
            return result;
        }
    };

    node.key = successor;
    let successor_result = unlink(&mut node.right, successor);
    debug_assert!(matches!(
        successor_result,
        DeleteResult::Detached | DeleteResult::Spliced
    ));
    if let Some(left) = node.left.as_deref() {
        debug_assert!(left.key < node.key);
    }
    if let Some(right) = node.right.as_deref() {
        debug_assert!(node.key < right.key);
    }
    DeleteResult::Replaced { successor }
}

/// Drops every node of the subtree, children before their parent, without recursing. Returns the
/// number of nodes dropped.
fn release(root: Link) -> usize {
    let mut released = 0;
    let mut stack: Vec<Box<Node>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        match node.left.take().or_else(|| node.right.take()) {
            Some(child) => {
                // Revisit this node once the child's subtree is gone.
                stack.push(node);
                stack.push(child);
            }
            None => {
                drop(node);
                released += 1;
            }
        }
    }
    released
}

#[cfg(test)]
impl Tree {
    /// Checks the ordering invariant and that `len` matches the reachable node count.
    fn assert_invariants(&self) {
        let keys = self.inorder();
        assert_eq!(keys.len(), self.len);
        assert!(keys.windows(2).all(|w| w[0] < w[1]), "not ascending: {keys:?}");
    }
}
