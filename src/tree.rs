//! An unbalanced BST. Every node exclusively owns its two children through a `Box` so there are
//! no parent pointers and no `unsafe`. Nothing is ever rotated: the shape of the tree is decided
//! entirely by the order keys are inserted in, which is what makes [`Tree::height`] and
//! [`Tree::is_balanced`] interesting to look at.
//!
//! All the walks (`insert`, `search`, `delete`, `height`, `is_balanced`, `Debug` and `Drop`) use a
//! cursor or an explicit stack instead of recursion, so a fully skewed tree is only limited by
//! memory.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.search(&1), Some(&2));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert(1, 3);
//! assert_eq!(tree.search(&1), Some(&3));
//!
//! // Deleting a node returns its value.
//! let deleted_value = tree.delete(&1);
//!
//! assert_eq!(deleted_value, Some(3));
//! assert_eq!(tree.search(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

/// An owning link to a subtree. `None` is the empty subtree.
type Link<K, V> = Option<Box<Node<K, V>>>;

/// A Binary Search Tree that never rebalances itself. This can be used for inserting, searching,
/// and deleting keys and values.
pub struct Tree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        // Unhook every child before its parent goes away so dropping a `Box<Node>` never has to
        // recurse.
        let mut pending: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Shows the entries flat, in key order, with the height standing in for the shape. Printing the
/// nesting would mean recursing once per level.
impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("height", &self.height())
            .field("entries", &Entries(self))
            .finish()
    }
}

/// The `{key: value, ...}` part of the `Debug` output.
struct Entries<'a, K, V>(&'a Tree<K, V>);

impl<K, V> fmt::Debug for Entries<'_, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many keys are stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value for an
    /// existing key overwrites its value in place; the shape of the tree doesn't change.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1, 2);
    /// assert_eq!(tree.search(&1), Some(&2));
    ///
    /// tree.insert(1, 3);
    /// assert_eq!(tree.search(&1), Some(&3));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => {
                    trace!("key already present, overwriting its value");
                    node.value = value;
                    return;
                }
            }
        }

        *link = Some(Node::new_boxed(key, value));
        self.len += 1;
        trace!(len = self.len, "inserted new node");
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.search(&1), Some(&2));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Like [`Tree::search`] but hands out a mutable reference to the stored value.
    pub fn search_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Greater => current = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }
        None
    }

    /// Whether a node with the given key is in the tree.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// Deletes the node containing the given key from the tree and returns its value. If the tree
    /// does not contain a node with the key, nothing happens and `None` is returned.
    ///
    /// A node with two children is not unlinked itself. Its in-order successor (the smallest key
    /// in its right subtree) is unlinked instead and the successor's key and value are moved into
    /// it.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2, "two");
    /// tree.insert(1, "one");
    /// tree.insert(3, "three");
    ///
    /// assert_eq!(tree.delete(&2), Some("two"));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.search(&1), Some(&"one"));
    /// assert_eq!(tree.search(&3), Some(&"three"));
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let link = link_to(&mut self.root, key)?;
        let node = link.as_deref_mut()?;

        let removed = if node.left.is_some() && node.right.is_some() {
            let successor = take_min(&mut node.right)?;
            debug!("deleting node with two children, promoting its in-order successor");
            let Node {
                key: successor_key,
                value: successor_value,
                ..
            } = *successor;
            node.key = successor_key;
            mem::replace(&mut node.value, successor_value)
        } else {
            let unlinked = link.take()?;
            let Node {
                value, left, right, ..
            } = *unlinked;
            let leaf = left.is_none() && right.is_none();
            debug!(leaf, "deleting node with at most one child");
            // At most one of these is `Some` so it simply takes the deleted node's place.
            *link = left.or(right);
            value
        };

        self.len -= 1;
        Some(removed)
    }

    /// The smallest key in the tree and its value.
    pub fn min(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// The largest key in the tree and its value.
    pub fn max(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0 and a tree with just a root has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Ascending inserts only ever go right.
    /// for key in 0..5 {
    ///     tree.insert(key, ());
    /// }
    /// assert_eq!(tree.height(), 5);
    /// ```
    pub fn height(&self) -> usize {
        shape_of(self.root.as_deref()).height
    }

    /// Whether, at every node, the heights of the left and right subtrees differ by at most 1.
    /// This is the AVL notion of balance and says nothing on its own about how the tree was
    /// built. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_, _> = [50, 30, 70, 20, 40, 60, 80].into_iter().map(|k| (k, k)).collect();
    /// assert!(tree.is_balanced());
    ///
    /// let chain: Tree<_, _> = (0..5).map(|k| (k, k)).collect();
    /// assert!(!chain.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        shape_of(self.root.as_deref()).balanced
    }

    /// Iterates over the keys and values of the tree in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref(), self.len)
    }
}

impl<K, V> Extend<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Keys are inserted in iteration order so the resulting shape depends on that order.
impl<K, V> FromIterator<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Walks down from `link` and returns the link that owns the node with `key`, if there is one.
fn link_to<'a, K, V>(mut link: &'a mut Link<K, V>, key: &K) -> Option<&'a mut Link<K, V>>
where
    K: Ord,
{
    loop {
        let node = link.as_ref()?;
        link = match key.cmp(&node.key) {
            Ordering::Less => &mut link.as_mut()?.left,
            Ordering::Greater => &mut link.as_mut()?.right,
            Ordering::Equal => return Some(link),
        };
    }
}

/// Unlinks the leftmost node under `link`, putting its right subtree in its place.
fn take_min<K, V>(mut link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }
    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

/// Height and balance of a subtree, gathered in a single pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Shape {
    height: usize,
    balanced: bool,
}

/// One step of the post-order walk in [`shape_of`].
enum Visit<'a, K, V> {
    /// Visit the children of this (possibly empty) subtree.
    Enter(Option<&'a Node<K, V>>),
    /// Both children have pushed their heights; combine them.
    Exit,
}

/// Computes the height of the subtree and whether every node in it is balanced. Each node is
/// visited once; children's heights are kept on a stack until their parent is exited.
fn shape_of<K, V>(root: Option<&Node<K, V>>) -> Shape {
    let mut visits = vec![Visit::Enter(root)];
    let mut heights: Vec<usize> = Vec::new();
    let mut balanced = true;

    while let Some(visit) = visits.pop() {
        match visit {
            Visit::Enter(None) => heights.push(0),
            Visit::Enter(Some(node)) => {
                // Left is pushed last so it is measured first.
                visits.push(Visit::Exit);
                visits.push(Visit::Enter(node.right.as_deref()));
                visits.push(Visit::Enter(node.left.as_deref()));
            }
            Visit::Exit => {
                let right = heights.pop().unwrap_or_default();
                let left = heights.pop().unwrap_or_default();
                balanced &= left.abs_diff(right) <= 1;
                heights.push(left.max(right) + 1);
            }
        }
    }

    Shape {
        height: heights.pop().unwrap_or_default(),
        balanced,
    }
}

/// A key, its value, and the two subtrees hanging off of it.
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

/// An in-order iterator over the entries of a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, K, V> {
    /// Nodes whose left subtree has been (or is about to be) yielded but which haven't been
    /// yielded themselves. The top of the stack is the next smallest key.
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<K, V>>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
