//! The owning [`Tree`] and the core operations to insert, find, and remove elements.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting the same element again does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.node_count(), 1);
//!
//! assert!(tree.remove(&1));
//! assert!(!tree.contains(&1));
//! ```

use std::cmp::Ordering;

use tracing::trace;

use crate::error::{Error, Result};

/// An unbalanced Binary Search Tree. This can be used for inserting, finding, and removing
/// elements. Every element is stored at most once: inserting an element that compares equal to
/// one already in the tree is ignored.
///
/// Nothing here rebalances the tree. Inserting elements in sorted order builds a tree that is
/// really a linked list.
#[derive(Debug)]
pub struct Tree<T> {
    pub(crate) root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: Link::empty() }
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.node().is_none()
    }

    /// Removes every element from the tree.
    pub fn clear(&mut self) {
        self.root = Link::empty();
    }

    /// Inserts the given element into the tree. Returns `false` (and leaves the tree untouched)
    /// if an equal element was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(20));
    /// assert!(tree.insert(13));
    /// assert!(!tree.insert(20));
    ///
    /// assert_eq!(tree.node_count(), 2);
    /// ```
    pub fn insert(&mut self, element: T) -> bool
    where
        T: Ord,
    {
        self.root.insert(element)
    }

    /// Removes the element equal to the given one from the tree. If the tree does not contain such
    /// an element, nothing happens and `false` is returned.
    ///
    /// A node with two children is replaced by its in-order successor, the smallest element of its
    /// right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&42));
    ///
    /// // 8 was the successor of 5 so it moved up to the root.
    /// assert_eq!(tree.levels(), vec![vec![&8], vec![&3]]);
    /// ```
    pub fn remove(&mut self, element: &T) -> bool
    where
        T: Ord,
    {
        self.root.remove(element)
    }

    /// Returns `true` if the tree holds an element equal to the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, element: &T) -> bool
    where
        T: Ord,
    {
        self.root.contains(element)
    }

    /// Returns the smallest element in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the tree is empty.
    pub fn find_min(&self) -> Result<&T> {
        self.root.node().map(Node::min).ok_or(Error::Underflow)
    }

    /// Returns the largest element in the tree.
    ///
    /// # Errors
    ///
    /// [`Error::Underflow`] if the tree is empty.
    pub fn find_max(&self) -> Result<&T> {
        self.root.node().map(Node::max).ok_or(Error::Underflow)
    }

    /// Returns how many elements are in the tree.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    /// Returns `true` if every node in the tree is either a leaf or has exactly two children. An
    /// empty tree is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [20, 13, 22].into_iter().collect();
    /// assert!(tree.is_full());
    ///
    /// // 30 only has a left child.
    /// let tree: Tree<_> = [30, 20, 17].into_iter().collect();
    /// assert!(!tree.is_full());
    /// ```
    pub fn is_full(&self) -> bool {
        self.root.is_full()
    }

    /// Gets the number of levels in this tree. An empty tree has a height of 0 and a tree with
    /// only a root has a height of 1.
    pub fn height(&self) -> usize {
        self.root.height()
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Inserts each element in iteration order, so the order decides the shape of the tree.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// The slot a subtree hangs from: either the tree's root or one child of a [`Node`]. Each node is
/// owned by exactly one `Link` so there is no sharing and no parent pointer.
#[derive(Debug)]
pub(crate) struct Link<T>(pub(crate) Option<Box<Node<T>>>);

impl<T> Drop for Link<T> {
    // Drop iteratively so a degenerate tree doesn't overflow the stack.
    fn drop(&mut self) {
        let mut stack: Vec<_> = self.0.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.0.take());
            stack.extend(node.right.0.take());
        }
    }
}

impl<T> Link<T> {
    pub(crate) fn empty() -> Self {
        Self(None)
    }

    pub(crate) fn from_node(node: Node<T>) -> Self {
        Self(Some(Box::new(node)))
    }

    pub(crate) fn node(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }

    pub(crate) fn node_mut(&mut self) -> Option<&mut Node<T>> {
        self.0.as_deref_mut()
    }

    pub(crate) fn take(&mut self) -> Self {
        Self(self.0.take())
    }

    fn insert(&mut self, element: T) -> bool
    where
        T: Ord,
    {
        match self.0 {
            None => {
                self.0 = Some(Box::new(Node::new(element)));
                true
            }
            Some(ref mut node) => match element.cmp(&node.element) {
                Ordering::Less => node.left.insert(element),
                Ordering::Equal => {
                    trace!("ignoring duplicate insert");
                    false
                }
                Ordering::Greater => node.right.insert(element),
            },
        }
    }

    fn remove(&mut self, element: &T) -> bool
    where
        T: Ord,
    {
        let ordering = match self.node() {
            Some(node) => element.cmp(&node.element),
            None => {
                trace!("element to remove not found");
                return false;
            }
        };

        match ordering {
            Ordering::Equal => {
                if let Some(node) = self.0.take() {
                    *self = node.splice();
                }
                true
            }
            _ => self
                .node_mut()
                .is_some_and(|node| node.child_mut(ordering).remove(element)),
        }
    }

    fn contains(&self, element: &T) -> bool
    where
        T: Ord,
    {
        match self.node() {
            None => false,
            Some(node) => match element.cmp(&node.element) {
                Ordering::Less => node.left.contains(element),
                Ordering::Equal => true,
                Ordering::Greater => node.right.contains(element),
            },
        }
    }

    fn count(&self) -> usize {
        self.node()
            .map_or(0, |node| 1 + node.left.count() + node.right.count())
    }

    fn is_full(&self) -> bool {
        match self.node() {
            None => true,
            Some(node) => match (node.left.node(), node.right.node()) {
                (None, None) => true,
                (Some(_), Some(_)) => node.left.is_full() && node.right.is_full(),
                _ => false,
            },
        }
    }

    fn height(&self) -> usize {
        self.node()
            .map_or(0, |node| 1 + node.left.height().max(node.right.height()))
    }
}

/// A `Node` holds one element and two children, either of which may be empty.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(element: T) -> Self {
        Self {
            element,
            left: Link::empty(),
            right: Link::empty(),
        }
    }

    /// The child to descend into when looking for something that compares to this node's
    /// element as `ordering`.
    pub(crate) fn child_mut(&mut self, ordering: Ordering) -> &mut Link<T> {
        match ordering {
            Ordering::Less => &mut self.left,
            _ => &mut self.right,
        }
    }

    fn min(&self) -> &T {
        let mut node = self;
        while let Some(left) = node.left.node() {
            node = left;
        }
        &node.element
    }

    fn max(&self) -> &T {
        let mut node = self;
        while let Some(right) = node.right.node() {
            node = right;
        }
        &node.element
    }

    /// Detaches this node from the tree and returns whatever should take its place.
    ///
    /// With zero or one child, that child is spliced up. With two children, this node stays but
    /// takes over the element of its in-order successor, which is removed from the right subtree.
    fn splice(mut self: Box<Self>) -> Link<T> {
        match (self.left.0.take(), self.right.0.take()) {
            (None, None) => Link::empty(),
            (Some(child), None) | (None, Some(child)) => Link(Some(child)),
            (Some(left), Some(right)) => {
                let (successor, new_right) = right.remove_min();
                self.element = successor;
                self.left = Link(Some(left));
                self.right = new_right;
                Link(Some(self))
            }
        }
    }

    /// Returns the smallest element of this subtree and the subtree left over without it.
    fn remove_min(mut self: Box<Self>) -> (T, Link<T>) {
        match self.left.0.take() {
            None => {
                let node = *self;
                (node.element, node.right)
            }
            Some(left) => {
                let (min, new_left) = left.remove_min();
                self.left = new_left;
                (min, Link(Some(self)))
            }
        }
    }
}
