//! Comparisons between two whole trees: by shape, by element, and by reflection.

use std::cmp::Ordering;

use crate::tree::{Link, Tree};

impl<T> Tree<T> {
    /// Returns `true` if both trees have the same shape, ignoring the elements they hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let a: Tree<_> = [20, 13, 22].into_iter().collect();
    /// let b: Tree<_> = [30, 20, 35].into_iter().collect();
    /// let c: Tree<_> = [30, 20, 17].into_iter().collect();
    ///
    /// assert!(a.compare_structure(&b));
    /// assert!(!a.compare_structure(&c));
    /// ```
    pub fn compare_structure(&self, other: &Tree<T>) -> bool {
        self.root.compare_structure(&other.root)
    }

    /// Returns `true` if the roots hold equal elements and the trees have the same shape.
    ///
    /// **Note** Only the roots' elements are compared. Below the root this falls back to
    /// [`compare_structure`][Tree::compare_structure], so two trees of the same shape that only
    /// differ deeper down are considered equal. To compare every element, check
    /// [`compare_structure`][Tree::compare_structure] and compare the [levels][Tree::levels].
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let a: Tree<_> = [20, 13, 22].into_iter().collect();
    /// let b: Tree<_> = [20, 13, 22].into_iter().collect();
    /// let c: Tree<_> = [21, 13, 22].into_iter().collect();
    /// let d: Tree<_> = [20, 10, 30].into_iter().collect();
    ///
    /// assert!(a.equals(&b));
    /// assert!(!a.equals(&c));
    /// // Same root and shape, different children.
    /// assert!(a.equals(&d));
    /// ```
    pub fn equals(&self, other: &Tree<T>) -> bool
    where
        T: Ord,
    {
        self.root.equals(&other.root)
    }

    /// Returns `true` if `other` is this tree reflected left-to-right, comparing elements at every
    /// position.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert!(tree.is_mirror(&tree.mirror()));
    /// assert!(!tree.is_mirror(&tree));
    /// ```
    pub fn is_mirror(&self, other: &Tree<T>) -> bool
    where
        T: Ord,
    {
        self.root.is_mirror(&other.root)
    }
}

impl<T> Link<T> {
    fn compare_structure(&self, other: &Link<T>) -> bool {
        match (self.node(), other.node()) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.left.compare_structure(&b.left) && a.right.compare_structure(&b.right)
            }
            _ => false,
        }
    }

    fn equals(&self, other: &Link<T>) -> bool
    where
        T: Ord,
    {
        match (self.node(), other.node()) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.element.cmp(&b.element) == Ordering::Equal
                    && a.left.compare_structure(&b.left)
                    && a.right.compare_structure(&b.right)
            }
            _ => false,
        }
    }

    fn is_mirror(&self, other: &Link<T>) -> bool
    where
        T: Ord,
    {
        match (self.node(), other.node()) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a.element.cmp(&b.element) == Ordering::Equal
                    && a.left.is_mirror(&b.right)
                    && a.right.is_mirror(&b.left)
            }
            _ => false,
        }
    }
}
