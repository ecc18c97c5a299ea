//! Sorted, in-order iteration over a [`Tree`].

use std::iter::FusedIterator;

use crate::tree::{Link, Node, Tree};

/// An iterator over the elements of a [`Tree`] in ascending order.
///
/// This is created by [`Tree::iter`]. It walks the tree lazily, keeping a stack of the nodes whose
/// left subtree is being visited, so it never holds more than `height` nodes.
#[derive(Debug)]
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    fn new(root: &'a Link<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link.node() {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.element)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Tree<T> {
    /// Returns an iterator over the elements of the tree, smallest first. Each call starts a new
    /// walk from the smallest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&1, &3, &4, &5, &8]);
    /// assert_eq!(tree.iter().next(), Some(&1));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
