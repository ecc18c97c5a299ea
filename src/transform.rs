//! Operations that build a new tree out of an existing one, or restructure one in place.

use std::cmp::Ordering;

use tracing::warn;

use crate::tree::{Link, Node, Tree};

/// The outcome of [`Tree::rotate_left`] or [`Tree::rotate_right`]. Only
/// [`Rotated`][Rotation::Rotated] means the tree changed.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// The node holding the element was rotated.
    Rotated,
    /// No node holds the element.
    NotFound,
    /// The node holding the element has no child on the side that would have moved up.
    MissingChild,
}

impl Rotation {
    /// Returns `true` if the tree was restructured.
    pub fn is_rotated(self) -> bool {
        self == Self::Rotated
    }
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Left,
    Right,
}

impl<T> Tree<T> {
    /// Creates a new tree with the same shape and elements as this one. No node is shared between
    /// the two so changing one never changes the other.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    /// let mut copy = tree.copy();
    /// copy.insert(1);
    ///
    /// assert!(copy.contains(&1));
    /// assert!(!tree.contains(&1));
    /// ```
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        Self {
            root: self.root.copy(),
        }
    }

    /// Creates a new tree that is this tree reflected left-to-right.
    ///
    /// **Note** The reflection orders elements from largest to smallest, so it is not a valid
    /// search tree anymore. Only use it with the shape queries like
    /// [`is_mirror`][Tree::is_mirror] and [`levels`][Tree::levels].
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.mirror().levels(), vec![vec![&5], vec![&8, &3], vec![&4, &1]]);
    /// ```
    pub fn mirror(&self) -> Self
    where
        T: Clone,
    {
        Self {
            root: self.root.mirror(),
        }
    }

    /// Rotates the node holding `element` to the right: its left child takes its place and it
    /// becomes that child's right child.
    ///
    /// If no node holds `element`, or that node has no left child, the tree is left unchanged and
    /// a warning is logged.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::{Rotation, Tree};
    ///
    /// let mut tree: Tree<_> = [20, 13].into_iter().collect();
    ///
    /// assert_eq!(tree.rotate_right(&13), Rotation::MissingChild);
    /// assert_eq!(tree.rotate_right(&42), Rotation::NotFound);
    ///
    /// assert_eq!(tree.rotate_right(&20), Rotation::Rotated);
    /// assert_eq!(tree.levels(), vec![vec![&13], vec![&20]]);
    /// ```
    pub fn rotate_right(&mut self, element: &T) -> Rotation
    where
        T: Ord,
    {
        self.root.rotate(element, Direction::Right)
    }

    /// Rotates the node holding `element` to the left: its right child takes its place and it
    /// becomes that child's left child.
    ///
    /// If no node holds `element`, or that node has no right child, the tree is left unchanged and
    /// a warning is logged.
    pub fn rotate_left(&mut self, element: &T) -> Rotation
    where
        T: Ord,
    {
        self.root.rotate(element, Direction::Left)
    }
}

impl<T> Link<T> {
    fn copy(&self) -> Self
    where
        T: Clone,
    {
        match self.node() {
            None => Self::empty(),
            Some(node) => Self::from_node(Node {
                element: node.element.clone(),
                left: node.left.copy(),
                right: node.right.copy(),
            }),
        }
    }

    fn mirror(&self) -> Self
    where
        T: Clone,
    {
        match self.node() {
            None => Self::empty(),
            Some(node) => Self::from_node(Node {
                element: node.element.clone(),
                left: node.right.mirror(),
                right: node.left.mirror(),
            }),
        }
    }

    /// Finds the node holding `element` by comparison and rotates the subtree rooted there.
    fn rotate(&mut self, element: &T, direction: Direction) -> Rotation
    where
        T: Ord,
    {
        let ordering = match self.node() {
            Some(node) => element.cmp(&node.element),
            None => {
                warn!(?direction, "no node holds the element to rotate; tree is not changed");
                return Rotation::NotFound;
            }
        };

        match (ordering, direction) {
            (Ordering::Equal, Direction::Right) => self.rotate_right(),
            (Ordering::Equal, Direction::Left) => self.rotate_left(),
            _ => self.node_mut().map_or(Rotation::NotFound, |node| {
                node.child_mut(ordering).rotate(element, direction)
            }),
        }
    }

    /// Rotate self to the right. This moves the left child up vertically and self down
    /// vertically.
    ///
    /// ```text
    ///      old_root                 new_root
    ///      /     \                  /     \
    ///  new_root   z     rotate ->  x    old_root
    ///   /  \                             /  \
    ///  x    y                           y    z
    /// ```
    fn rotate_right(&mut self) -> Rotation {
        let Some(mut old_root) = self.0.take() else {
            return Rotation::NotFound;
        };

        match old_root.left.0.take() {
            None => {
                self.0 = Some(old_root);
                warn!("left subtree is empty; tree is not changed");
                Rotation::MissingChild
            }
            Some(mut new_root) => {
                old_root.left = new_root.right.take();
                new_root.right = Link(Some(old_root));
                self.0 = Some(new_root);
                Rotation::Rotated
            }
        }
    }

    /// Rotate self to the left, the mirror image of [`rotate_right`][Self::rotate_right].
    fn rotate_left(&mut self) -> Rotation {
        let Some(mut old_root) = self.0.take() else {
            return Rotation::NotFound;
        };

        match old_root.right.0.take() {
            None => {
                self.0 = Some(old_root);
                warn!("right subtree is empty; tree is not changed");
                Rotation::MissingChild
            }
            Some(mut new_root) => {
                old_root.right = new_root.left.take();
                new_root.left = Link(Some(old_root));
                self.0 = Some(new_root);
                Rotation::Rotated
            }
        }
    }
}
