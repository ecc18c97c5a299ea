use crate::tree::{Link, Tree};

impl<T> Tree<T> {
    /// Groups the elements of the tree by their depth. The first group holds only the root, the
    /// second the root's children, and so on. An empty tree has a single, empty group.
    ///
    /// Within a group, elements are ordered by a pre-order walk of the tree: everything below a
    /// node's left child comes before anything below its right child.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// assert_eq!(tree.levels(), vec![vec![&5], vec![&3, &8], vec![&1, &4]]);
    ///
    /// assert_eq!(Tree::<i32>::new().levels(), vec![Vec::<&i32>::new()]);
    /// ```
    pub fn levels(&self) -> Vec<Vec<&T>> {
        let mut levels = Vec::new();
        self.root.collect_levels(0, &mut levels);

        if levels.is_empty() {
            levels.push(Vec::new());
        }
        levels
    }
}

impl<T> Link<T> {
    fn collect_levels<'a>(&'a self, depth: usize, levels: &mut Vec<Vec<&'a T>>) {
        let Some(node) = self.node() else {
            return;
        };

        // A pre-order walk reaches depth `n` only after visiting something at every depth above.
        if depth == levels.len() {
            levels.push(Vec::new());
        }
        levels[depth].push(&node.element);

        node.left.collect_levels(depth + 1, levels);
        node.right.collect_levels(depth + 1, levels);
    }
}
