//! A persistent BST. This is modeled after a BST one would see in
//! a functional language like Haskell. The one operation that one would
//! expect to modify the tree (`insert`) instead returns a new tree that
//! references many of the nodes of the original tree.
//!
//! Values are unique: inserting a value the tree already holds is a no-op
//! that hands back a tree sharing the original's nodes.
//!
//! # Examples
//!
//! ```
//! use persistent::tree::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! // This `insert` returns a new tree!
//! let new_tree = tree.insert(1);
//!
//! // The new tree has this value but the old one doesn't.
//! assert!(new_tree.contains(&1));
//! assert!(!tree.contains(&1));
//!
//! // Inserting the same value again changes nothing.
//! let newer_tree = new_tree.insert(1);
//!
//! // All history is preserved.
//! assert_eq!(newer_tree.len(), 1);
//! assert_eq!(new_tree.len(), 1);
//! assert_eq!(tree.len(), 0);
//! ```

use std::cmp;
use std::fmt;
use std::rc::Rc;

/// A persistent Binary Search Tree holding each value at most once.
/// Note that this data structure is functional - the operation that would
/// modify the tree instead returns a new tree.
pub enum Tree<T> {
    /// A marker for the empty pointer at the bottom of a subtree.
    Leaf,
    /// A `Node` that has a value and two children (which are both
    /// `Tree`s). This enum trivially wraps the [`Node`] struct.
    Node(Node<T>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self::Leaf
    }

    /// Returns a new tree that includes a node containing the given value.
    /// If the value is already present the returned tree is structurally
    /// identical to this one, sharing the matched node's value and both of
    /// its subtrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent::tree::Tree;
    ///
    /// let tree = Tree::new();
    /// let new_tree = tree.insert("b");
    /// let newer_tree = new_tree.insert("a");
    ///
    /// // All history is preserved.
    /// assert!(newer_tree.contains(&"a"));
    /// assert!(!new_tree.contains(&"a"));
    /// assert!(!tree.contains(&"b"));
    /// ```
    pub fn insert(&self, value: T) -> Self
    where
        T: cmp::Ord,
    {
        match self {
            Self::Leaf => Self::Node(Node::new(value)),
            Self::Node(n) => Self::Node(n.insert(value)),
        }
    }

    /// Returns whether the given value is in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent::tree::Tree;
    ///
    /// let tree = Tree::new().insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        match self {
            Self::Leaf => false,
            Self::Node(n) => n.contains(value),
        }
    }

    /// Returns the number of values in this tree. This is recomputed on
    /// every call by walking the tree, so it costs `O(len)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent::tree::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1).insert(2);
    ///
    /// // The duplicate insert of 2 doesn't count.
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::Node(n) => 1 + n.left.len() + n.right.len(),
        }
    }

    /// Returns whether this tree holds no values.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Leaf)
    }

    /// Returns an iterator over the values in this tree in ascending
    /// order. The traversal is lazy and borrows the tree; each call starts
    /// a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent::tree::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(3).insert(1);
    /// let values: Vec<_> = tree.iter().copied().collect();
    ///
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

/// Renders the tree in a canonical parenthesized form: the empty tree is
/// `()` and a node is `(left value right)` where an empty child contributes
/// nothing. A lone node therefore renders as `(value)`, not `(()value())`.
///
/// # Examples
///
/// ```
/// use persistent::tree::Tree;
///
/// let tree = Tree::new().insert("b").insert("a").insert("c");
///
/// assert_eq!(Tree::<&str>::new().to_string(), "()");
/// assert_eq!(tree.to_string(), "((a)b(c))");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf => f.write_str("()"),
            Self::Node(n) => n.write_parenthesized(f),
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: cmp::Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |tree, value| tree.insert(value))
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

struct Child<T>(Rc<Tree<T>>);
impl<T> Clone for Child<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}
impl<T> Child<T> {
    fn new() -> Self {
        Self(Rc::new(Tree::new()))
    }

    fn insert(&self, value: T) -> Self
    where
        T: cmp::Ord,
    {
        Self(Rc::new(self.0.insert(value)))
    }

    fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        self.0.contains(value)
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// A `Node` has a value that is used for searching/sorting. It always has
/// two children although those children may be [`Leaf`][Tree::Leaf]s.
pub struct Node<T> {
    value: Rc<T>,
    left: Child<T>,
    right: Child<T>,
}

/// Manual implementation of `Clone` so we don't require the generic
/// parameter to be `Clone` itself.
///
/// Note the comment on generic structs in
/// [the docs][<https://doc.rust-lang.org/std/clone/trait.Clone.html#derivable>].
impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

impl<T> Node<T> {
    /// Construct a new `Node` with the given `value` and no children.
    fn new(value: T) -> Self {
        Self {
            value: Rc::new(value),
            left: Child::new(),
            right: Child::new(),
        }
    }

    fn insert(&self, value: T) -> Self
    where
        T: cmp::Ord,
    {
        match value.cmp(&self.value) {
            cmp::Ordering::Less => Self {
                value: Rc::clone(&self.value),
                left: self.left.insert(value),
                right: self.right.clone(),
            },
            // Already present - share everything with the original.
            cmp::Ordering::Equal => self.clone(),
            cmp::Ordering::Greater => Self {
                value: Rc::clone(&self.value),
                left: self.left.clone(),
                right: self.right.insert(value),
            },
        }
    }

    fn contains(&self, value: &T) -> bool
    where
        T: cmp::Ord,
    {
        match value.cmp(&self.value) {
            cmp::Ordering::Less => self.left.contains(value),
            cmp::Ordering::Equal => true,
            cmp::Ordering::Greater => self.right.contains(value),
        }
    }

    /// Writes this subtree as `(left value right)`, skipping empty
    /// children entirely rather than rendering them as `()`.
    fn write_parenthesized(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    where
        T: fmt::Display,
    {
        f.write_str("(")?;
        if let Tree::Node(left) = &*self.left.0 {
            left.write_parenthesized(f)?;
        }
        write!(f, "{}", self.value)?;
        if let Tree::Node(right) = &*self.right.0 {
            right.write_parenthesized(f)?;
        }
        f.write_str(")")
    }
}

/// An in-order iterator over a [`Tree`], yielding values smallest first.
/// Created by [`Tree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose value (and right subtree) are still to be visited,
    /// deepest unvisited left ancestor on top.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree);
        iter
    }

    /// Walks from `tree` down its leftmost path, stacking every node
    /// passed on the way.
    fn push_left_spine(&mut self, mut tree: &'a Tree<T>) {
        while let Tree::Node(n) = tree {
            self.stack.push(n);
            tree = &*n.left.0;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left_spine(&*node.right.0);
        Some(&*node.value)
    }
}
