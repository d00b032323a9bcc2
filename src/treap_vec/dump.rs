use alloc::format;
use core::fmt;

use super::TreapVec;
use crate::raw::Node;

/// Writes one element per line, tab-indented, between `TreapVec {` and `}`.
///
/// # Examples
///
/// ```
/// use treap_vec::TreapVec;
///
/// let seq = TreapVec::from([1, 2]);
/// assert_eq!(seq.to_string(), "TreapVec {\n\t1\n\t2\n}");
/// ```
impl<T: fmt::Display, R> fmt::Display for TreapVec<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TreapVec {{")?;
        for value in self {
            writeln!(f, "\t{value}")?;
        }
        write!(f, "}}")
    }
}

/// A displayable view of the tree behind a `TreapVec`.
///
/// This `struct` is created by the [`tree_dump`] method on [`TreapVec`]. The tree is drawn
/// sideways: each node is a line `|<value>`, its right subtree above it and its left
/// subtree below it, both indented by the width of the node's label. An empty tree is
/// drawn as `<Empty>`.
///
/// [`tree_dump`]: TreapVec::tree_dump
#[must_use]
pub struct TreeDump<'a, T> {
    root: Option<&'a Node<T>>,
}

impl<'a, T> TreeDump<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        TreeDump { root }
    }
}

fn write_node<T: fmt::Debug>(f: &mut fmt::Formatter<'_>, node: &Node<T>, indent: usize) -> fmt::Result {
    let label = format!("<{:?}>", node.value());
    let child_indent = indent + label.chars().count();

    if let Some(right) = node.right() {
        write_node(f, right, child_indent)?;
    }
    writeln!(f, "{:indent$}|{label}", "")?;
    if let Some(left) = node.left() {
        write_node(f, left, child_indent)?;
    }
    Ok(())
}

impl<T: fmt::Debug> fmt::Display for TreeDump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => write_node(f, root, 0),
            None => write!(f, "<Empty>"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for TreeDump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
