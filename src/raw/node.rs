use alloc::boxed::Box;
use core::cmp::Ordering;
use core::mem;

use crate::IndexNotFound;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

// Implicit-key treap node: the in-order position of a node is its index, derived
// from the subtree sizes along the path from the root. No node stores its index.
//
// Cloning deep-copies the whole subtree and keeps priorities and sizes verbatim,
// so a clone has exactly the same shape as the original.
#[derive(Clone)]
pub(crate) struct Node<T> {
    value: T,
    // Max-heap order: a parent's priority is >= both of its children's.
    priority: u64,
    // Number of nodes in the subtree rooted here, including this one.
    size: usize,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a detached single-node treap.
    pub(crate) fn new(value: T, priority: u64) -> Box<Self> {
        Box::new(Self {
            value,
            priority,
            size: 1,
            left: None,
            right: None,
        })
    }

    #[inline]
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    #[cfg(test)]
    pub(crate) fn priority(&self) -> u64 {
        self.priority
    }

    #[cfg(test)]
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Splits a mutable borrow of this node into its value and both child links.
    #[inline]
    pub(crate) fn parts_mut(&mut self) -> (&mut T, &mut Link<T>, &mut Link<T>) {
        (&mut self.value, &mut self.left, &mut self.right)
    }

    /// Consumes the node, returning its value and both child links.
    pub(crate) fn into_parts(self: Box<Self>) -> (T, Link<T>, Link<T>) {
        let Self { value, left, right, .. } = *self;
        (value, left, right)
    }

    /// Recalculates the cached subtree size from the children.
    #[inline]
    fn update(&mut self) {
        self.size = size(&self.left) + size(&self.right) + 1;
    }
}

/// Returns the number of nodes under `link`, zero for an empty link.
#[inline]
pub(crate) fn size<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

/// Concatenates two treaps, every element of `left` preceding every element of `right`.
///
/// The root with the higher priority wins; on equal priorities the left root wins.
/// Values are never inspected.
pub(crate) fn merge<T>(left: Link<T>, right: Link<T>) -> Link<T> {
    match (left, right) {
        (None, right) => right,
        (left, None) => left,
        (Some(mut left), Some(mut right)) => {
            if left.priority >= right.priority {
                left.right = merge(left.right.take(), Some(right));
                left.update();
                Some(left)
            } else {
                right.left = merge(Some(left), right.left.take());
                right.update();
                Some(right)
            }
        }
    }
}

/// Splits a treap into its first `n` elements and the remainder.
///
/// `n == 0` yields `(None, link)`; `n >= size(&link)` yields `(link, None)`.
pub(crate) fn split<T>(link: Link<T>, n: usize) -> (Link<T>, Link<T>) {
    let Some(mut node) = link else {
        return (None, None);
    };

    let left_size = size(&node.left);
    if left_size < n {
        let (left, right) = split(node.right.take(), n - left_size - 1);
        node.right = left;
        node.update();
        (Some(node), right)
    } else {
        let (left, right) = split(node.left.take(), n);
        node.left = right;
        node.update();
        (left, Some(node))
    }
}

/// Returns the node at in-order position `index`, or `None` if the descent falls off the tree.
pub(crate) fn get<T>(link: &Link<T>, index: usize) -> Option<&Node<T>> {
    let node = link.as_deref()?;
    let left_size = size(&node.left);
    match left_size.cmp(&index) {
        Ordering::Less => get(&node.right, index - left_size - 1),
        Ordering::Greater => get(&node.left, index),
        Ordering::Equal => Some(node),
    }
}

/// Mutable counterpart of [`get`].
pub(crate) fn get_mut<T>(link: &mut Link<T>, index: usize) -> Option<&mut Node<T>> {
    let node = link.as_deref_mut()?;
    let left_size = size(&node.left);
    match left_size.cmp(&index) {
        Ordering::Less => get_mut(&mut node.right, index - left_size - 1),
        Ordering::Greater => get_mut(&mut node.left, index),
        Ordering::Equal => Some(node),
    }
}

/// Inserts `value` so that it ends up at position `index`.
///
/// An `index` past the end appends.
pub(crate) fn insert<T>(root: &mut Link<T>, index: usize, value: T, priority: u64) {
    let (left, right) = split(root.take(), index);
    let middle = Some(Node::new(value, priority));
    *root = merge(merge(left, middle), right);
}

/// Removes and returns the value at position `index`.
///
/// On failure the tree is left holding exactly the elements it held before.
pub(crate) fn remove<T>(root: &mut Link<T>, index: usize) -> Result<T, IndexNotFound> {
    let (left, right) = split(root.take(), index);
    if right.is_none() {
        let len = size(&left);
        *root = left;
        return Err(IndexNotFound { index, len });
    }

    let (middle, rest) = split(right, 1);
    *root = merge(left, rest);
    let node = middle.expect("`remove()` - splitting a non-empty treap at 1 yields a node");
    Ok(node.value)
}

/// Overwrites the value at position `index` in place, returning the previous value.
pub(crate) fn set<T>(root: &mut Link<T>, index: usize, value: T) -> Result<T, IndexNotFound> {
    let len = size(root);
    match get_mut(root, index) {
        Some(node) => Ok(mem::replace(&mut node.value, value)),
        None => Err(IndexNotFound { index, len }),
    }
}
