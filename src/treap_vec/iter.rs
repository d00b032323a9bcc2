use alloc::vec::{self, Vec};
use core::fmt;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use crate::raw::{Link, Node};

// Expected treap height is about 3 * log2(n); 64 frames cover millions of elements
// before spilling to the heap.
type Stack<E> = SmallVec<[E; 64]>;

/// An iterator over the elements of a `TreapVec`.
///
/// This `struct` is created by the [`iter`] method on [`TreapVec`]. See its
/// documentation for more.
///
/// [`iter`]: crate::TreapVec::iter
/// [`TreapVec`]: crate::TreapVec
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T> {
    // Nodes still to be visited from the front; the next one is on top.
    front: Stack<&'a Node<T>>,
    // Mirror image of `front` for `next_back`.
    back: Stack<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Iter {
            front: Stack::new(),
            back: Stack::new(),
            remaining: len,
        };
        iter.descend_left(root);
        iter.descend_right(root);
        iter
    }

    fn descend_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.front.push(current);
            node = current.left();
        }
    }

    fn descend_right(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.back.push(current);
            node = current.right();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.front.pop()?;
        self.descend_left(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.back.pop()?;
        self.descend_right(node.left());
        self.remaining -= 1;
        Some(node.value())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T> Default for Iter<'_, T> {
    /// Creates an empty `treap_vec::Iter`.
    ///
    /// ```
    /// let iter: treap_vec::treap_vec::Iter<'_, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Iter::new(None, 0)
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// A mutable iterator over the elements of a `TreapVec`.
///
/// This `struct` is created by the [`iter_mut`] method on [`TreapVec`]. See its
/// documentation for more.
///
/// [`iter_mut`]: crate::TreapVec::iter_mut
/// [`TreapVec`]: crate::TreapVec
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T> {
    // Each frame is a node's value paired with its not-yet-visited right subtree.
    stack: Stack<(&'a mut T, &'a mut Link<T>)>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(root: &'a mut Link<T>, len: usize) -> Self {
        let mut iter = IterMut {
            stack: Stack::new(),
            remaining: len,
        };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, link: &'a mut Link<T>) {
        let mut node = link.as_deref_mut();
        while let Some(current) = node {
            let (value, left, right) = current.parts_mut();
            self.stack.push((value, right));
            node = left.as_deref_mut();
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let (value, right) = self.stack.pop()?;
        self.descend_left(right);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.remaining).finish()
    }
}

/// An owning iterator over the elements of a `TreapVec`.
///
/// This `struct` is created by the [`into_iter`] method on [`TreapVec`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`TreapVec`]: crate::TreapVec
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut values = Vec::with_capacity(len);
        // Values whose right subtree has not been walked yet.
        let mut pending: Vec<(T, Link<T>)> = Vec::new();
        let mut link = root;

        loop {
            while let Some(node) = link {
                let (value, left, right) = node.into_parts();
                pending.push((value, right));
                link = left;
            }
            let Some((value, right)) = pending.pop() else {
                break;
            };
            values.push(value);
            link = right;
        }

        debug_assert_eq!(values.len(), len);
        IntoIter {
            inner: values.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        IntoIter {
            inner: Vec::new().into_iter(),
        }
    }
}
