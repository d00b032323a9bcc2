use alloc::sync::Arc;
use core::mem;

use log::trace;
use rand::{RngCore, SeedableRng};

use super::node::{self, Link, Node};
use crate::IndexNotFound;

/// The copy-on-write treap backing `TreapVec`.
///
/// The root link sits behind an `Arc`, which doubles as the uniqueness marker: cloning a
/// `RawTreap` only bumps the count, and the first mutation through a shared root deep
/// clones the tree (priorities and sizes included) before touching it.
pub(crate) struct RawTreap<T, R> {
    /// Root of the tree, shared between clones until one of them mutates.
    root: Arc<Link<T>>,
    /// Number of elements; always equal to the root's subtree size.
    len: usize,
    /// Source of node priorities.
    rng: R,
}

impl<T, R> RawTreap<T, R> {
    /// Creates a new, empty treap drawing priorities from `rng`.
    pub(crate) fn with_rng(rng: R) -> Self {
        Self {
            root: Arc::new(None),
            len: 0,
            rng,
        }
    }

    /// Returns the number of elements in the treap.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the treap contains no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the root node, if any.
    pub(crate) fn root(&self) -> Option<&Node<T>> {
        (*self.root).as_deref()
    }

    /// Returns a reference to the element at `index`.
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        node::get(&self.root, index).map(Node::value)
    }

    /// Returns true if this treap is the only holder of its root.
    pub(crate) fn is_unique(&mut self) -> bool {
        Arc::get_mut(&mut self.root).is_some()
    }

    /// Removes all elements. A shared root is released, never cloned.
    pub(crate) fn clear(&mut self) {
        match Arc::get_mut(&mut self.root) {
            Some(root) => *root = None,
            None => self.root = Arc::new(None),
        }
        self.len = 0;
    }
}

impl<T: Clone, R: RngCore> RawTreap<T, R> {
    /// Ensures this treap exclusively owns its tree and returns the root link.
    pub(crate) fn make_unique(&mut self) -> &mut Link<T> {
        if !self.is_unique() {
            trace!("copy-on-write: cloning {} shared nodes", self.len);
        }
        Arc::make_mut(&mut self.root)
    }

    /// Returns a mutable reference to the element at `index`.
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        node::get_mut(self.make_unique(), index).map(Node::value_mut)
    }

    /// Inserts `value` at `index`, shifting later elements up by one.
    pub(crate) fn insert(&mut self, index: usize, value: T) -> Result<(), IndexNotFound> {
        if index > self.len {
            return Err(IndexNotFound { index, len: self.len });
        }

        let priority = self.rng.next_u64();
        node::insert(self.make_unique(), index, value, priority);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub(crate) fn remove(&mut self, index: usize) -> Result<T, IndexNotFound> {
        if index >= self.len {
            return Err(IndexNotFound { index, len: self.len });
        }

        let value = node::remove(self.make_unique(), index)?;
        self.len -= 1;
        Ok(value)
    }

    /// Replaces the element at `index`, returning the previous one.
    pub(crate) fn set(&mut self, index: usize, value: T) -> Result<T, IndexNotFound> {
        if index >= self.len {
            return Err(IndexNotFound { index, len: self.len });
        }
        node::set(self.make_unique(), index, value)
    }

    /// Removes the elements in `start..end`.
    ///
    /// The caller guarantees `start <= end <= len`.
    pub(crate) fn remove_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.len, "remove_range: {start}..{end} with len {}", self.len);
        if start == end {
            return;
        }

        trace!("removing range {start}..{end} of {}", self.len);
        let root = self.make_unique();
        let (left, rest) = node::split(root.take(), start);
        let (removed, right) = node::split(rest, end - start);
        *root = node::merge(left, right);
        drop(removed);
        self.len -= end - start;
    }

    /// Moves every element of `other` to the end of `self`, leaving `other` empty.
    pub(crate) fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }

        trace!("appending {} elements to {}", other.len, self.len);
        let other_len = mem::take(&mut other.len);
        let other_root = Arc::unwrap_or_clone(mem::replace(&mut other.root, Arc::new(None)));
        let root = self.make_unique();
        *root = node::merge(root.take(), other_root);
        self.len += other_len;
    }

    /// Splits the treap at `at`: `self` keeps `[0, at)` and the returned treap holds `[at, len)`.
    pub(crate) fn split_off(&mut self, at: usize) -> Result<Self, IndexNotFound>
    where
        R: SeedableRng,
    {
        if at > self.len {
            return Err(IndexNotFound { index: at, len: self.len });
        }

        trace!("splitting {} elements at {at}", self.len);
        let rng = R::seed_from_u64(self.rng.next_u64());
        let root = self.make_unique();
        let (left, right) = node::split(root.take(), at);
        *root = left;

        let tail = Self {
            root: Arc::new(right),
            len: self.len - at,
            rng,
        };
        self.len = at;
        Ok(tail)
    }
}

impl<T: Clone, R> RawTreap<T, R> {
    /// Consumes the treap and returns its tree, cloning it only if it is still shared.
    pub(crate) fn into_root(self) -> Link<T> {
        Arc::unwrap_or_clone(self.root)
    }
}

impl<T, R: Clone> Clone for RawTreap<T, R> {
    fn clone(&self) -> Self {
        Self {
            root: Arc::clone(&self.root),
            len: self.len,
            rng: self.rng.clone(),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::priority::{self, DefaultRng};
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    impl<T: Clone, R> RawTreap<T, R> {
        /// Validates the size, heap and length invariants. Panics with a descriptive
        /// message if any are violated.
        pub(crate) fn validate_invariants(&self) {
            fn walk<T>(node: Option<&Node<T>>) -> usize {
                let Some(node) = node else {
                    return 0;
                };
                for child in [node.left(), node.right()].into_iter().flatten() {
                    assert!(node.priority() >= child.priority(), "heap order violated");
                }
                let size = walk(node.left()) + walk(node.right()) + 1;
                assert_eq!(node.size(), size, "cached size does not match subtree");
                size
            }

            let counted = walk(self.root());
            assert_eq!(self.len, counted, "len does not match number of nodes");
        }

        pub(crate) fn to_vec(&self) -> Vec<T> {
            fn walk<T: Clone>(node: Option<&Node<T>>, out: &mut Vec<T>) {
                if let Some(node) = node {
                    walk(node.left(), out);
                    out.push(node.value().clone());
                    walk(node.right(), out);
                }
            }

            let mut out = Vec::with_capacity(self.len);
            walk(self.root(), &mut out);
            out
        }
    }

    fn raw_from(values: &[u32]) -> RawTreap<u32, DefaultRng> {
        let mut raw = RawTreap::with_rng(priority::seeded(7));
        for &value in values {
            raw.insert(raw.len(), value).unwrap();
        }
        raw
    }

    #[test]
    fn index_errors_carry_len() {
        let mut raw = raw_from(&[1, 2]);
        assert_eq!(raw.insert(3, 0), Err(IndexNotFound { index: 3, len: 2 }));
        assert_eq!(raw.remove(2), Err(IndexNotFound { index: 2, len: 2 }));
        assert_eq!(raw.set(5, 0), Err(IndexNotFound { index: 5, len: 2 }));
        assert!(raw.split_off(3).is_err());
        assert_eq!(raw.to_vec(), [1, 2]);
        raw.validate_invariants();
    }

    #[test]
    fn clone_shares_until_write() {
        let mut a = raw_from(&[1, 2, 3]);
        let mut b = a.clone();
        assert!(!a.is_unique());

        b.set(0, 10).unwrap();
        assert!(a.is_unique());
        assert!(b.is_unique());
        assert_eq!(a.to_vec(), [1, 2, 3]);
        assert_eq!(b.to_vec(), [10, 2, 3]);
    }

    #[test]
    fn clear_releases_shared_root() {
        let mut a = raw_from(&[1, 2, 3]);
        let b = a.clone();
        a.clear();
        assert!(a.is_empty());
        assert_eq!(b.to_vec(), [1, 2, 3]);
        a.validate_invariants();
    }

    #[test]
    fn append_from_shared_source_leaves_source_intact() {
        let mut a = raw_from(&[1, 2]);
        let mut b = raw_from(&[3, 4]);
        let keep = b.clone();

        a.append(&mut b);
        assert_eq!(a.to_vec(), [1, 2, 3, 4]);
        assert!(b.is_empty());
        assert_eq!(keep.to_vec(), [3, 4]);
        a.validate_invariants();
        b.validate_invariants();
    }

    #[test]
    fn into_root_of_shared_treap_clones() {
        let a = raw_from(&[1, 2, 3]);
        let b = a.clone();
        let root = a.into_root();
        assert_eq!(node::size(&root), 3);
        assert_eq!(b.to_vec(), [1, 2, 3]);
    }

    proptest! {
        #[test]
        fn raw_treap_behaves_like_vec(operations in prop::collection::vec(strategy(), 0..256)) {
            let mut model: Vec<u32> = Vec::new();
            let mut raw: RawTreap<u32, DefaultRng> = RawTreap::with_rng(priority::seeded(1));
            let mut snapshot: Option<(RawTreap<u32, DefaultRng>, Vec<u32>)> = None;

            for operation in operations {
                match operation {
                    Operation::Insert(which, value) => {
                        let index = which % (model.len() + 1);
                        raw.insert(index, value).unwrap();
                        model.insert(index, value);
                    }
                    Operation::Remove(which) => {
                        if model.is_empty() {
                            continue;
                        }
                        let index = which % model.len();
                        prop_assert_eq!(raw.remove(index), Ok(model.remove(index)));
                    }
                    Operation::Set(which, value) => {
                        if model.is_empty() {
                            continue;
                        }
                        let index = which % model.len();
                        prop_assert_eq!(raw.set(index, value), Ok(core::mem::replace(&mut model[index], value)));
                    }
                    Operation::RemoveRange(a, b) => {
                        let a = a % (model.len() + 1);
                        let b = b % (model.len() + 1);
                        let (start, end) = (a.min(b), a.max(b));
                        raw.remove_range(start, end);
                        model.drain(start..end);
                    }
                    Operation::SplitAppend(which) => {
                        let at = which % (model.len() + 1);
                        let mut tail = raw.split_off(at).unwrap();
                        tail.validate_invariants();
                        prop_assert_eq!(tail.len(), model.len() - at);
                        raw.validate_invariants();
                        raw.append(&mut tail);
                    }
                    Operation::Snapshot => {
                        snapshot = Some((raw.clone(), model.clone()));
                    }
                    Operation::Clear => {
                        raw.clear();
                        model.clear();
                    }
                }

                raw.validate_invariants();
                prop_assert_eq!(raw.len(), model.len());
                prop_assert_eq!(raw.is_empty(), model.is_empty());
                if let Some((copy, expected)) = &snapshot {
                    prop_assert_eq!(&copy.to_vec(), expected);
                }
            }

            prop_assert_eq!(raw.to_vec(), model);
        }
    }

    #[derive(Clone, Debug)]
    enum Operation {
        Insert(usize, u32),
        Remove(usize),
        Set(usize, u32),
        RemoveRange(usize, usize),
        SplitAppend(usize),
        Snapshot,
        Clear,
    }

    fn strategy() -> impl Strategy<Value = Operation> {
        prop_oneof![
            20 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::Insert(which, value)),
            8 => any::<usize>().prop_map(Operation::Remove),
            5 => (any::<usize>(), any::<u32>()).prop_map(|(which, value)| Operation::Set(which, value)),
            2 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Operation::RemoveRange(a, b)),
            2 => any::<usize>().prop_map(Operation::SplitAppend),
            2 => Just(Operation::Snapshot),
            1 => Just(Operation::Clear),
        ]
    }
}
