use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Bound, Index, IndexMut, RangeBounds};

use rand::{RngCore, SeedableRng};

use crate::IndexNotFound;
use crate::priority::{self, DefaultRng};
use crate::raw::RawTreap;

mod dump;
mod iter;

pub use dump::TreeDump;
pub use iter::{IntoIter, Iter, IterMut};

/// Unwraps a raw-layer result, turning an out-of-range index into a panic.
#[inline]
#[track_caller]
fn or_panic<T>(result: Result<T, IndexNotFound>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

/// Resolves `range` against a sequence of length `len` into `start..end`.
///
/// # Panics
///
/// Panics if the start is greater than the end or the end is greater than `len`.
#[track_caller]
fn resolve_range<R: RangeBounds<usize>>(range: &R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1).expect("range start overflows usize"),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1).expect("range end overflows usize"),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    assert!(start <= end, "range starts at {start} but ends at {end} in TreapVec");
    assert!(end <= len, "range end {end} out of range for TreapVec of length {len}");
    (start, end)
}

/// A growable, index-addressable sequence backed by an implicit-key [treap].
///
/// Elements are kept in the order they were placed, like a [`Vec`], but the storage is a
/// randomized balanced binary tree in which a node's position *is* its key. Reading,
/// writing, inserting or removing at any index takes expected O(log n) time rather than
/// shifting a contiguous buffer.
///
/// `TreapVec` has value semantics. [`Clone`] is O(1): both copies share the same tree
/// until one of them is mutated, at which point that copy pays O(n) once to take its own
/// deep copy. Every structural mutation performs this check first.
///
/// Out-of-range indices are a bug in the caller: [`insert`](TreapVec::insert),
/// [`remove`](TreapVec::remove), [`set`](TreapVec::set) and indexing panic, while
/// [`get`](TreapVec::get) and friends return `None`.
///
/// # Examples
///
/// ```
/// use treap_vec::TreapVec;
///
/// let mut seq = TreapVec::new();
/// seq.push_back(1);
/// seq.push_back(2);
/// seq.push_back(3);
/// assert_eq!(seq.to_vec(), [1, 2, 3]);
///
/// seq.insert(0, 0);
/// assert_eq!(seq.to_vec(), [0, 1, 2, 3]);
///
/// assert_eq!(seq.remove(2), 2);
/// assert_eq!(seq.to_vec(), [0, 1, 3]);
///
/// seq[1] = 9;
/// assert_eq!(seq.filter(|&v| v > 3).to_vec(), [9]);
/// ```
///
/// A `TreapVec` with a known list of items can be initialized from an array:
///
/// ```
/// use treap_vec::TreapVec;
///
/// let seq = TreapVec::from([0, 1, 2, 3, 4]);
/// assert_eq!(seq[4], 4);
/// ```
///
/// # Priorities
///
/// Each inserted element draws a random priority that decides the tree's shape. The
/// generator is the `R` parameter: [`TreapVec::new`] seeds a [`DefaultRng`] from
/// entropy, [`TreapVec::with_seed`] makes the shape reproducible, and
/// [`TreapVec::with_rng`] accepts any [`RngCore`].
///
/// # Threads
///
/// Mutation needs `&mut self`, and a shared tree is always cloned before it is written,
/// so clones may be read from different threads while another clone is mutated. Two
/// threads may never mutate the same `TreapVec` without external synchronization.
///
/// [treap]: https://en.wikipedia.org/wiki/Treap
pub struct TreapVec<T, R = DefaultRng> {
    raw: RawTreap<T, R>,
}

impl<T> TreapVec<T> {
    /// Makes a new, empty `TreapVec` with a freshly seeded priority generator.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let mut seq = TreapVec::new();
    /// seq.push_back("a");
    /// assert_eq!(seq.len(), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(priority::fresh())
    }

    /// Makes a new, empty `TreapVec` whose priorities come from a generator seeded with `seed`.
    ///
    /// Two sequences built with the same seed and the same operations have the same shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let mut a = TreapVec::with_seed(7);
    /// let mut b = TreapVec::with_seed(7);
    /// a.extend([1, 2, 3]);
    /// b.extend([1, 2, 3]);
    /// assert_eq!(a.tree_dump().to_string(), b.tree_dump().to_string());
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(priority::seeded(seed))
    }

    /// Creates a `TreapVec` holding `n` clones of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let seq = TreapVec::from_elem(10, 100);
    /// assert_eq!(seq.len(), 100);
    /// assert!(seq.iter().all(|&v| v == 10));
    /// ```
    #[must_use]
    pub fn from_elem(value: T, n: usize) -> Self
    where
        T: Clone,
    {
        let mut seq = Self::new();
        seq.extend(core::iter::repeat_n(value, n));
        seq
    }
}

impl<T, R> TreapVec<T, R> {
    /// Makes a new, empty `TreapVec` drawing node priorities from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    /// use treap_vec::priority::seeded;
    ///
    /// let mut seq = TreapVec::with_rng(seeded(1));
    /// seq.push_back('x');
    /// assert_eq!(seq.first(), Some(&'x'));
    /// ```
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        TreapVec {
            raw: RawTreap::with_rng(rng),
        }
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the sequence contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns a reference to the element at `index`, or `None` if it is out of range.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let seq = TreapVec::from([10, 40, 30]);
    /// assert_eq!(seq.get(1), Some(&40));
    /// assert_eq!(seq.get(3), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.raw.get(index)
    }

    /// Returns the first element, or `None` if the sequence is empty.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the last element, or `None` if the sequence is empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Returns `true` if the sequence contains an element equal to `value`.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Removes all elements.
    ///
    /// A tree shared with a clone is released rather than copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let mut a = TreapVec::from([1, 2]);
    /// let b = a.clone();
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert_eq!(b.len(), 2);
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns an in-order iterator over the elements.
    ///
    /// The iterator is double-ended and can be cloned to restart from its current position.
    ///
    /// # Complexity
    ///
    /// O(log n) to create, amortized O(1) per element.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let seq = TreapVec::from([1, 2, 3]);
    /// let mut iter = seq.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next_back(), Some(&3));
    /// assert_eq!(iter.len(), 1);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.raw.root(), self.len())
    }

    /// Returns a displayable view of the underlying tree.
    ///
    /// The tree is drawn on its side: right subtrees above their parent, left subtrees below.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let seq = TreapVec::from([7]);
    /// assert_eq!(seq.tree_dump().to_string(), "|<7>\n");
    /// assert_eq!(TreapVec::<i32>::new().tree_dump().to_string(), "<Empty>");
    /// ```
    pub fn tree_dump(&self) -> TreeDump<'_, T> {
        TreeDump::new(self.raw.root())
    }
}

impl<T: Clone, R: RngCore> TreapVec<T, R> {
    /// Returns a mutable reference to the element at `index`, or `None` if it is out of range.
    ///
    /// # Complexity
    ///
    /// O(log n), plus O(n) once if the tree is shared with a clone.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.raw.get_mut(index)
    }

    /// Appends an element to the back of the sequence.
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let mut seq = TreapVec::from([1]);
    /// seq.push_back(2);
    /// assert_eq!(seq.to_vec(), [1, 2]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        or_panic(self.raw.insert(self.len(), value));
    }

    /// Prepends an element to the front of the sequence.
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let mut seq = TreapVec::from([1]);
    /// seq.push_front(0);
    /// assert_eq!(seq.to_vec(), [0, 1]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        or_panic(self.raw.insert(0, value));
    }

    /// Inserts an element at position `index`, shifting all elements after it to the right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let mut seq = TreapVec::from([1, 3]);
    /// seq.insert(1, 2);
    /// seq.insert(3, 4);
    /// assert_eq!(seq.to_vec(), [1, 2, 3, 4]);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        or_panic(self.raw.insert(index, value));
    }

    /// Removes and returns the element at position `index`, shifting all elements after it
    /// to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let mut seq = TreapVec::from([1, 2, 3]);
    /// assert_eq!(seq.remove(1), 2);
    /// assert_eq!(seq.to_vec(), [1, 3]);
    /// ```
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        or_panic(self.raw.remove(index))
    }

    /// Overwrites the element at position `index` in place and returns the previous value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let mut seq = TreapVec::from([0, 1, 3]);
    /// assert_eq!(seq.set(1, 9), 1);
    /// assert_eq!(seq.to_vec(), [0, 9, 3]);
    /// ```
    #[track_caller]
    pub fn set(&mut self, index: usize, value: T) -> T {
        or_panic(self.raw.set(index, value))
    }

    /// Removes the first element and returns it, or `None` if the sequence is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.raw.remove(0).ok()
    }

    /// Removes the last element and returns it, or `None` if the sequence is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let index = self.len().checked_sub(1)?;
        self.raw.remove(index).ok()
    }

    /// Removes the elements in `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range starts after it ends or ends after the end of the sequence.
    ///
    /// # Complexity
    ///
    /// Expected O(log n) for the restructuring, plus dropping the removed elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let mut seq = TreapVec::from([0, 1, 2, 3, 4, 5]);
    /// seq.remove_range(1..3);
    /// assert_eq!(seq.to_vec(), [0, 3, 4, 5]);
    /// seq.remove_range(2..);
    /// assert_eq!(seq.to_vec(), [0, 3]);
    /// ```
    #[track_caller]
    pub fn remove_range<Rg: RangeBounds<usize>>(&mut self, range: Rg) {
        let (start, end) = resolve_range(&range, self.len());
        self.raw.remove_range(start, end);
    }

    /// Removes the first `k` elements.
    ///
    /// # Panics
    ///
    /// Panics if `k > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let mut seq = TreapVec::from([1, 2, 3, 4]);
    /// seq.remove_first(3);
    /// assert_eq!(seq.to_vec(), [4]);
    /// ```
    #[track_caller]
    pub fn remove_first(&mut self, k: usize) {
        self.remove_range(..k);
    }

    /// Retains only the elements for which `f` returns `true`, preserving their order.
    ///
    /// `f` sees every element exactly once, front to back. Rejected elements are then
    /// removed from the back towards the front.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let mut seq = TreapVec::from([1, 2, 3, 4, 5, 6]);
    /// seq.retain(|&v| v % 2 == 0);
    /// assert_eq!(seq.to_vec(), [2, 4, 6]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let keep: Vec<bool> = self.iter().map(&mut f).collect();
        for (index, _) in keep.iter().enumerate().rev().filter(|&(_, &kept)| !kept) {
            or_panic(self.raw.remove(index));
        }
    }

    /// Removes every element for which `predicate` returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let mut seq = TreapVec::from(["a", "bb", "c"]);
    /// seq.remove_all_where(|s| s.len() > 1);
    /// assert_eq!(seq.to_vec(), ["a", "c"]);
    /// ```
    pub fn remove_all_where<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(|value| !predicate(value));
    }

    /// Inserts every element of `iter` starting at position `index`, keeping their order.
    ///
    /// The source is fully collected before the sequence is touched. To insert a copy of
    /// the sequence into itself, pass a snapshot such as `seq.to_vec()`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let mut seq = TreapVec::from([0, 1, 2, 3]);
    /// let snapshot = seq.to_vec();
    /// seq.insert_many(3, snapshot);
    /// assert_eq!(seq.to_vec(), [0, 1, 2, 0, 1, 2, 3, 3]);
    /// ```
    #[track_caller]
    pub fn insert_many<I>(&mut self, index: usize, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        if index > self.len() {
            panic!("{}", IndexNotFound { index, len: self.len() });
        }

        let snapshot: Vec<T> = iter.into_iter().collect();
        for (offset, value) in snapshot.into_iter().enumerate() {
            or_panic(self.raw.insert(index + offset, value));
        }
    }

    /// Moves all the elements of `other` to the back of `self`, leaving `other` empty.
    ///
    /// # Complexity
    ///
    /// Expected O(log n + log m), plus O(m) once if `other` shares its tree with a clone.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let mut a = TreapVec::from([1, 2]);
    /// let mut b = TreapVec::from([3, 4]);
    /// a.append(&mut b);
    /// assert_eq!(a.to_vec(), [1, 2, 3, 4]);
    /// assert!(b.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        self.raw.append(&mut other.raw);
    }

    /// Splits the sequence in two at `at`.
    ///
    /// `self` keeps `[0, at)` and the returned sequence holds `[at, len)`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let mut seq = TreapVec::from([1, 2, 3]);
    /// let tail = seq.split_off(1);
    /// assert_eq!(seq.to_vec(), [1]);
    /// assert_eq!(tail.to_vec(), [2, 3]);
    /// ```
    #[must_use = "use `.remove_range(at..)` if you don't need the other half"]
    #[track_caller]
    pub fn split_off(&mut self, at: usize) -> Self
    where
        R: SeedableRng,
    {
        TreapVec {
            raw: or_panic(self.raw.split_off(at)),
        }
    }

    /// Returns an in-order iterator that allows modifying each element.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let mut seq = TreapVec::from([1, 2, 3]);
    /// for v in seq.iter_mut() {
    ///     *v *= 10;
    /// }
    /// assert_eq!(seq.to_vec(), [10, 20, 30]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let len = self.len();
        IterMut::new(self.raw.make_unique(), len)
    }

    /// Copies the elements, in order, into a new `Vec`.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Returns a new sequence holding clones of the elements for which `predicate` returns
    /// `true`, in their original order.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let seq = TreapVec::from([0, 9, 3]);
    /// let big = seq.filter(|&v| v > 3);
    /// assert_eq!(big.to_vec(), [9]);
    /// assert_eq!(seq.len(), 3);
    /// ```
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
        R: SeedableRng,
    {
        self.iter().filter(|&value| predicate(value)).cloned().collect()
    }
}

impl<T, R: Clone> Clone for TreapVec<T, R> {
    /// Returns a copy sharing this sequence's tree. Nothing is copied until one side mutates.
    fn clone(&self) -> Self {
        TreapVec { raw: self.raw.clone() }
    }
}

impl<T: Hash, R> Hash for TreapVec<T, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: PartialEq, R> PartialEq for TreapVec<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, R> Eq for TreapVec<T, R> {}

impl<T: PartialOrd, R> PartialOrd for TreapVec<T, R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, R> Ord for TreapVec<T, R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: fmt::Debug, R> fmt::Debug for TreapVec<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, R: SeedableRng> Default for TreapVec<T, R> {
    fn default() -> Self {
        TreapVec::with_rng(R::seed_from_u64(priority::fresh_seed()))
    }
}

impl<T: Clone, R: RngCore + SeedableRng> FromIterator<T> for TreapVec<T, R> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = TreapVec::default();
        seq.extend(iter);
        seq
    }
}

impl<T: Clone, R: RngCore> Extend<T> for TreapVec<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy, R: RngCore> Extend<&'a T> for TreapVec<T, R> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T, R> IntoIterator for &'a TreapVec<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T: Clone, R: RngCore> IntoIterator for &'a mut TreapVec<T, R> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: Clone, R> IntoIterator for TreapVec<T, R> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an owning iterator over the elements in order.
    ///
    /// The tree is only copied if it is still shared with a clone.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_vec::TreapVec;
    ///
    /// let seq = TreapVec::from(["a", "b"]);
    /// let mut iter = seq.into_iter();
    /// assert_eq!(iter.next(), Some("a"));
    /// assert_eq!(iter.next_back(), Some("b"));
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        let len = self.len();
        IntoIter::new(self.raw.into_root(), len)
    }
}

impl<T, R> Index<usize> for TreapVec<T, R> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!("{}", IndexNotFound { index, len: self.len() }),
        }
    }
}

impl<T: Clone, R: RngCore> IndexMut<usize> for TreapVec<T, R> {
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("{}", IndexNotFound { index, len }),
        }
    }
}

impl<T: Clone, const N: usize> From<[T; N]> for TreapVec<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T: Clone> From<Vec<T>> for TreapVec<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for TreapVec<T> {
    fn from(slice: &[T]) -> Self {
        slice.iter().cloned().collect()
    }
}

impl<T, R> From<TreapVec<T, R>> for Vec<T>
where
    T: Clone,
{
    fn from(seq: TreapVec<T, R>) -> Self {
        seq.into_iter().collect()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolve_range_bounds() {
        assert_eq!(resolve_range(&(..), 5), (0, 5));
        assert_eq!(resolve_range(&(1..=2), 5), (1, 3));
        assert_eq!(resolve_range(&(Bound::Excluded(1), Bound::Unbounded), 5), (2, 5));
        assert_eq!(resolve_range(&(5..5), 5), (5, 5));
    }

    #[test]
    #[should_panic(expected = "range starts at 3 but ends at 2 in TreapVec")]
    fn resolve_range_inverted() {
        #[allow(clippy::reversed_empty_ranges)]
        let _ = resolve_range(&(3..2), 5);
    }

    #[test]
    #[should_panic(expected = "range end 6 out of range for TreapVec of length 5")]
    fn resolve_range_past_end() {
        let _ = resolve_range(&(0..6), 5);
    }

    #[test]
    fn mutation_keeps_invariants() {
        let mut seq = TreapVec::with_seed(3);
        for v in 0..200 {
            seq.push_front(v);
        }
        seq.raw.validate_invariants();

        seq.retain(|v| v % 3 != 0);
        seq.raw.validate_invariants();

        seq.insert_many(10, 1000..1050);
        seq.raw.validate_invariants();

        seq.remove_range(5..60);
        seq.raw.validate_invariants();
        assert_eq!(seq.len(), seq.iter().count());
    }

    #[test]
    fn clones_share_until_mutated() {
        let mut a = TreapVec::from([1, 2, 3]);
        let b = a.clone();
        assert!(!a.raw.is_unique());

        let _ = a.get(0);
        assert!(!a.raw.is_unique());

        a.push_back(4);
        assert!(a.raw.is_unique());
        assert_eq!(b.to_vec(), [1, 2, 3]);
    }

    #[test]
    fn vec_from_treap_vec() {
        let seq = TreapVec::from(alloc::vec![5, 6, 7]);
        let vec: Vec<i32> = seq.into();
        assert_eq!(vec, [5, 6, 7]);
    }
}
