use thiserror::Error;

/// A position-based operation addressed an index past the end of the treap.
///
/// The raw node algebra reports this as a recoverable error. [`TreapVec`](crate::TreapVec)
/// turns it into a panic at its public boundary, since an out-of-range index on a
/// sequence is a bug in the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
#[error("index {index} out of range for TreapVec of length {len}")]
pub struct IndexNotFound {
    /// The index that was requested.
    pub index: usize,
    /// The number of elements at the time of the request.
    pub len: usize,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_index_and_len() {
        let err = IndexNotFound { index: 5, len: 2 };
        assert_eq!(err.to_string(), "index 5 out of range for TreapVec of length 2");
    }
}
