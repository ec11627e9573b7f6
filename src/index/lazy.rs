//! Cache-with-dirty-flag for derived listings
//!
//! A `LazyIndex` holds a materialized listing that is thrown away whenever the
//! source data changes and rebuilt on the next read. An empty cell is the dirty
//! flag, so a read can never observe a listing built before the last mutation.

use std::cell::OnceCell;

#[derive(Debug, Clone)]
pub struct LazyIndex<T> {
    cache: OnceCell<Vec<T>>,
}

impl<T> LazyIndex<T> {
    pub fn new() -> Self {
        Self {
            cache: OnceCell::new(),
        }
    }

    /// Mark the listing stale
    pub fn invalidate(&mut self) {
        self.cache.take();
    }

    pub fn is_dirty(&self) -> bool {
        self.cache.get().is_none()
    }

    /// Return the cached listing, running `rebuild` first if it is stale
    pub fn get_or_rebuild<F>(&self, rebuild: F) -> &[T]
    where
        F: FnOnce() -> Vec<T>,
    {
        self.cache.get_or_init(rebuild)
    }
}

impl<T> Default for LazyIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_rebuilds_only_when_dirty() {
        let rebuilds = Cell::new(0);
        let mut index: LazyIndex<u32> = LazyIndex::new();
        assert!(index.is_dirty());

        let build = || {
            rebuilds.set(rebuilds.get() + 1);
            vec![1, 2, 3]
        };

        assert_eq!(index.get_or_rebuild(build), &[1, 2, 3]);
        assert_eq!(index.get_or_rebuild(build), &[1, 2, 3]);
        assert_eq!(rebuilds.get(), 1);
        assert!(!index.is_dirty());

        index.invalidate();
        assert!(index.is_dirty());
        assert_eq!(index.get_or_rebuild(|| vec![4]), &[4]);
    }
}
