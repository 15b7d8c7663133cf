//! Lazy per-instance memoization.
//!
//! A [`Memo`] is a single cache slot owned by one instance: the first read
//! runs the computation and stores the result, every later read returns the
//! stored value without running the computation again.

use std::cell::OnceCell;

/// A lazily-computed, cached value.
///
/// Embed one `Memo<T>` field per memoized property of the owning type; the
/// field is the cache slot for that (instance, property) pair. The slot is
/// either empty or holds exactly the first computed value. There is no
/// invalidation: the cached value lives as long as the owning instance.
///
/// `Memo` is single-threaded (`!Sync`). A failed fallible computation
/// leaves the slot empty, so the next read retries.
#[derive(Debug)]
pub struct Memo<T> {
    slot: OnceCell<T>,
}

impl<T> Memo<T> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            slot: OnceCell::new(),
        }
    }

    /// Peek at the cached value without computing it.
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Whether the slot already holds a value.
    pub fn is_computed(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Return the cached value, computing and storing it on first access.
    ///
    /// `f` is invoked at most once over the lifetime of the slot, no matter
    /// how many times this is called.
    pub fn get_or_compute<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.slot.get_or_init(f)
    }

    /// Fallible variant of [`get_or_compute`](Self::get_or_compute).
    ///
    /// If `f` fails the error propagates unchanged and nothing is cached:
    /// the next call runs its computation again. Once a computation has
    /// succeeded, later calls return the stored value without invoking `f`.
    pub fn get_or_try_compute<F, E>(&self, f: F) -> std::result::Result<&T, E>
    where
        F: FnOnce() -> std::result::Result<T, E>,
    {
        if let Some(value) = self.slot.get() {
            return Ok(value);
        }
        let value = f()?;
        Ok(self.slot.get_or_init(|| value))
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}
