use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Shared mutable cell holding the live array value behind the schema's
/// array field.
///
/// `State<T>` is the crate's minimal stand-in for the host's reactive
/// container: `Arc<RwLock<T>>` plus a dirty flag, cheap to clone and safe
/// to capture in the selection commit callback. Mutating through
/// [`State::update`] raises the dirty flag, which is how the in-place
/// array mutation performed by a selection commit gets announced to
/// whoever drives re-renders.
///
/// # Example
///
/// ```
/// use formgrid::state::State;
/// use serde_json::json;
///
/// let rows = State::new(vec![json!({"name": "a"}), json!({"name": "b"})]);
/// rows.update(|r| r.push(json!({"name": "c"})));
/// assert_eq!(rows.read(|r| r.len()), 3);
/// assert!(rows.is_dirty());
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T> State<T> {
    /// Create a new state with the given value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Read the current value through a closure, without cloning.
    pub fn read<U>(&self, f: impl FnOnce(&T) -> U) -> U {
        let guard = match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&guard)
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.read(Clone::clone)
    }

    /// Replace the value and mark the state dirty.
    pub fn set(&self, value: T) {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = value;
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Mutate the value in place and mark the state dirty.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard);
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Check whether the value changed since the last [`State::clear_dirty`].
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag after a render pass consumed the value.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
