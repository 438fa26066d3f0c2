//! Lock shim over `std::sync::Mutex` or `spin::Mutex`.

#[cfg(feature = "std")]
type Inner<T> = std::sync::Mutex<T>;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
type Inner<T> = spin::Mutex<T>;

/// A mutex that hands out access through a closure, with the same API on both
/// backends.
pub struct Mutex<T>(Inner<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(Inner::new(value))
    }

    /// Runs `f` with exclusive access to the value. A poisoned std lock is
    /// recovered.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        #[cfg(feature = "std")]
        let mut guard = self
            .0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        #[cfg(all(not(feature = "std"), feature = "alloc"))]
        let mut guard = self.0.lock();

        f(&mut guard)
    }
}
