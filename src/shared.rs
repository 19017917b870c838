//! Interrupt-safe home for the controller.
//!
//! ```
//! use segment_counter::Shared;
//!
//! static COUNTER: Shared<u8> = Shared::new();
//!
//! COUNTER.install(41);
//! assert_eq!(COUNTER.with(|n| { *n += 1; *n }), Some(42));
//! ```

use core::cell::RefCell;
use critical_section::Mutex;

/// A value shared between interrupt handlers and the background loop.
///
/// Every access runs inside a critical section, so a handler always sees the
/// value either before or after another handler's complete update.
pub struct Shared<T> {
    inner: Mutex<RefCell<Option<T>>>,
}

impl<T> Shared<T> {
    /// Creates an empty cell, usable in a `static`.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Stores `value`, returning the previous one.
    pub fn install(&self, value: T) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).replace(value))
    }

    /// Runs `f` on the value inside a critical section.
    ///
    /// Returns `None` if nothing has been installed yet, which lets
    /// interrupts that fire before initialisation return immediately.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }

    /// Removes and returns the value.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).take())
    }

    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }
}

impl<T> Default for Shared<T> {
    fn default() -> Self {
        Self::new()
    }
}
