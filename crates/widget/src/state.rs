//! Shared, interior-mutable state handles.
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Reference-counted wrapper for store state.
///
/// Borrows only last for the closure given to [`RcWrapper::with_data`] or
/// [`RcWrapper::with_data_mut`], so callers never hold one across a
/// listener call.
pub(crate) struct RcWrapper<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Clone for RcWrapper<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> RcWrapper<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    pub(crate) fn with_data<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }

    pub(crate) fn with_data_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    /// Returns a handle that does not keep the state alive.
    pub(crate) fn downgrade(&self) -> WeakWrapper<T> {
        WeakWrapper {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

/// A non-owning [`RcWrapper`].
pub(crate) struct WeakWrapper<T> {
    inner: Weak<RefCell<T>>,
}

impl<T> WeakWrapper<T> {
    pub(crate) fn upgrade(&self) -> Option<RcWrapper<T>> {
        self.inner.upgrade().map(|inner| RcWrapper { inner })
    }
}
