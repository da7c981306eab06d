//! Matching records by address rather than by value.
//!
//! [`List::remove`](crate::List::remove) and
//! [`List::previous_of`](crate::List::previous_of) look for the node holding
//! *the same* payload as their key. Two distinct payloads with equal contents
//! never match.
//!
//! The key only has to point at the payload; it need not have the record's
//! type or lifetime.

use alloc::rc::Rc;
#[cfg(target_has_atomic = "ptr")]
use alloc::sync::Arc;
use core::ptr::NonNull;

/// A handle whose identity is the address it points at.

pub trait Identity {
  /// The address of the payload, with any metadata discarded.

  fn addr(&self) -> *const ();

  /// Returns `true` if both handles refer to the same payload.

  #[inline(always)]
  fn same<K>(&self, other: &K) -> bool
  where
    K: Identity + ?Sized
  {
    self.addr() == other.addr()
  }
}

impl<'a, T: ?Sized> Identity for &'a T {
  #[inline(always)]
  fn addr(&self) -> *const () {
    (*self as *const T).cast()
  }
}

impl<'a, T: ?Sized> Identity for &'a mut T {
  #[inline(always)]
  fn addr(&self) -> *const () {
    (&**self as *const T).cast()
  }
}

impl<T: ?Sized> Identity for *const T {
  #[inline(always)]
  fn addr(&self) -> *const () {
    self.cast()
  }
}

impl<T: ?Sized> Identity for *mut T {
  #[inline(always)]
  fn addr(&self) -> *const () {
    self.cast_const().cast()
  }
}

impl<T: ?Sized> Identity for NonNull<T> {
  #[inline(always)]
  fn addr(&self) -> *const () {
    self.as_ptr().cast_const().cast()
  }
}

impl<T: ?Sized> Identity for Rc<T> {
  #[inline(always)]
  fn addr(&self) -> *const () {
    Rc::as_ptr(self).cast()
  }
}

#[cfg(target_has_atomic = "ptr")]
impl<T: ?Sized> Identity for Arc<T> {
  #[inline(always)]
  fn addr(&self) -> *const () {
    Arc::as_ptr(self).cast()
  }
}
