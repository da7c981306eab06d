//! Memory for list nodes.
//!
//! A [`List`](crate::List) obtains one allocation per node from its parent
//! allocator and gives it back when the node is unlinked. Any implementation
//! of [`Allocator`] will do, including `&bumpalo::Bump`.

pub use allocator_api2::alloc::Allocator;
pub use allocator_api2::alloc::Global;

use core::alloc::Layout;
use core::ptr::NonNull;
use crate::Error;
use crate::Fail;
use crate::ptr;

/// Moves `value` into a fresh allocation from `allocator`.

#[inline(always)]
pub(crate) fn alloc_init<A, E, T>(allocator: &A, value: T) -> Result<NonNull<T>, E>
where
  A: Allocator,
  E: Fail,
{
  let l = Layout::new::<T>();

  let Ok(p) = allocator.allocate(l) else {
    return E::fail(Error::ParentAllocatorFailed(l));
  };

  let p = ptr::cast(p);
  unsafe { ptr::write(p, value) };
  Ok(p)
}

/// Moves the value out of an allocation and frees it.
///
/// # Safety
///
/// `p` must have been returned by [`alloc_init`] with the same allocator, and
/// must not have been taken already.

#[inline(always)]
pub(crate) unsafe fn take<A, T>(allocator: &A, p: NonNull<T>) -> T
where
  A: Allocator,
{
  let x = ptr::read(p);
  allocator.deallocate(ptr::cast(p), Layout::new::<T>());
  x
}
