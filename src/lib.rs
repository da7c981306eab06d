#![doc = include_str!("../README.md")]
#![no_std]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]

extern crate alloc;

use core::alloc::Layout;
use core::fmt;

/// The backing allocator refused to provide memory for a node.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AllocError;

/// The reason [`query::single`] did not produce a record.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SingleError {
  /// The list has no elements.
  Empty,
  /// The list has more than one element.
  NotUnique,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// SUBMODULES                                                                 //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

pub mod allocator;
pub mod identity;
pub mod list;
pub mod query;

mod ptr;

pub use identity::Identity;
pub use list::IntoIter;
pub use list::Iter;
pub use list::List;
pub use list::Node;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

pub(crate) enum Error {
  ParentAllocatorFailed(Layout),
}

pub(crate) enum Panicked { }

pub(crate) trait Fail: Sized {
  fn fail<T>(_: Error) -> Result<T, Self>;
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// UTILITY FUNCTIONS                                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

#[inline(always)]
pub(crate) fn unwrap<T>(x: Result<T, Panicked>) -> T {
  match x { Ok(x) => x, Err(e) => match e { } }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Fail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl Fail for Panicked {
  #[inline(never)]
  #[cold]
  fn fail<T>(e: Error) -> Result<T, Self> {
    match e {
      Error::ParentAllocatorFailed(layout) =>
        alloc::alloc::handle_alloc_error(layout),
    }
  }
}

impl Fail for AllocError {
  #[inline(always)]
  fn fail<T>(_: Error) -> Result<T, Self> {
    Err(AllocError)
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Display                                                                    //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl fmt::Display for AllocError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("linkq: the allocator failed to allocate a node")
  }
}

impl fmt::Display for SingleError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SingleError::Empty => f.write_str("linkq: the list is empty"),
      SingleError::NotUnique => f.write_str("linkq: the list has more than one element"),
    }
  }
}

impl core::error::Error for AllocError { }

impl core::error::Error for SingleError { }
