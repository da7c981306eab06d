//! A singly-linked list of records.
//!
//! The list owns its nodes; each node owns one record by value. Records are
//! usually handles (`&P`, `Rc<P>`, `NonNull<P>`, ...) to payloads that the
//! caller manages, so dropping or clearing a list releases the handles but
//! never the payloads behind them.
//!
//! The list is identified by its first node only. Appending, measuring, and
//! finding the tail are all `O(n)` walks from the head.

use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;
use crate::AllocError;
use crate::Fail;
use crate::Identity;
use crate::allocator;
use crate::allocator::Allocator;
use crate::allocator::Global;
use crate::ptr;
use crate::unwrap;

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PUBLIC TYPE AND TRAIT DEFINITIONS                                          //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

/// An insertion-ordered, singly-linked list whose nodes are allocated from
/// `A`.

pub struct List<T, A: Allocator = Global> {
  head: Link<T>,
  allocator: A,
  _owns: PhantomData<Node<T>>,
}

unsafe impl<T, A: Allocator> Send for List<T, A> where T: Send, A: Send { }

unsafe impl<T, A: Allocator> Sync for List<T, A> where T: Sync, A: Sync { }

/// A single link in a [`List`].
///
/// Nodes are only ever seen through shared references handed out by the list.

pub struct Node<T> {
  next: Link<T>,
  record: T,
}

unsafe impl<T> Sync for Node<T> where T: Sync { }

/// Borrowing iterator over the records of a [`List`], head to tail.

pub struct Iter<'a, T> {
  next: Link<T>,
  _borrows: PhantomData<&'a Node<T>>,
}

unsafe impl<'a, T> Send for Iter<'a, T> where T: Sync { }

unsafe impl<'a, T> Sync for Iter<'a, T> where T: Sync { }

/// Owning iterator over the records of a [`List`], head to tail.

pub struct IntoIter<T, A: Allocator = Global>(List<T, A>);

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// PRIVATE TYPE AND TRAIT DEFINITIONS                                         //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

type Link<T> = Option<NonNull<Node<T>>>;

// Appends at the end of a list without re-walking it for every record.

pub(crate) struct Tail<'a, T, A: Allocator> {
  link: NonNull<Link<T>>,
  allocator: &'a A,
  _borrows: PhantomData<&'a mut Link<T>>,
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Tail                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T, A: Allocator> Tail<'a, T, A> {
  pub(crate) fn new(list: &'a mut List<T, A>) -> Self {
    let mut link = ptr::from_mut(&mut list.head);

    while let Some(p) = unsafe { ptr::read(link) } {
      link = ptr::from_mut(unsafe { &mut ptr::as_mut_ref(p).next });
    }

    Self { link, allocator: &list.allocator, _borrows: PhantomData }
  }

  #[inline(always)]
  pub(crate) fn push<E: Fail>(&mut self, record: T) -> Result<(), E> {
    let p = allocator::alloc_init(self.allocator, Node { next: None, record })?;

    // SAFETY:
    //
    // `link` is the `next` field of the last node (or the head field of an
    // empty list), so it currently holds `None` and nothing else refers to it.

    unsafe { ptr::write(self.link, Some(p)) };
    self.link = ptr::from_mut(unsafe { &mut ptr::as_mut_ref(p).next });
    Ok(())
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// List                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> List<T, Global> {
  /// Creates an empty list backed by the global allocator.

  pub const fn new() -> Self {
    Self::new_in(Global)
  }
}

impl<T, A: Allocator> List<T, A> {
  /// Creates an empty list whose nodes will be allocated from `allocator`.

  pub const fn new_in(allocator: A) -> Self {
    Self { head: None, allocator, _owns: PhantomData }
  }

  /// A reference to the parent allocator.

  pub fn allocator(&self) -> &A {
    &self.allocator
  }

  /// Adds `record` as the new last element.
  ///
  /// # Panics
  ///
  /// Aborts via [`handle_alloc_error`](alloc::alloc::handle_alloc_error) on
  /// failure to allocate a node.

  pub fn append(&mut self, record: T) {
    unwrap(Tail::new(self).push(record))
  }

  /// Adds `record` as the new last element.
  ///
  /// # Errors
  ///
  /// An error is returned on failure to allocate a node. The list is left
  /// unchanged and `record` is dropped.

  pub fn try_append(&mut self, record: T) -> Result<(), AllocError> {
    Tail::new(self).push(record)
  }

  /// The number of elements. This walks the whole list.

  pub fn len(&self) -> usize {
    self.iter().count()
  }

  /// Returns `true` if the list has no elements.

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// The first node, or `None` for an empty list.

  #[inline(always)]
  pub fn head(&self) -> Option<&Node<T>> {
    self.head.map(|p| unsafe { ptr::as_ref(p) })
  }

  /// The last node, or `None` for an empty list.

  pub fn tail(&self) -> Option<&Node<T>> {
    let mut n = self.head()?;

    while let Some(m) = n.next() {
      n = m;
    }

    Some(n)
  }

  /// The node immediately before the first non-head node whose record points
  /// at the same payload as `key`.
  ///
  /// The head is never compared, since it has no predecessor. `None` means
  /// that no later node matches.

  pub fn previous_of<K>(&self, key: &K) -> Option<&Node<T>>
  where
    T: Identity,
    K: Identity + ?Sized
  {
    let mut n = self.head()?;

    while let Some(m) = n.next() {
      if m.record.same(key) {
        return Some(n);
      }
      n = m;
    }

    None
  }

  /// Unlinks the first node whose record points at the same payload as `key`
  /// and hands the record back.
  ///
  /// If the head matches, the second node becomes the new head. If nothing
  /// matches, the list is unchanged and `None` is returned.

  pub fn remove<K>(&mut self, key: &K) -> Option<T>
  where
    T: Identity,
    K: Identity + ?Sized
  {
    let mut link = ptr::from_mut(&mut self.head);

    loop {
      let p = unsafe { ptr::read(link) }?;
      let n = unsafe { ptr::as_mut_ref(p) };

      if n.record.same(key) {
        unsafe { ptr::write(link, n.next) };
        let node = unsafe { allocator::take(&self.allocator, p) };
        return Some(node.record);
      }

      link = ptr::from_mut(&mut n.next);
    }
  }

  /// Releases every node, passing each record to `destructor` in order from
  /// head to tail. The list is empty afterwards and may be reused.

  pub fn clear<F>(&mut self, destructor: F)
  where
    F: FnMut(T)
  {
    let mut f = destructor;

    while let Some(record) = self.take_head() {
      f(record);
    }
  }

  /// An iterator over the records, head to tail.

  #[inline(always)]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter { next: self.head, _borrows: PhantomData }
  }

  // The head node is unlinked before its record is handed out, so a
  // panicking caller never observes a dangling node.

  fn take_head(&mut self) -> Option<T> {
    let p = self.head?;
    let node = unsafe { allocator::take(&self.allocator, p) };
    self.head = node.next;
    Some(node.record)
  }
}

impl<T, A: Allocator> Drop for List<T, A> {
  fn drop(&mut self) {
    self.clear(drop)
  }
}

impl<T, A: Allocator + Default> Default for List<T, A> {
  fn default() -> Self {
    Self::new_in(A::default())
  }
}

impl<T, A: Allocator> Extend<T> for List<T, A> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    let mut tail = Tail::new(self);

    for record in iter {
      unwrap(tail.push(record));
    }
  }
}

impl<T> FromIterator<T> for List<T, Global> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut list = Self::new();
    list.extend(iter);
    list
  }
}

impl<T, A: Allocator> IntoIterator for List<T, A> {
  type Item = T;
  type IntoIter = IntoIter<T, A>;

  fn into_iter(self) -> IntoIter<T, A> {
    IntoIter(self)
  }
}

impl<'a, T, A: Allocator> IntoIterator for &'a List<T, A> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Iter<'a, T> {
    self.iter()
  }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for List<T, A> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Node                                                                       //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<T> Node<T> {
  /// The record held by this node.

  #[inline(always)]
  pub fn record(&self) -> &T {
    &self.record
  }

  /// The following node, or `None` if this is the last one.

  #[inline(always)]
  pub fn next(&self) -> Option<&Node<T>> {
    self.next.map(|p| unsafe { ptr::as_ref(p) })
  }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Node").field(&self.record).finish()
  }
}

////////////////////////////////////////////////////////////////////////////////
//                                                                            //
// Iterators                                                                  //
//                                                                            //
////////////////////////////////////////////////////////////////////////////////

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline(always)]
  fn next(&mut self) -> Option<&'a T> {
    let n: &'a Node<T> = unsafe { ptr::as_ref(self.next?) };
    self.next = n.next;
    Some(&n.record)
  }
}

impl<'a, T> FusedIterator for Iter<'a, T> { }

impl<'a, T> Clone for Iter<'a, T> {
  fn clone(&self) -> Self {
    Iter { next: self.next, _borrows: PhantomData }
  }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
  type Item = T;

  #[inline(always)]
  fn next(&mut self) -> Option<T> {
    self.0.take_head()
  }
}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> { }
