//! Declarative queries over a [`List`].
//!
//! These are free functions driven entirely by caller-supplied closures. None
//! of them mutate their input list.
//!
//! ```
//! use linkq::List;
//! use linkq::query;
//!
//! let list: List<u64> = (1 ..= 6).collect();
//! let even = query::filter(&list, |_, x, m| x % m == 0, &2_u64);
//!
//! let mut sum = 0_u64;
//! query::aggregate(&even, |s, x| *s += x, &mut sum);
//!
//! assert!(sum == 12);
//! ```

use crate::AllocError;
use crate::Fail;
use crate::List;
use crate::SingleError;
use crate::allocator::Allocator;
use crate::list::Tail;
use crate::unwrap;

#[inline(always)]
fn filter_in<T, A, U, P, E>(list: &List<T, A>, predicate: P, term: &U) -> Result<List<T, A>, E>
where
  T: Clone,
  A: Allocator + Clone,
  U: ?Sized,
  P: FnMut(usize, &T, &U) -> bool,
  E: Fail,
{
  let mut f = predicate;
  let mut r = List::new_in(list.allocator().clone());
  let mut t = Tail::new(&mut r);

  for (i, x) in list.iter().enumerate() {
    if f(i, x, term) {
      t.push::<E>(x.clone())?;
    }
  }

  Ok(r)
}

/// Builds a new list of the records for which `predicate(index, record, term)`
/// holds, in their original order. `index` is the zero-based position in
/// `list`.
///
/// The records are cloned, not the payloads they refer to. The new list is
/// allocated from a clone of `list`'s allocator.
///
/// # Panics
///
/// Aborts on failure to allocate a node.

pub fn filter<T, A, U, P>(list: &List<T, A>, predicate: P, term: &U) -> List<T, A>
where
  T: Clone,
  A: Allocator + Clone,
  U: ?Sized,
  P: FnMut(usize, &T, &U) -> bool,
{
  unwrap(filter_in(list, predicate, term))
}

/// Like [`filter`], but reports allocation failure.
///
/// # Errors
///
/// An error is returned on failure to allocate a node. Whatever was built so
/// far is released.

pub fn try_filter<T, A, U, P>(list: &List<T, A>, predicate: P, term: &U) -> Result<List<T, A>, AllocError>
where
  T: Clone,
  A: Allocator + Clone,
  U: ?Sized,
  P: FnMut(usize, &T, &U) -> bool,
{
  filter_in(list, predicate, term)
}

/// Folds `list` from head to tail into `accumulator` by calling
/// `combine(accumulator, record)` for every record.
///
/// The caller chooses the initial state of the accumulator.

pub fn aggregate<T, A, B, F>(list: &List<T, A>, combine: F, accumulator: &mut B)
where
  A: Allocator,
  B: ?Sized,
  F: FnMut(&mut B, &T),
{
  let mut f = combine;

  for x in list {
    f(&mut *accumulator, x);
  }
}

/// The only record of a one-element list.
///
/// # Errors
///
/// [`SingleError::Empty`] if the list has no elements, and
/// [`SingleError::NotUnique`] if it has more than one.

pub fn single<T, A>(list: &List<T, A>) -> Result<&T, SingleError>
where
  A: Allocator,
{
  let Some(n) = list.head() else {
    return Err(SingleError::Empty);
  };

  if n.next().is_some() {
    return Err(SingleError::NotUnique);
  }

  Ok(n.record())
}

/// Calls `action(index, record)` for every record, head to tail.

pub fn for_each<T, A, F>(list: &List<T, A>, action: F)
where
  A: Allocator,
  F: FnMut(usize, &T),
{
  let mut f = action;

  for (i, x) in list.iter().enumerate() {
    f(i, x);
  }
}
