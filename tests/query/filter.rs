use std::alloc::Layout;
use std::cell::Cell;
use std::ptr::NonNull;
use std::rc::Rc;
use allocator_api2::alloc::AllocError as RefusedError;
use expect_test::expect;
use linkq::AllocError;
use linkq::List;
use linkq::allocator::Allocator;
use linkq::allocator::Global;
use linkq::query;
use crate::make;

#[test]
fn test_filter_keeps_order() {
  let xs = [5_u64, 12, 7, 30, 1, 18];
  let list = make(&xs);
  let r = query::filter(&list, |_, x, n| **x > *n, &6_u64);
  expect!["[12, 7, 30, 18]"].assert_eq(&format!("{:?}", r));
}

#[test]
fn test_filter_by_index() {
  let xs = [5_u64, 12, 7, 30, 1, 18];
  let list = make(&xs);
  let mut seen = Vec::new();
  let r = query::filter(&list, |i, _, m| { seen.push(i); i % m == 0 }, &2_usize);
  expect!["[5, 7, 1]"].assert_eq(&format!("{:?}", r));
  expect!["[0, 1, 2, 3, 4, 5]"].assert_eq(&format!("{:?}", seen));
}

#[test]
fn test_filter_shares_payloads() {
  let xs = [1_u64, 2, 3];
  let list = make(&xs);
  let r = query::filter(&list, |_, _, _| true, &());
  assert!(r.iter().zip(list.iter()).all(|(a, b)| std::ptr::eq(*a, *b)));
  assert!(std::ptr::eq(*r.head().unwrap().record(), &xs[0]));
}

#[test]
fn test_filter_does_not_mutate_input() {
  let xs = [1_u64, 2, 3, 4];
  let list = make(&xs);
  let r = query::filter(&list, |_, x, _| **x % 2 == 1, &());
  expect!["[1, 3]"].assert_eq(&format!("{:?}", r));
  expect!["[1, 2, 3, 4]"].assert_eq(&format!("{:?}", list));
  drop(r);
  assert!(list.len() == 4);
}

#[test]
fn test_filter_nothing_matches() {
  let xs = [1_u64, 2, 3];
  let list = make(&xs);
  let r = query::filter(&list, |_, _, _| false, &());
  assert!(r.is_empty());
  assert!(r.head().is_none());

  let empty = List::<&u64>::new();
  assert!(query::filter(&empty, |_, _, _| true, &()).is_empty());
}

#[test]
fn test_filter_str_term() {
  let names = ["ada", "grace", "alan", "barbara"];
  let list: List<&str> = names.iter().copied().collect();
  let r = query::filter(&list, |_, name, prefix| name.starts_with(prefix), "a");
  expect![[r#"["ada", "alan"]"#]].assert_eq(&format!("{:?}", r));
}

#[test]
fn test_filter_in_bump() {
  let bump = bumpalo::Bump::new();
  let mut list = List::new_in(&bump);
  list.extend(0 .. 10_u64);
  let r = query::filter(&list, |_, x, _| x % 3 == 0, &());
  assert!(std::ptr::eq(*r.allocator(), &bump));
  expect!["[0, 3, 6, 9]"].assert_eq(&format!("{:?}", r));
}

#[derive(Clone, Default)]
struct Budget {
  left: Rc<Cell<usize>>,
  live: Rc<Cell<usize>>,
}

unsafe impl Allocator for Budget {
  fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, RefusedError> {
    match self.left.get() {
      0 => Err(RefusedError),
      n => {
        self.left.set(n - 1);
        self.live.set(self.live.get() + 1);
        Global.allocate(layout)
      }
    }
  }

  unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
    self.live.set(self.live.get() - 1);
    Global.deallocate(ptr, layout)
  }
}

#[test]
fn test_try_filter() {
  let budget = Budget::default();
  budget.left.set(5);
  let mut list = List::new_in(budget.clone());
  list.extend(0 .. 5_u64);
  assert!(budget.live.get() == 5);

  budget.left.set(2);
  assert!(query::try_filter(&list, |_, _, _| true, &()).err() == Some(AllocError));
  assert!(budget.live.get() == 5);
  expect!["[0, 1, 2, 3, 4]"].assert_eq(&format!("{:?}", list));

  budget.left.set(2);
  let r = query::try_filter(&list, |_, x, _| *x < 2, &());
  expect!["Ok([0, 1])"].assert_eq(&format!("{:?}", r));
  assert!(budget.live.get() == 7);

  drop(r);
  drop(list);
  assert!(budget.live.get() == 0);
}
