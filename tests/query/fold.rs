use expect_test::expect;
use linkq::List;
use linkq::query;
use crate::make;

#[test]
fn test_aggregate_sum() {
  let xs = [3_u64, 4, 5];
  let list = make(&xs);
  let mut sum = 0_u64;
  query::aggregate(&list, |s, x| *s += **x, &mut sum);
  assert!(sum == 12);
}

#[test]
fn test_aggregate_left_to_right() {
  let xs = [1_u64, 2, 3];
  let list = make(&xs);
  let mut acc = String::from(">");
  query::aggregate(&list, |s, x| s.push_str(&x.to_string()), &mut acc);
  expect![">123"].assert_eq(&acc);

  let mut acc = 100_i64;
  query::aggregate(&list, |s, x| *s = *s - **x as i64, &mut acc);
  assert!(acc == 94);
}

#[test]
fn test_aggregate_keeps_initial_state_on_empty() {
  let list = List::<u64>::new();
  let mut acc = 7_u64;
  query::aggregate(&list, |s, x| *s += x, &mut acc);
  assert!(acc == 7);
}

#[test]
fn test_aggregate_unsized_accumulator() {
  let list: List<usize> = (0 .. 4).collect();
  let mut counts = [0_u64; 4];
  query::aggregate(&list, |c: &mut [u64], i| c[*i] += 1, &mut counts[..]);
  expect!["[1, 1, 1, 1]"].assert_eq(&format!("{:?}", counts));
}

#[test]
fn test_for_each() {
  let xs = [10_u64, 20, 30];
  let list = make(&xs);
  let mut seen = Vec::new();
  query::for_each(&list, |i, x| seen.push((i, **x)));
  expect!["[(0, 10), (1, 20), (2, 30)]"].assert_eq(&format!("{:?}", seen));

  let mut calls = 0;
  query::for_each(&List::<u64>::new(), |_, _| calls += 1);
  assert!(calls == 0);
}
