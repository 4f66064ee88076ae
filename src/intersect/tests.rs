//! Tests for the bounded intersection primitive.

use super::*;

fn run(a: &[u32], b: &[u32], cap: usize) -> (usize, Vec<u32>, bool) {
    let mut dst = ScratchBuffer::with_capacity(cap);
    let n = intersect_into(a, b, &mut dst, OverflowPolicy::Truncate).unwrap();
    (n, dst.as_slice().to_vec(), dst.truncated())
}

#[test]
fn test_basic_overlap() {
    assert_eq!(run(&[0, 2, 4, 6, 8], &[1, 2, 3, 4, 9], 16), (2, vec![2, 4], false));
}

#[test]
fn test_disjoint_and_empty_inputs() {
    assert_eq!(run(&[1, 3, 5], &[0, 2, 4], 4).0, 0);
    assert_eq!(run(&[], &[1, 2], 4).0, 0);
    assert_eq!(run(&[1, 2], &[], 4).0, 0);
}

#[test]
fn test_identical_inputs() {
    let a = [5, 6, 7, 100];
    assert_eq!(run(&a, &a, 4), (4, a.to_vec(), false));
}

#[test]
fn test_truncate_keeps_smallest_values() {
    let a = [1, 2, 3, 4, 5];
    let (n, values, truncated) = run(&a, &a, 3);
    assert_eq!(n, 3);
    assert_eq!(values, vec![1, 2, 3]);
    assert!(truncated);
}

#[test]
fn test_exact_fit_is_not_truncated() {
    let (n, _, truncated) = run(&[1, 2, 3], &[1, 2, 3], 3);
    assert_eq!(n, 3);
    assert!(!truncated);
}

#[test]
fn test_zero_capacity() {
    let (n, values, truncated) = run(&[1], &[1], 0);
    assert_eq!(n, 0);
    assert!(values.is_empty());
    assert!(truncated);

    // Nothing in common: no overflow either.
    let (_, _, truncated) = run(&[1], &[2], 0);
    assert!(!truncated);
}

#[test]
fn test_fail_policy_reports_capacity() {
    let mut dst = ScratchBuffer::with_capacity(2);
    let err = intersect_into(&[1, 2, 3], &[1, 2, 3], &mut dst, OverflowPolicy::Fail).unwrap_err();
    assert_eq!(
        err,
        CapacityError {
            capacity: 2,
            required_at_least: 3
        }
    );
    assert_eq!(dst.as_slice(), &[1, 2]);

    let n = intersect_into(&[1, 2, 3], &[2, 3], &mut dst, OverflowPolicy::Fail).unwrap();
    assert_eq!(n, 2);
}

#[test]
fn test_buffer_is_reused_without_growth() {
    let mut dst = ScratchBuffer::with_capacity(4);
    intersect_into(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5], &mut dst, OverflowPolicy::Truncate).unwrap();
    assert!(dst.truncated());
    intersect_into(&[7], &[7], &mut dst, OverflowPolicy::Truncate).unwrap();
    assert_eq!(dst.as_slice(), &[7]);
    assert!(!dst.truncated());
    assert_eq!(dst.capacity(), 4);
}
