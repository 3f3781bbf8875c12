//! Edge case integration tests.
//!
//! These tests cover boundary values, error conditions, and larger
//! workloads for trees and soft-delete sequences.

use segseq::{
    AggregationTree, GrowthPolicy, MAX_LOAD_FACTOR, Max, Min, SequenceError, SoftDeleteSequence,
    Sum,
};

#[test]
fn test_empty_construction_rejected() {
    let tree = AggregationTree::new(Vec::<i32>::new(), Sum::new());
    assert!(matches!(tree, Err(SequenceError::InvalidArgument(_))));

    let seq = SoftDeleteSequence::new(Vec::<i32>::new(), Sum::new());
    assert!(matches!(seq, Err(SequenceError::InvalidArgument(_))));
}

#[test]
fn test_single_element() {
    let mut seq = SoftDeleteSequence::new(vec![42], Min::<i32>::new()).unwrap();
    assert_eq!(seq.query_range(0, 0).unwrap(), 42);
    seq.delete(0).unwrap();
    assert_eq!(seq.len(), 0);
    assert_eq!(seq.capacity(), 0);
    assert!(matches!(
        seq.query_range(0, 0),
        Err(SequenceError::IndexOutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn test_delete_all_then_get_fails() {
    let mut seq = SoftDeleteSequence::new(vec![1, 2, 3, 4, 5], Sum::<i64>::new()).unwrap();
    while !seq.is_empty() {
        seq.delete(seq.len() - 1).unwrap();
    }
    assert_eq!(
        seq.get(0),
        Err(SequenceError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(seq.deleted_count(), 5);
}

#[test]
fn test_failed_operations_do_not_mutate() {
    let mut seq = SoftDeleteSequence::new(vec![1, 2, 3], Sum::<i64>::new()).unwrap();
    let before = seq.snapshot();

    assert!(seq.delete(3).is_err());
    assert!(seq.set(5, 100).is_err());
    assert!(seq.get(usize::MAX).is_err());
    assert_eq!(seq.query_range(2, 0), Ok(0));

    assert_eq!(seq.snapshot(), before);
    assert_eq!(seq.len(), 3);
}

#[test]
fn test_extreme_values_with_max() {
    let mut tree = AggregationTree::new(vec![i64::MIN], Max::new()).unwrap();
    assert_eq!(tree.query_range(0, 0).unwrap(), i64::MIN);
    tree.push(i64::MAX);
    assert_eq!(tree.query_range(0, 1).unwrap(), i64::MAX);
    // Padding slots hold the identity and never leak into results.
    assert_eq!(*tree.total(), i64::MAX);
}

#[test]
fn test_deleted_slots_hold_identity() {
    let mut seq = SoftDeleteSequence::new(vec![9, 8, 7], Max::<u8>::new()).unwrap();
    seq.delete(0).unwrap();
    let snapshot = seq.snapshot();
    assert_eq!(snapshot.backing.values, vec![u8::MIN, 8, 7]);
    assert_eq!(snapshot.tombstones.values, vec![1, 0, 0]);
}

#[test]
fn test_large_sequence_operations() {
    let size = 5_000usize;
    let mut seq = SoftDeleteSequence::new(vec![0u64], Sum::new()).unwrap();
    let mut model = vec![0u64];
    for v in 1..size as u64 {
        seq.push(v);
        model.push(v);
    }

    // Delete every other element from the front half.
    for i in 0..size / 4 {
        seq.delete(i).unwrap();
        model.remove(i);
    }

    assert_eq!(seq.len(), model.len());
    assert_eq!(
        seq.query_range(0, seq.len() - 1).unwrap(),
        model.iter().sum::<u64>()
    );
    for &(s, e) in &[(0, 10), (100, 2000), (seq.len() - 7, seq.len() - 1)] {
        assert_eq!(
            seq.query_range(s, e).unwrap(),
            model[s..=e].iter().sum::<u64>()
        );
    }
    for i in (0..seq.len()).step_by(97) {
        assert_eq!(*seq.get(i).unwrap(), model[i]);
    }
}

#[test]
fn test_unit_load_factor() {
    let policy = GrowthPolicy::new(1.0).unwrap();
    let mut tree = AggregationTree::with_policy(vec![1u32], Sum::new(), policy).unwrap();
    for v in 2..=20u32 {
        tree.push(v);
        assert_eq!(tree.capacity(), tree.len());
    }
    assert_eq!(tree.query_range(0, 19).unwrap(), 210);
}

#[test]
fn test_invalid_policy_rejected() {
    for factor in [0.25, f64::NAN, MAX_LOAD_FACTOR * 2.0, 1e12, 1e300] {
        assert!(
            matches!(GrowthPolicy::new(factor), Err(SequenceError::InvalidArgument(_))),
            "factor {factor}"
        );
    }
    let parsed = serde_json::from_str::<GrowthPolicy>(r#"{"load_factor": 1e300}"#);
    assert!(parsed.is_err());
}

#[test]
fn test_largest_load_factor_grows() {
    let policy = GrowthPolicy::new(MAX_LOAD_FACTOR).unwrap();
    let mut seq = SoftDeleteSequence::with_policy(vec![1i64], Sum::new(), policy).unwrap();
    seq.push(2);
    assert_eq!(seq.physical_capacity(), 17);
    for v in 3..=20 {
        seq.push(v);
    }
    assert_eq!(seq.physical_capacity(), 17 * 16 + 1);
    assert_eq!(seq.query_range(0, 19).unwrap(), 210);
}
