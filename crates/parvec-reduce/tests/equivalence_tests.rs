//! Equivalence of the distributed path against the sequential reference
//!
//! The core correctness contract: for any equal-length input pair and any
//! worker count, the distributed result equals the single-pass dot product.

use parvec_core::{testdata, Driver, Phase, SequentialDot, TaskPayload};
use parvec_reduce::DistributedDot;
use proptest::prelude::*;

fn vector_pair_payload(v1: &[i32], v2: &[i32]) -> TaskPayload {
    TaskPayload::new()
        .with_input_i32(v1)
        .with_input_i32(v2)
        .with_output_i32(1)
}

fn sequential_result(v1: &[i32], v2: &[i32]) -> i32 {
    let mut driver = Driver::new(SequentialDot::new(vector_pair_payload(v1, v2)));
    assert!(driver.run().unwrap());
    driver.into_inner().into_payload().output_i32(0).unwrap()[0]
}

fn distributed_result(v1: &[i32], v2: &[i32], workers: usize) -> i32 {
    let mut driver = Driver::new(DistributedDot::new(vector_pair_payload(v1, v2), workers));
    assert!(driver.run().unwrap());
    driver.into_inner().into_payload().output_i32(0).unwrap()[0]
}

#[test]
fn test_matches_reference_for_evenly_divisible_input() {
    // N = 120, P = 3: plan is [40, 40, 40]
    let v1 = testdata::seeded_vector(120, 1);
    let v2 = testdata::seeded_vector(120, 2);
    assert_eq!(distributed_result(&v1, &v2, 3), sequential_result(&v1, &v2));
}

#[test]
fn test_matches_reference_with_remainder() {
    // N = 121, P = 3: plan is [41, 40, 40]
    let v1 = testdata::seeded_vector(121, 3);
    let v2 = testdata::seeded_vector(121, 4);
    assert_eq!(distributed_result(&v1, &v2, 3), sequential_result(&v1, &v2));
}

#[test]
fn test_matches_reference_across_worker_counts() {
    let v1 = testdata::seeded_vector(997, 5);
    let v2 = testdata::seeded_vector(997, 6);
    let expected = sequential_result(&v1, &v2);
    for workers in 1..=12 {
        assert_eq!(
            distributed_result(&v1, &v2, workers),
            expected,
            "worker count {workers} changed the result"
        );
    }
}

#[test]
fn test_zero_length_input_is_zero_for_any_worker_count() {
    for workers in [1, 2, 3, 8] {
        assert_eq!(distributed_result(&[], &[], workers), 0);
    }
}

#[test]
fn test_mismatched_lengths_are_rejected_without_running() {
    let payload = TaskPayload::new()
        .with_input_i32(&testdata::seeded_vector(10, 7))
        .with_input_i32(&testdata::seeded_vector(11, 8))
        .with_output_i32(1);
    let mut driver = Driver::new(DistributedDot::new(payload, 4));
    assert!(!driver.run().unwrap());
    assert_eq!(driver.phase(), Phase::Rejected);
}

proptest! {
    // Partition-invariance: the distributed result never depends on how
    // the input was split.
    #[test]
    fn prop_partition_invariance(
        v1 in prop::collection::vec(-1000i32..1000, 0..200),
        workers in 1usize..=8,
    ) {
        let v2: Vec<i32> = v1.iter().rev().copied().collect();
        prop_assert_eq!(
            distributed_result(&v1, &v2, workers),
            sequential_result(&v1, &v2)
        );
    }

    #[test]
    fn prop_seeded_vectors_match_reference(
        len in 0usize..500,
        seed in 0u64..1000,
        workers in 1usize..=6,
    ) {
        let v1 = testdata::seeded_vector(len, seed);
        let v2 = testdata::seeded_vector(len, seed.wrapping_add(1));
        prop_assert_eq!(
            distributed_result(&v1, &v2, workers),
            sequential_result(&v1, &v2)
        );
    }
}
