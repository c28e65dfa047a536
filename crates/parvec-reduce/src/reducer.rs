//! Distribute / compute-local / reduce orchestration
//!
//! The coordinator holds the full input pair, carves it up according to a
//! [`PartitionPlan`], ships each non-coordinator worker its two slices over
//! that worker's lanes, computes its own slice in-thread, and sums the
//! gathered partials into the final scalar.
//!
//! With a single worker the whole machinery degenerates to an in-process dot
//! product: no channels, no threads, one kernel call.

use std::sync::mpsc;
use std::thread;

use parvec_core::{kernel, Error, PartitionPlan, Result, Task, TaskPayload};

use crate::transport::{slice_channel, Lane, SliceReceiver, SliceSender};
use crate::worker;

/// Ship every non-coordinator worker its slice pair and return the
/// coordinator's own local slices.
///
/// `links[i]` is the lane pair for rank `i + 1`; the coordinator keeps the
/// first `plan.count_of(0)` elements without a self-transfer. Slices are sent
/// in rank order, vector 1 before vector 2 on each worker's lanes.
pub fn distribute(
    v1: &[i32],
    v2: &[i32],
    plan: &PartitionPlan,
    links: &[SliceSender],
) -> Result<(Vec<i32>, Vec<i32>)> {
    debug_assert_eq!(v1.len(), v2.len());
    debug_assert_eq!(links.len() + 1, plan.worker_count());

    for (i, link) in links.iter().enumerate() {
        let range = plan.range_of(i + 1);
        log::debug!("distribute: rank {} takes {range:?}", i + 1);
        link.send(Lane::V1, v1[range.clone()].to_vec())?;
        link.send(Lane::V2, v2[range].to_vec())?;
    }

    let own = plan.range_of(0);
    Ok((v1[own.clone()].to_vec(), v2[own].to_vec()))
}

/// Sum gathered partials into the final scalar. Order-independent.
pub fn reduce(partials: impl IntoIterator<Item = i64>) -> i64 {
    partials.into_iter().sum()
}

/// Worker-parallel dot product over a [`TaskPayload`] vector pair.
///
/// Implements the four-phase task contract: validate checks the payload
/// shape, prepare plans the partition and distributes slices, execute runs
/// the workers and reduces their partials, finalize publishes the scalar.
#[derive(Debug)]
pub struct DistributedDot {
    payload: TaskPayload,
    workers: usize,
    local_v1: Vec<i32>,
    local_v2: Vec<i32>,
    receivers: Vec<SliceReceiver>,
    result: i64,
}

impl DistributedDot {
    /// Create a task that will run with `workers` workers (coordinator
    /// included).
    ///
    /// # Panics
    ///
    /// Panics if `workers` is zero.
    pub fn new(payload: TaskPayload, workers: usize) -> Self {
        assert!(workers > 0, "distributed dot requires at least one worker");
        Self {
            payload,
            workers,
            local_v1: Vec::new(),
            local_v2: Vec::new(),
            receivers: Vec::new(),
            result: 0,
        }
    }

    /// Number of workers this task runs with.
    pub fn worker_count(&self) -> usize {
        self.workers
    }

    /// Recover the payload (the result sits in its output buffer after
    /// finalize).
    pub fn into_payload(self) -> TaskPayload {
        self.payload
    }
}

impl Task for DistributedDot {
    fn validate(&mut self) -> bool {
        self.payload.has_vector_pair_shape()
    }

    fn prepare(&mut self) -> Result<()> {
        let v1 = self.payload.input_i32(0)?;
        let v2 = self.payload.input_i32(1)?;

        let plan = PartitionPlan::balanced(v1.len(), self.workers);

        let mut links = Vec::with_capacity(plan.worker_count() - 1);
        let mut receivers = Vec::with_capacity(plan.worker_count() - 1);
        for _ in 1..plan.worker_count() {
            let (tx, rx) = slice_channel();
            links.push(tx);
            receivers.push(rx);
        }

        // Sends are buffered; the lanes hold each worker's slices until its
        // thread starts up in execute.
        let (local_v1, local_v2) = distribute(&v1, &v2, &plan, &links)?;

        self.local_v1 = local_v1;
        self.local_v2 = local_v2;
        self.receivers = receivers;
        self.result = 0;
        Ok(())
    }

    fn execute(&mut self) -> Result<()> {
        let receivers = std::mem::take(&mut self.receivers);
        let expected = receivers.len();
        let (gather_tx, gather_rx) = mpsc::channel();

        let local_v1 = &self.local_v1;
        let local_v2 = &self.local_v2;

        self.result = thread::scope(|s| -> Result<i64> {
            for (i, rx) in receivers.into_iter().enumerate() {
                let tx = gather_tx.clone();
                s.spawn(move || worker::run(i + 1, rx, tx));
            }
            drop(gather_tx);

            let mut partials = Vec::with_capacity(expected + 1);
            partials.push(kernel::dot(local_v1, local_v2));
            for _ in 0..expected {
                let partial = gather_rx.recv().map_err(|_| {
                    Error::transport("a worker exited without delivering its partial sum")
                })?;
                partials.push(partial);
            }
            Ok(reduce(partials))
        })?;

        log::debug!("reduced result: {}", self.result);
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.payload.write_output_i32(0, 0, self.result as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parvec_core::Driver;

    fn run(v1: &[i32], v2: &[i32], workers: usize) -> i32 {
        let payload = TaskPayload::new()
            .with_input_i32(v1)
            .with_input_i32(v2)
            .with_output_i32(1);
        let mut driver = Driver::new(DistributedDot::new(payload, workers));
        assert!(driver.run().unwrap());
        driver.into_inner().into_payload().output_i32(0).unwrap()[0]
    }

    #[test]
    fn test_single_worker_degenerates_to_plain_dot() {
        assert_eq!(run(&[1, 2, 5], &[4, 7, 8], 1), 58);
    }

    #[test]
    fn test_one_element_per_worker() {
        // plan = [1, 1, 1, 1]; partials 4, 14, 40, 54
        assert_eq!(run(&[1, 2, 5, 6], &[4, 7, 8, 9], 4), 112);
    }

    #[test]
    fn test_more_workers_than_elements() {
        assert_eq!(run(&[3, 4], &[5, 6], 7), 39);
    }

    #[test]
    fn test_empty_input_is_zero_for_any_worker_count() {
        for workers in [1, 2, 5] {
            assert_eq!(run(&[], &[], workers), 0);
        }
    }

    #[test]
    fn test_distribute_offsets_follow_the_plan() {
        let v1: Vec<i32> = (0..11).collect();
        let v2 = vec![1; 11];
        let plan = PartitionPlan::balanced(11, 3); // [4, 4, 3]

        let mut links = Vec::new();
        let mut rxs = Vec::new();
        for _ in 0..2 {
            let (tx, rx) = slice_channel();
            links.push(tx);
            rxs.push(rx);
        }

        let (own_v1, own_v2) = distribute(&v1, &v2, &plan, &links).unwrap();
        assert_eq!(own_v1, vec![0, 1, 2, 3]);
        assert_eq!(own_v2, vec![1; 4]);

        let (rank1_v1, _) = rxs[0].recv_pair().unwrap();
        assert_eq!(rank1_v1, vec![4, 5, 6, 7]);
        let (rank2_v1, rank2_v2) = rxs[1].recv_pair().unwrap();
        assert_eq!(rank2_v1, vec![8, 9, 10]);
        assert_eq!(rank2_v2, vec![1; 3]);
    }

    #[test]
    fn test_reduce_is_a_plain_sum() {
        assert_eq!(reduce([4, 14, 40, 54]), 112);
        assert_eq!(reduce(Vec::<i64>::new()), 0);
        assert_eq!(reduce([-5, 5]), 0);
    }

    #[test]
    fn test_mismatched_lengths_are_rejected_before_transport() {
        let payload = TaskPayload::new()
            .with_input_i32(&[1, 2, 3])
            .with_input_i32(&[1, 2])
            .with_output_i32(1);
        let mut driver = Driver::new(DistributedDot::new(payload, 4));
        assert!(!driver.run().unwrap());
    }

    #[test]
    #[should_panic(expected = "at least one worker")]
    fn test_zero_workers_panics() {
        let _ = DistributedDot::new(TaskPayload::new(), 0);
    }
}
