//! Single-process reference task
//!
//! [`SequentialDot`] computes the dot product in one pass with no
//! partitioning or transport. It satisfies the same four-phase contract as
//! the distributed task and serves as the oracle for equivalence checks.

use crate::error::Result;
use crate::kernel;
use crate::lifecycle::Task;
use crate::payload::TaskPayload;

/// Sequential dot product over a [`TaskPayload`] vector pair.
#[derive(Debug)]
pub struct SequentialDot {
    payload: TaskPayload,
    v1: Vec<i32>,
    v2: Vec<i32>,
    result: i64,
}

impl SequentialDot {
    pub fn new(payload: TaskPayload) -> Self {
        Self {
            payload,
            v1: Vec::new(),
            v2: Vec::new(),
            result: 0,
        }
    }

    /// Recover the payload (the result sits in its output buffer after
    /// finalize).
    pub fn into_payload(self) -> TaskPayload {
        self.payload
    }
}

impl Task for SequentialDot {
    fn validate(&mut self) -> bool {
        self.payload.has_vector_pair_shape()
    }

    fn prepare(&mut self) -> Result<()> {
        self.v1 = self.payload.input_i32(0)?;
        self.v2 = self.payload.input_i32(1)?;
        self.result = 0;
        Ok(())
    }

    fn execute(&mut self) -> Result<()> {
        self.result = kernel::dot(&self.v1, &self.v2);
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        self.payload.write_output_i32(0, 0, self.result as i32)
    }
}
