//! Task payload: opaque buffers plus declared element counts
//!
//! A [`TaskPayload`] carries the externally supplied inputs and outputs of one
//! task run as raw byte buffers, each paired with a declared element count.
//! Buffers are opaque until a task's prepare phase interprets them; for the
//! dot-product tasks every buffer is a contiguous run of signed 32-bit
//! integers, decoded and encoded through `bytemuck`.

use crate::error::{Error, Result};

/// Opaque input/output buffers with parallel declared counts.
///
/// The payload owns its buffers for the duration of one invocation. Inputs
/// are read-only once captured; the single output slot is written exactly
/// once, during finalize.
#[derive(Clone, Debug, Default)]
pub struct TaskPayload {
    inputs: Vec<Vec<u8>>,
    input_counts: Vec<usize>,
    outputs: Vec<Vec<u8>>,
    output_counts: Vec<usize>,
}

impl TaskPayload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an input buffer holding `values` as raw `i32` bytes, declaring
    /// its element count.
    pub fn with_input_i32(mut self, values: &[i32]) -> Self {
        self.inputs.push(bytemuck::cast_slice::<i32, u8>(values).to_vec());
        self.input_counts.push(values.len());
        self
    }

    /// Append a zeroed output buffer declared to hold `count` `i32` elements.
    pub fn with_output_i32(mut self, count: usize) -> Self {
        self.outputs.push(vec![0u8; count * std::mem::size_of::<i32>()]);
        self.output_counts.push(count);
        self
    }

    /// Number of declared input buffers.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Declared element count of input buffer `index`.
    pub fn declared_input_len(&self, index: usize) -> usize {
        self.input_counts[index]
    }

    /// Whether this payload has the shape the dot-product tasks expect:
    /// exactly two inputs of equal declared length and exactly one output
    /// declared to hold a single element, with all count lists consistent.
    pub fn has_vector_pair_shape(&self) -> bool {
        self.inputs.len() == self.input_counts.len()
            && self.inputs.len() == 2
            && self.input_counts[0] == self.input_counts[1]
            && self.outputs.len() == self.output_counts.len()
            && self.outputs.len() == 1
            && self.output_counts[0] == 1
    }

    /// Decode input buffer `index` as exactly its declared count of `i32`s.
    pub fn input_i32(&self, index: usize) -> Result<Vec<i32>> {
        let buf = self
            .inputs
            .get(index)
            .ok_or_else(|| Error::InvalidInput(format!("no input buffer {index}")))?;
        let count = self.input_counts[index];
        let bytes = count * std::mem::size_of::<i32>();
        if buf.len() < bytes {
            return Err(Error::size_mismatch(
                bytes,
                buf.len(),
                &format!("input buffer {index}"),
            ));
        }
        // The byte buffer has no alignment guarantee, so collect via copy
        // rather than casting in place.
        Ok(bytemuck::pod_collect_to_vec::<u8, i32>(&buf[..bytes]))
    }

    /// Write `value` into output buffer `index` at element `offset`.
    pub fn write_output_i32(&mut self, index: usize, offset: usize, value: i32) -> Result<()> {
        let count = *self
            .output_counts
            .get(index)
            .ok_or_else(|| Error::InvalidInput(format!("no output buffer {index}")))?;
        if offset >= count {
            return Err(Error::size_mismatch(
                count,
                offset + 1,
                &format!("output buffer {index}"),
            ));
        }
        let start = offset * std::mem::size_of::<i32>();
        self.outputs[index][start..start + std::mem::size_of::<i32>()]
            .copy_from_slice(bytemuck::bytes_of(&value));
        Ok(())
    }

    /// Decode output buffer `index` as its declared count of `i32`s.
    pub fn output_i32(&self, index: usize) -> Result<Vec<i32>> {
        let buf = self
            .outputs
            .get(index)
            .ok_or_else(|| Error::InvalidInput(format!("no output buffer {index}")))?;
        let bytes = self.output_counts[index] * std::mem::size_of::<i32>();
        if buf.len() < bytes {
            return Err(Error::size_mismatch(
                bytes,
                buf.len(),
                &format!("output buffer {index}"),
            ));
        }
        Ok(bytemuck::pod_collect_to_vec::<u8, i32>(&buf[..bytes]))
    }
}
