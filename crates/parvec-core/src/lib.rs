//! Core types for worker-parallel integer reductions
//!
//! This crate provides the foundations the distributed reducer builds on:
//!
//! - [`partition`] — deterministic, load-balanced assignment of contiguous
//!   index ranges to workers
//! - [`kernel`] — the sequential multiply-accumulate every path bottoms out in
//! - [`payload`] — opaque input/output buffers with declared element counts
//! - [`lifecycle`] — the four-phase task contract
//!   (validate → prepare → execute → finalize) as an explicit state machine
//! - [`sequential`] — the single-process reference task used as an oracle
//!
//! # Example
//!
//! ```rust
//! use parvec_core::{Driver, SequentialDot, TaskPayload};
//!
//! let payload = TaskPayload::new()
//!     .with_input_i32(&[1, 2, 5])
//!     .with_input_i32(&[4, 7, 8])
//!     .with_output_i32(1);
//!
//! let mut driver = Driver::new(SequentialDot::new(payload));
//! assert!(driver.run().unwrap());
//!
//! let payload = driver.into_inner().into_payload();
//! assert_eq!(payload.output_i32(0).unwrap()[0], 58);
//! ```

pub mod error;
pub mod kernel;
pub mod lifecycle;
pub mod partition;
pub mod payload;
pub mod sequential;

#[cfg(feature = "rand")]
pub mod testdata;

pub use error::{Error, Result};
pub use lifecycle::{Driver, Phase, Task};
pub use partition::PartitionPlan;
pub use payload::TaskPayload;
pub use sequential::SequentialDot;
