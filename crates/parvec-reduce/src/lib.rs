//! Worker-parallel integer dot product
//!
//! This crate implements the distributed half of the computation: the
//! coordinator partitions the input with [`parvec_core::PartitionPlan`],
//! ships slices to workers over per-worker channel pairs, and reduces the
//! gathered partial sums into one scalar.
//!
//! The result is bit-identical to the sequential reference
//! ([`parvec_core::SequentialDot`]) for every worker count — partitioning is
//! an implementation detail, never an observable one.
//!
//! # Example
//!
//! ```rust
//! use parvec_core::{Driver, TaskPayload};
//! use parvec_reduce::DistributedDot;
//!
//! let payload = TaskPayload::new()
//!     .with_input_i32(&[1, 2, 5, 6])
//!     .with_input_i32(&[4, 7, 8, 9])
//!     .with_output_i32(1);
//!
//! let mut driver = Driver::new(DistributedDot::new(payload, 4));
//! assert!(driver.run().unwrap());
//!
//! let payload = driver.into_inner().into_payload();
//! assert_eq!(payload.output_i32(0).unwrap()[0], 112);
//! ```

pub mod reducer;
pub mod transport;
pub mod worker;

pub use reducer::{distribute, reduce, DistributedDot};
pub use transport::{slice_channel, Lane, SliceReceiver, SliceSender};
