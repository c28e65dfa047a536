//! Worker-parallel integer dot product with a four-phase task lifecycle
//!
//! Umbrella crate re-exporting the workspace members:
//!
//! - [`parvec_core`] — partition planning, the sequential kernel, task
//!   payloads, the lifecycle state machine, and the sequential reference task
//! - [`parvec_reduce`] — slice transport, the worker body, and the
//!   distributed reducer

pub use parvec_core;
pub use parvec_reduce;

pub use parvec_core::{Driver, Error, PartitionPlan, Phase, Result, SequentialDot, Task, TaskPayload};
pub use parvec_reduce::DistributedDot;
