//! Four-phase task lifecycle
//!
//! Every task runs through the same fixed phase order:
//! validate → prepare → execute → finalize. The order is a programming
//! contract, not a runtime data condition: the [`Driver`] models it as an
//! explicit state machine and panics on any out-of-order invocation.
//!
//! `validate` is the one phase with a recoverable failure mode — it returns
//! `false` for a malformed payload, which moves the driver to
//! [`Phase::Rejected`] and short-circuits the remaining phases.

use crate::error::Result;

/// Lifecycle state of one task invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Created,
    Validated,
    /// Validation returned false; no further phase may run.
    Rejected,
    Prepared,
    Executed,
    Finalized,
}

/// The four-phase task contract.
///
/// Implementations hold their payload and intermediate state; the [`Driver`]
/// owns phase ordering, so tasks never need to track where they are in the
/// lifecycle themselves.
pub trait Task {
    /// Check payload shape. Must have no side effects and returns `false`
    /// rather than erroring for malformed payloads.
    fn validate(&mut self) -> bool;

    /// Decode inputs and set up whatever execute needs.
    fn prepare(&mut self) -> Result<()>;

    /// Run the computation.
    fn execute(&mut self) -> Result<()>;

    /// Publish results back into the payload.
    fn finalize(&mut self) -> Result<()>;
}

/// Drives a [`Task`] through its phases in the one legal order.
#[derive(Debug)]
pub struct Driver<T: Task> {
    task: T,
    phase: Phase,
}

impl<T: Task> Driver<T> {
    pub fn new(task: T) -> Self {
        Self {
            task,
            phase: Phase::Created,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn expect_phase(&self, expected: Phase, entering: &str) {
        assert!(
            self.phase == expected,
            "cannot {entering} from {:?}: phases run validate -> prepare -> execute -> finalize",
            self.phase
        );
    }

    /// Run validation. Returns `false` (and moves to [`Phase::Rejected`])
    /// for a malformed payload.
    pub fn validate(&mut self) -> bool {
        self.expect_phase(Phase::Created, "validate");
        let ok = self.task.validate();
        self.phase = if ok { Phase::Validated } else { Phase::Rejected };
        log::debug!("validate -> {:?}", self.phase);
        ok
    }

    pub fn prepare(&mut self) -> Result<()> {
        self.expect_phase(Phase::Validated, "prepare");
        self.task.prepare()?;
        self.phase = Phase::Prepared;
        log::debug!("prepare -> {:?}", self.phase);
        Ok(())
    }

    pub fn execute(&mut self) -> Result<()> {
        self.expect_phase(Phase::Prepared, "execute");
        self.task.execute()?;
        self.phase = Phase::Executed;
        log::debug!("execute -> {:?}", self.phase);
        Ok(())
    }

    pub fn finalize(&mut self) -> Result<()> {
        self.expect_phase(Phase::Executed, "finalize");
        self.task.finalize()?;
        self.phase = Phase::Finalized;
        log::debug!("finalize -> {:?}", self.phase);
        Ok(())
    }

    /// Drive all four phases. `Ok(false)` means validation rejected the
    /// payload and nothing else ran.
    pub fn run(&mut self) -> Result<bool> {
        if !self.validate() {
            return Ok(false);
        }
        self.prepare()?;
        self.execute()?;
        self.finalize()?;
        Ok(true)
    }

    /// Recover the task (and through it, the payload) after a run.
    pub fn into_inner(self) -> T {
        self.task
    }
}
