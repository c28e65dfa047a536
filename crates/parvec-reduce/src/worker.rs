//! Non-coordinator worker body
//!
//! A worker's whole life during one computation: block until both slice
//! transfers arrive, compute the local partial sum, hand it to the gather
//! channel. Workers never see the full input and never talk to each other.

use std::sync::mpsc;

use parvec_core::kernel;

use crate::transport::SliceReceiver;

/// Run worker `rank`'s receive/compute/send sequence.
///
/// A failed slice receive means the coordinator side is broken; the worker
/// logs and exits without sending, and the coordinator surfaces the missing
/// partial as a transport error.
pub fn run(rank: usize, receiver: SliceReceiver, partials: mpsc::Sender<i64>) {
    match receiver.recv_pair() {
        Ok((v1, v2)) => {
            let partial = kernel::dot(&v1, &v2);
            log::trace!("worker {rank}: partial {partial} over {} elements", v1.len());
            // A closed gather channel means the coordinator already gave up.
            let _ = partials.send(partial);
        }
        Err(e) => log::warn!("worker {rank}: {e}"),
    }
}
