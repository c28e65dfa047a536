//! Point-to-point slice transport
//!
//! Each non-coordinator worker is connected to the coordinator by a pair of
//! independent channels, one per input vector. The two lanes cannot be
//! confused with each other or with another worker's transfers: every lane is
//! its own channel. Sends never block (the channels are unbounded); receives
//! block until the transfer arrives.
//!
//! Transport failure is fatal within one computation — a closed channel means
//! the other end is gone, and there is no retry.

use std::sync::mpsc;

use parvec_core::{Error, Result};

/// Which of the two input vectors a transfer carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lane {
    V1,
    V2,
}

/// Coordinator-side handle for one worker's pair of slice lanes.
#[derive(Debug)]
pub struct SliceSender {
    v1: mpsc::Sender<Vec<i32>>,
    v2: mpsc::Sender<Vec<i32>>,
}

/// Worker-side handle for its pair of slice lanes.
#[derive(Debug)]
pub struct SliceReceiver {
    v1: mpsc::Receiver<Vec<i32>>,
    v2: mpsc::Receiver<Vec<i32>>,
}

/// Create the lane pair connecting the coordinator to one worker.
pub fn slice_channel() -> (SliceSender, SliceReceiver) {
    let (v1_tx, v1_rx) = mpsc::channel();
    let (v2_tx, v2_rx) = mpsc::channel();
    (
        SliceSender { v1: v1_tx, v2: v2_tx },
        SliceReceiver { v1: v1_rx, v2: v2_rx },
    )
}

impl SliceSender {
    /// Send one vector's slice on its lane. Does not block.
    pub fn send(&self, lane: Lane, slice: Vec<i32>) -> Result<()> {
        let tx = match lane {
            Lane::V1 => &self.v1,
            Lane::V2 => &self.v2,
        };
        tx.send(slice)
            .map_err(|_| Error::transport(format!("{lane:?} slice lane closed")))
    }
}

impl SliceReceiver {
    /// Block until both slice transfers have arrived.
    ///
    /// The first vector is consumed first, but the lanes are independent
    /// channels, so the coordinator may have sent them in either order.
    pub fn recv_pair(&self) -> Result<(Vec<i32>, Vec<i32>)> {
        let v1 = self
            .v1
            .recv()
            .map_err(|_| Error::transport("V1 slice lane closed before transfer"))?;
        let v2 = self
            .v2
            .recv()
            .map_err(|_| Error::transport("V2 slice lane closed before transfer"))?;
        Ok((v1, v2))
    }
}
