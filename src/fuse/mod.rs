//! Composition machinery.
//!
//! Each fuse wires two stages into one of the expected kind without running
//! anything: fused stages are ordinary [`Producer`](crate::Producer) /
//! [`Consumer`](crate::Consumer) / [`Transformer`](crate::Transformer)
//! implementations, so a fused pipeline is indistinguishable from a
//! hand-written stage and only a connect ever drives it.

mod left;
mod mid;
mod right;

pub(crate) use self::left::{left, left_buffered};
pub(crate) use self::mid::mid;
pub(crate) use self::right::right;
