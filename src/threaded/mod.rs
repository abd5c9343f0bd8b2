//! Per-trial thread dispatch.
//!
//! Workers are scoped threads spawned fresh for every trial and joined
//! before the trial returns. Nothing here is pooled: creation and teardown
//! cost is part of what the benchmarks measure.
//!
//! - `partition`: splits matrix rows into contiguous blocks
//! - `parallel_rows`: thread-per-block matrix multiply
//! - `workers`: spawn/join helpers shared with the counter benchmark

pub mod parallel_rows;
pub mod partition;
pub mod workers;
