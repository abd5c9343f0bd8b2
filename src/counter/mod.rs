//! Shared-counter contention benchmark.
//!
//! Many workers apply random deltas to one account balance. The only thing
//! that changes between strategies is how the balance is protected, which
//! is exactly what the benchmark compares.

pub mod shared;
pub mod strategy;
pub mod transactions;

pub use shared::{CounterSet, SharedCounter};
pub use strategy::Strategy;
