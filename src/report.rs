//! Plain-text report formatting.
//!
//! Formatting only: these functions read finished [`TrialResult`]s and never
//! touch benchmark state.

use std::io::{self, Write};

use crate::trial::TrialResult;

/// Matrix section: size, baseline, then one line per parallel trial.
pub fn write_matrix_report<W: Write>(
    out: &mut W,
    n: usize,
    baseline: &TrialResult,
    parallel: &[TrialResult],
) -> io::Result<()> {
    writeln!(out, "N = {}:", n)?;
    writeln!(out, "single-threaded exec: {:.6} sec", baseline.elapsed_secs())?;
    for result in parallel {
        writeln!(
            out,
            "multithreaded exec (threads: {}): {:.6} sec",
            result.config.thread_count,
            result.elapsed_secs()
        )?;
    }
    Ok(())
}

/// Counter section: one block per (strategy, thread count) trial.
pub fn write_counter_report<W: Write>(out: &mut W, results: &[TrialResult]) -> io::Result<()> {
    for result in results {
        writeln!(
            out,
            "test {} (streams: {})",
            result.config.label, result.config.thread_count
        )?;
        writeln!(out, "  time: {:.6} sec", result.elapsed_secs())?;
        if let Some(total) = result.final_value {
            writeln!(out, "  total: {}", total)?;
        }
        if let Some(expected) = result.expected_value {
            writeln!(out, "  expected: {}", expected)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
