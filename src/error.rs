use std::io;

use thiserror::Error;

/// Errors that can end a benchmark run.
///
/// Configuration is fixed, so almost everything here is a resource failure
/// rather than bad input. None of them are retried.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The OS refused to create a worker thread.
    #[error("failed to spawn worker {index}: {source}")]
    SpawnWorker {
        /// Position of the worker within its trial.
        index: usize,

        #[source]
        source: io::Error,
    },

    /// A worker thread panicked before it could be joined.
    #[error("worker {index} panicked")]
    WorkerPanicked {
        /// Position of the worker within its trial.
        index: usize,
    },

    /// The requested thread count cannot partition the rows into non-empty blocks.
    #[error("cannot split {rows} rows across {threads} threads")]
    InvalidThreadCount { threads: usize, rows: usize },

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

/// A specialized `Result` type for benchmark operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync + 'static>() {}

    #[test]
    fn error_is_send_sync() {
        assert_send_sync::<Error>();
    }

    #[test]
    fn invalid_thread_count_message() {
        let error = Error::InvalidThreadCount {
            threads: 0,
            rows: 16,
        };

        assert_eq!(error.to_string(), "cannot split 16 rows across 0 threads");
    }

    #[test]
    fn io_error_converts_to_report() {
        let error: Error = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();

        assert!(matches!(error, Error::Report(_)));
    }
}
