use std::thread::{self, Scope, ScopedJoinHandle};

use crate::error::{Error, Result};

/// Spawns one named worker inside `scope`.
///
/// Thread creation failure is fatal for the trial and is not retried.
pub fn spawn_worker<'scope, 'env, F, T>(
    scope: &'scope Scope<'scope, 'env>,
    name: &str,
    index: usize,
    f: F,
) -> Result<ScopedJoinHandle<'scope, T>>
where
    F: FnOnce() -> T + Send + 'scope,
    T: Send + 'scope,
{
    thread::Builder::new()
        .name(format!("{name}-{index}"))
        .spawn_scoped(scope, f)
        .map_err(|source| Error::SpawnWorker { index, source })
}

/// Joins every worker in spawn order and collects their outputs.
///
/// All handles are joined before any failure is reported, so the enclosing
/// scope never finds an unjoined panicked thread. The first panicked worker
/// is the one named in the error.
pub fn join_workers<T>(handles: Vec<ScopedJoinHandle<'_, T>>) -> Result<Vec<T>> {
    let joined: Vec<_> = handles.into_iter().map(|handle| handle.join()).collect();

    joined
        .into_iter()
        .enumerate()
        .map(|(index, outcome)| outcome.map_err(|_| Error::WorkerPanicked { index }))
        .collect()
}
