//! Record of past simulation results.

use crate::result::{SimulationResult, Timestamp};
use std::{
    collections::VecDeque,
    num::NonZeroUsize,
    sync::{Arc, RwLock},
};

/// Append-only log of [`SimulationResult`]s, most recent first.
///
/// Implementations must be safe to share between concurrent requests.
pub trait History: Send + Sync {
    /// Stamp and store a synthesized result.
    ///
    /// The timestamp of `result` is replaced by the one the log hands out
    /// and the result is stored at the front of the log, both inside the
    /// same critical section: the order of the log is the order in which
    /// the timestamps were handed out, and timestamps never decrease from
    /// the back to the front of the log.
    fn record(&self, result: SimulationResult) -> Arc<SimulationResult>;

    /// All stored results, most recent first.
    fn entries(&self) -> Vec<Arc<SimulationResult>>;

    /// Number of stored results.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// [`History`] kept in memory for the lifetime of the process.
///
/// Unbounded by default. With a [`limit`](InMemoryHistory::with_limit)
/// the oldest entries are dropped once the limit is reached.
#[derive(Debug, Default)]
pub struct InMemoryHistory {
    entries: RwLock<VecDeque<Arc<SimulationResult>>>,
    limit: Option<NonZeroUsize>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: NonZeroUsize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::with_capacity(limit.get())),
            limit: Some(limit),
        }
    }

    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }
}

impl History for InMemoryHistory {
    fn record(&self, mut result: SimulationResult) -> Arc<SimulationResult> {
        let mut entries = self.entries.write().expect("We shouldn't have poisoning");

        // the wall clock may step backward, the log may not
        let latest = entries
            .front()
            .map(|entry| entry.timestamp)
            .unwrap_or(Timestamp::UNIX_EPOCH);
        result.timestamp = Timestamp::now().max(latest);

        let result = Arc::new(result);
        entries.push_front(Arc::clone(&result));
        if let Some(limit) = self.limit {
            entries.truncate(limit.get());
        }

        result
    }

    fn entries(&self) -> Vec<Arc<SimulationResult>> {
        self.entries
            .read()
            .expect("We shouldn't have poisoning")
            .iter()
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.read().expect("We shouldn't have poisoning").len()
    }
}
