//! Deadline wrapper for estimators that may be slow (remote models, large
//! artifacts on cold storage).

use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use super::SleepEstimator;
use crate::error::EstimationFailure;

/// Runs the wrapped estimator on a worker thread and gives up after `timeout`.
///
/// A timed-out worker is detached; its late answer is dropped. A worker that
/// panics is reported as [`EstimationFailure::Failed`] only when panics
/// unwind; under `panic = "abort"` (the release profile) it ends the process.
#[derive(Debug)]
pub struct TimeBoxed<E> {
    inner: Arc<E>,
    timeout: Duration,
}

impl<E> TimeBoxed<E> {
    pub fn new(inner: E, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(inner),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl<E: SleepEstimator + 'static> SleepEstimator for TimeBoxed<E> {
    fn predict(
        &self,
        wake_seconds: i64,
        sleep_hours: f64,
        coffee_count: u32,
    ) -> Result<f64, EstimationFailure> {
        let (tx, rx) = mpsc::channel();
        let inner = Arc::clone(&self.inner);

        thread::Builder::new()
            .name("betterrest-estimator".into())
            .spawn(move || {
                // Receiver may be gone after a timeout.
                let _ = tx.send(inner.predict(wake_seconds, sleep_hours, coffee_count));
            })
            .map_err(|e| EstimationFailure::Failed(format!("failed to start estimator: {e}")))?;

        match rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
                tracing::warn!(timeout_ms, "sleep estimator timed out");
                Err(EstimationFailure::Timeout { timeout_ms })
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(EstimationFailure::Failed(
                "estimator stopped without an answer".into(),
            )),
        }
    }
}
