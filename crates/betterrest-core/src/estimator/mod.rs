//! Sleep duration estimators.
//!
//! The bedtime calculation only knows the [`SleepEstimator`] trait. A trained
//! model, a lookup table or a test stub all plug in the same way.

mod linear;
mod timeboxed;

pub use linear::LinearModel;
pub use timeboxed::TimeBoxed;

use std::sync::Arc;

use crate::error::EstimationFailure;

/// Predicts how many seconds of sleep are needed.
///
/// * `wake_seconds`: wake-up time as seconds since midnight
/// * `sleep_hours`: desired hours of sleep, as entered
/// * `coffee_count`: cups of coffee per day
pub trait SleepEstimator: Send + Sync {
    fn predict(
        &self,
        wake_seconds: i64,
        sleep_hours: f64,
        coffee_count: u32,
    ) -> Result<f64, EstimationFailure>;
}

impl<T: SleepEstimator + ?Sized> SleepEstimator for &T {
    fn predict(
        &self,
        wake_seconds: i64,
        sleep_hours: f64,
        coffee_count: u32,
    ) -> Result<f64, EstimationFailure> {
        (**self).predict(wake_seconds, sleep_hours, coffee_count)
    }
}

impl<T: SleepEstimator + ?Sized> SleepEstimator for Box<T> {
    fn predict(
        &self,
        wake_seconds: i64,
        sleep_hours: f64,
        coffee_count: u32,
    ) -> Result<f64, EstimationFailure> {
        (**self).predict(wake_seconds, sleep_hours, coffee_count)
    }
}

impl<T: SleepEstimator + ?Sized> SleepEstimator for Arc<T> {
    fn predict(
        &self,
        wake_seconds: i64,
        sleep_hours: f64,
        coffee_count: u32,
    ) -> Result<f64, EstimationFailure> {
        (**self).predict(wake_seconds, sleep_hours, coffee_count)
    }
}

/// Adapts a closure into a [`SleepEstimator`].
#[derive(Clone)]
pub struct FnEstimator<F>(F);

impl<F> FnEstimator<F>
where
    F: Fn(i64, f64, u32) -> Result<f64, EstimationFailure> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> SleepEstimator for FnEstimator<F>
where
    F: Fn(i64, f64, u32) -> Result<f64, EstimationFailure> + Send + Sync,
{
    fn predict(
        &self,
        wake_seconds: i64,
        sleep_hours: f64,
        coffee_count: u32,
    ) -> Result<f64, EstimationFailure> {
        (self.0)(wake_seconds, sleep_hours, coffee_count)
    }
}

impl<F> std::fmt::Debug for FnEstimator<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnEstimator")
    }
}
