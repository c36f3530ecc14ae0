//! Bedtime estimation.
//!
//! The caller supplies the three form inputs; a [`BedtimeEstimator`] asks its
//! [`SleepEstimator`](crate::estimator::SleepEstimator) how long the user
//! actually needs to sleep and walks back from the wake-up time.

mod calculator;
mod inputs;

pub use calculator::{Bedtime, BedtimeEstimator, EstimationResult};
pub use inputs::{CoffeeCount, SleepAmount, WakeUpTime};
