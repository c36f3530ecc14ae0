//! Bedtime calculation on top of an injected [`SleepEstimator`].

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;
use std::fmt;

use super::inputs::{CoffeeCount, SleepAmount, WakeUpTime};
use crate::error::EstimationFailure;
use crate::estimator::SleepEstimator;

/// Outcome of a single estimation.
pub type EstimationResult = Result<Bedtime, EstimationFailure>;

/// A recommended bedtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bedtime {
    instant: NaiveDateTime,
    wake_up_at: NaiveDateTime,
    predicted_sleep_seconds: i64,
}

impl Bedtime {
    /// Full date-time of the bedtime.
    pub fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    /// Date-time of the wake-up the bedtime was computed for.
    pub fn wake_up_at(&self) -> NaiveDateTime {
        self.wake_up_at
    }

    pub fn hour(&self) -> u32 {
        self.instant.hour()
    }

    pub fn minute(&self) -> u32 {
        self.instant.minute()
    }

    /// Predicted sleep, rounded to whole seconds.
    pub fn predicted_sleep(&self) -> Duration {
        Duration::seconds(self.predicted_sleep_seconds)
    }

    /// Calendar days between bedtime and wake-up; 1 for the usual overnight case.
    pub fn days_before_wake(&self) -> i64 {
        (self.wake_up_at.date() - self.instant.date()).num_days()
    }

    /// `23:05`
    pub fn format_24h(&self) -> String {
        self.instant.format("%H:%M").to_string()
    }

    /// `11:05 PM`
    pub fn format_12h(&self) -> String {
        self.instant.format("%-I:%M %p").to_string()
    }
}

impl fmt::Display for Bedtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_12h())
    }
}

/// Turns wake-up time, desired sleep and coffee intake into a bedtime.
///
/// Stateless apart from the estimator it wraps; every call recomputes from
/// scratch.
#[derive(Debug, Clone)]
pub struct BedtimeEstimator<E> {
    estimator: E,
}

impl<E: SleepEstimator> BedtimeEstimator<E> {
    pub fn new(estimator: E) -> Self {
        Self { estimator }
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Estimate a bedtime for a wake-up today (local date).
    ///
    /// # Errors
    ///
    /// Returns [`EstimationFailure`] when the estimator fails or its prediction
    /// is not a usable duration.
    pub fn estimate(
        &self,
        wake_up: WakeUpTime,
        sleep_amount: SleepAmount,
        coffee_count: CoffeeCount,
    ) -> EstimationResult {
        self.estimate_on(Local::now().date_naive(), wake_up, sleep_amount, coffee_count)
    }

    /// Estimate a bedtime for a wake-up on `date`.
    ///
    /// The subtraction happens on a full date-time, so a bedtime before
    /// midnight lands on the previous day.
    ///
    /// # Errors
    ///
    /// Same as [`BedtimeEstimator::estimate`].
    pub fn estimate_on(
        &self,
        date: NaiveDate,
        wake_up: WakeUpTime,
        sleep_amount: SleepAmount,
        coffee_count: CoffeeCount,
    ) -> EstimationResult {
        let wake_seconds = wake_up.seconds_since_midnight();
        let predicted =
            self.estimator
                .predict(wake_seconds, sleep_amount.hours(), coffee_count.get())?;
        tracing::debug!(
            wake_seconds,
            sleep_hours = sleep_amount.hours(),
            coffee = coffee_count.get(),
            predicted,
            "sleep duration predicted"
        );

        let duration = prediction_to_duration(predicted)?;
        let wake_up_at = date.and_time(wake_up.as_naive_time());
        let instant = wake_up_at
            .checked_sub_signed(duration)
            .ok_or(EstimationFailure::InvalidPrediction(predicted))?;

        Ok(Bedtime {
            instant,
            wake_up_at,
            predicted_sleep_seconds: duration.num_seconds(),
        })
    }
}

fn prediction_to_duration(seconds: f64) -> Result<Duration, EstimationFailure> {
    if !seconds.is_finite() || seconds < 0.0 {
        tracing::warn!(seconds, "rejecting prediction");
        return Err(EstimationFailure::InvalidPrediction(seconds));
    }
    // `as` saturates, so huge values fall through to try_seconds and fail there.
    Duration::try_seconds(seconds.round() as i64).ok_or_else(|| {
        tracing::warn!(seconds, "prediction out of range");
        EstimationFailure::InvalidPrediction(seconds)
    })
}
