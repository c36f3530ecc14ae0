//! # BetterRest Core Library
//!
//! Estimates an ideal bedtime from a desired wake-up time, the hours of sleep
//! the user wants, and how much coffee they drink. The CLI is a thin layer
//! over this crate.
//!
//! ## Architecture
//!
//! - **Bedtime**: converts the wake-up time to seconds since midnight, asks a
//!   sleep estimator how long the user really needs, and subtracts that from
//!   the wake-up instant (rolling back across midnight as needed)
//! - **Estimators**: the [`SleepEstimator`] trait plus a coefficient-driven
//!   [`LinearModel`] and a [`TimeBoxed`] deadline wrapper
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`BedtimeEstimator`]: the bedtime calculation
//! - [`SleepEstimator`]: pluggable sleep duration model
//! - [`Config`]: application configuration management

pub mod bedtime;
pub mod error;
pub mod estimator;
pub mod storage;

pub use bedtime::{Bedtime, BedtimeEstimator, CoffeeCount, EstimationResult, SleepAmount, WakeUpTime};
pub use error::{ConfigError, CoreError, EstimationFailure, ValidationError};
pub use estimator::{FnEstimator, LinearModel, SleepEstimator, TimeBoxed};
pub use storage::{Config, TimeFormat};
