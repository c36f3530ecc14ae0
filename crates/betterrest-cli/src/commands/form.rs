//! Form fields shared by the calculating commands.
//!
//! Anything not given on the command line comes from the config defaults.
//! Values are checked against the ranges the form's steppers allow.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use betterrest_core::error::Result;
use betterrest_core::storage::ModelConfig;
use betterrest_core::{
    CoffeeCount, Config, SleepAmount, SleepEstimator, TimeFormat, ValidationError, WakeUpTime,
};

#[derive(Args, Debug, Clone)]
pub struct FormArgs {
    /// Wake-up time (HH:MM)
    #[arg(long)]
    pub wake: Option<String>,
    /// Desired hours of sleep (4-12)
    #[arg(long)]
    pub sleep: Option<f64>,
    /// Cups of coffee per day (1-12)
    #[arg(long)]
    pub coffee: Option<u32>,
    /// Sleep model artifact (JSON coefficients)
    #[arg(long)]
    pub model: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum FormatArg {
    #[value(name = "12h")]
    TwelveHour,
    #[value(name = "24h")]
    TwentyFourHour,
}

impl From<FormatArg> for TimeFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::TwelveHour => TimeFormat::TwelveHour,
            FormatArg::TwentyFourHour => TimeFormat::TwentyFourHour,
        }
    }
}

/// Validated form values.
#[derive(Debug, Clone, Copy)]
pub struct Form {
    pub wake_up: WakeUpTime,
    pub sleep_amount: SleepAmount,
    pub coffee: CoffeeCount,
}

impl FormArgs {
    /// Fill in missing fields from `config` and validate.
    pub fn resolve(&self, config: &Config) -> Result<Form> {
        let wake_up = match &self.wake {
            Some(text) => text.parse::<WakeUpTime>()?,
            None => config.defaults.wake_up,
        };
        let sleep_amount =
            SleepAmount::checked(self.sleep.unwrap_or(config.defaults.sleep_amount))?;
        let coffee = check_coffee(self.coffee.unwrap_or(config.defaults.coffee))?;

        Ok(Form {
            wake_up,
            sleep_amount,
            coffee,
        })
    }

    /// The estimator to use: `--model` overrides the configured artifact.
    pub fn estimator(
        &self,
        config: &Config,
    ) -> std::result::Result<Box<dyn SleepEstimator>, betterrest_core::EstimationFailure> {
        self.model_config(config).build_estimator()
    }

    pub fn model_config(&self, config: &Config) -> ModelConfig {
        let mut model = config.model.clone();
        if let Some(path) = &self.model {
            model.path = Some(path.clone());
        }
        model
    }
}

fn check_coffee(cups: u32) -> std::result::Result<CoffeeCount, ValidationError> {
    if (CoffeeCount::FORM_MIN..=CoffeeCount::FORM_MAX).contains(&cups) {
        Ok(CoffeeCount::new(cups))
    } else {
        Err(ValidationError::OutOfRange {
            field: "coffee".into(),
            min: i64::from(CoffeeCount::FORM_MIN),
            max: i64::from(CoffeeCount::FORM_MAX),
            value: i64::from(cups),
        })
    }
}
