//! The "Calculate" button: one bedtime for one set of form values.

use clap::Args;
use serde::Serialize;

use betterrest_core::{Bedtime, BedtimeEstimator, Config, TimeFormat};

use super::form::{Form, FormArgs, FormatArg};

const FAILURE_MESSAGE: &str = "Sorry, there was an error during calculation";

#[derive(Args, Debug)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub form: FormArgs,
    /// Clock style for the result (defaults to the configured one)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct EstimateReport {
    bedtime: String,
    hour: u32,
    minute: u32,
    days_before_wake: i64,
    predicted_sleep_seconds: i64,
    wake_up: String,
    sleep_amount: f64,
    coffee: u32,
}

impl EstimateReport {
    fn new(form: &Form, bedtime: &Bedtime, format: TimeFormat) -> Self {
        Self {
            bedtime: format.render(bedtime),
            hour: bedtime.hour(),
            minute: bedtime.minute(),
            days_before_wake: bedtime.days_before_wake(),
            predicted_sleep_seconds: bedtime.predicted_sleep().num_seconds(),
            wake_up: form.wake_up.to_string(),
            sleep_amount: form.sleep_amount.hours(),
            coffee: form.coffee.get(),
        }
    }
}

pub fn run(args: EstimateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let form = args.form.resolve(&config)?;
    let format = args
        .format
        .map(TimeFormat::from)
        .unwrap_or(config.display.time_format);

    let result = args
        .form
        .estimator(&config)
        .and_then(|estimator| {
            BedtimeEstimator::new(estimator).estimate(form.wake_up, form.sleep_amount, form.coffee)
        });

    match result {
        Ok(bedtime) => {
            if args.json {
                let report = EstimateReport::new(&form, &bedtime, format);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Your ideal bedtime is...");
                println!("{}", format.render(&bedtime));
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "bedtime estimation failed");
            eprintln!("Error");
            eprintln!("{FAILURE_MESSAGE}");
            std::process::exit(1);
        }
    }
    Ok(())
}
