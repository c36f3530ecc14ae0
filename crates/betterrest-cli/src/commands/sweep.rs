//! Recompute the bedtime for each coffee count, as the form does live while
//! the stepper moves.

use clap::Args;
use serde::Serialize;

use betterrest_core::{BedtimeEstimator, CoffeeCount, Config, TimeFormat};

use super::form::{FormArgs, FormatArg};

#[derive(Args, Debug)]
pub struct SweepArgs {
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
struct SweepRow {
    coffee: u32,
    bedtime: Option<String>,
    error: Option<String>,
}

pub fn run(args: SweepArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let form = args.form.resolve(&config)?;
    let format = args
        .format
        .map(TimeFormat::from)
        .unwrap_or(config.display.time_format);
    let estimator = BedtimeEstimator::new(args.form.estimator(&config)?);

    let rows: Vec<SweepRow> = (CoffeeCount::FORM_MIN..=CoffeeCount::FORM_MAX)
        .map(|cups| {
            match estimator.estimate(form.wake_up, form.sleep_amount, CoffeeCount::new(cups)) {
                Ok(bedtime) => SweepRow {
                    coffee: cups,
                    bedtime: Some(format.render(&bedtime)),
                    error: None,
                },
                Err(e) => SweepRow {
                    coffee: cups,
                    bedtime: None,
                    error: Some(e.to_string()),
                },
            }
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "Wake up at {}, {} of sleep",
        form.wake_up, form.sleep_amount
    );
    for row in &rows {
        let cups = CoffeeCount::new(row.coffee).to_string();
        match (&row.bedtime, &row.error) {
            (Some(bedtime), _) => println!("  {cups:<9} {bedtime}"),
            (None, Some(error)) => println!("  {cups:<9} error: {error}"),
            (None, None) => println!("  {cups:<9} -"),
        }
    }
    Ok(())
}
