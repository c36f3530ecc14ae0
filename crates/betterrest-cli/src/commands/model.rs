use clap::Subcommand;
use std::path::PathBuf;

use betterrest_core::Config;

#[derive(Subcommand)]
pub enum ModelAction {
    /// Print the active model coefficients
    Show {
        /// Model artifact to inspect instead of the configured one
        #[arg(long)]
        model: Option<PathBuf>,
    },
}

pub fn run(action: ModelAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ModelAction::Show { model } => {
            let config = Config::load()?;
            let mut model_config = config.model;
            if model.is_some() {
                model_config.path = model;
            }
            let coefficients = model_config.load_model()?;
            let source = match &model_config.path {
                Some(path) => path.display().to_string(),
                None => "bundled".to_string(),
            };
            println!("source: {source}");
            println!("{}", serde_json::to_string_pretty(&coefficients)?);
        }
    }
    Ok(())
}
