pub mod cli;
pub mod params;

pub use params::QueryParams;

use crate::domain::ports::ParamSource;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "northwind-queries")]
#[command(about = "Declarative query exercises over an embedded sales dataset")]
pub struct CliConfig {
    #[arg(
        long = "exercise",
        short = 'e',
        help = "Exercise title to run (repeatable); runs everything when omitted"
    )]
    pub exercises: Vec<String>,

    #[arg(long, help = "List available exercises and exit")]
    pub list: bool,

    #[arg(
        long,
        help = "Write one report file per exercise here instead of printing"
    )]
    pub output_path: Option<String>,

    #[arg(long, help = "TOML file overriding the default query parameters")]
    pub params_file: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ParamSource for CliConfig {
    fn query_params(&self) -> Result<QueryParams> {
        match &self.params_file {
            Some(path) => QueryParams::from_toml_file(path),
            None => Ok(QueryParams::default()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.output_path {
            validate_path("output_path", path)?;
        }
        if let Some(path) = &self.params_file {
            validate_path("params_file", path)?;
        }
        Ok(())
    }
}
