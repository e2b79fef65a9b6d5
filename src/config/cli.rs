use crate::config::Strategy;
use crate::utils::error::{Result, RomanError};
use crate::utils::validation::{validate_existing_file, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "roman-add")]
#[command(about = "Add Roman numerals written with I, V and X")]
pub struct CliConfig {
    /// First numeral, e.g. XIV
    pub augend: Option<String>,

    /// Second numeral, e.g. IX
    pub addend: Option<String>,

    #[arg(long, help = "JSON file holding an array of [augend, addend] pairs")]
    pub batch: Option<PathBuf>,

    #[arg(long, value_enum, help = "Canonicalization rule set")]
    pub strategy: Option<Strategy>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Warn when a sum's value differs from its operands")]
    pub verify: bool,

    #[arg(long, help = "Print results as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_existing_file("--config", path)?;
        }

        match (&self.batch, &self.augend, &self.addend) {
            (Some(path), None, None) => validate_existing_file("--batch", path),
            (None, Some(_), Some(_)) => Ok(()),
            (Some(_), _, _) => Err(RomanError::ConfigValidationError {
                field: "--batch".to_string(),
                message: "cannot be combined with positional numerals".to_string(),
            }),
            (None, _, _) => Err(RomanError::ConfigValidationError {
                field: "numerals".to_string(),
                message: "expected two numerals or --batch <FILE>".to_string(),
            }),
        }
    }
}
