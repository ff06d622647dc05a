use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "roman-arith")]
#[command(about = "Add roman numbers using only symbol manipulation")]
pub struct CliConfig {
    /// Roman numbers to add together
    pub numerals: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn numerals(&self) -> &[String] {
        &self.numerals
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // The engine itself tolerates empty tokens; the CLI refuses them so a
        // stray "" argument surfaces as a config problem, not a silent no-op.
        for numeral in &self.numerals {
            validate_non_empty_string("numerals", numeral)?;
        }
        Ok(())
    }
}
