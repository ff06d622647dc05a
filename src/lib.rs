pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::batch::{BatchConfig, SumDefinition};
pub use crate::core::{engine::SumEngine, pipeline::add};
pub use crate::utils::error::{Result, RomanError};
