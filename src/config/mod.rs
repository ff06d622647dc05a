pub mod batch;
#[cfg(feature = "cli")]
pub mod cli;

pub use batch::BatchConfig;
#[cfg(feature = "cli")]
pub use cli::CliConfig;
