pub mod engine;
pub mod pipeline;
pub mod tables;

pub use crate::domain::model::Symbol;
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
