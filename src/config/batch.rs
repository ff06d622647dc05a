use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 批次加總設定檔
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch: BatchInfo,
    pub sums: Vec<SumDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SumDefinition {
    pub name: String,
    pub terms: Vec<String>,
}

impl BatchConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BatchConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl ConfigProvider for SumDefinition {
    fn numerals(&self) -> &[String] {
        &self.terms
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("batch.name", &self.batch.name)?;
        validate_positive_number("sums", self.sums.len(), 1)?;

        for sum in &self.sums {
            validate_non_empty_string("sums.name", &sum.name)?;
            validate_positive_number(&format!("sums.{}.terms", sum.name), sum.terms.len(), 1)?;
            for term in &sum.terms {
                validate_non_empty_string(&format!("sums.{}.terms", sum.name), term)?;
            }
        }

        Ok(())
    }
}
