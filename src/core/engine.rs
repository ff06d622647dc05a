use crate::core::pipeline::{
    check_numeral, combine, compress_additive, expand_subtractive, fold_runs,
};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use std::time::Instant;

/// Drives the five pipeline stages for a configured set of numerals.
pub struct SumEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> SumEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<String> {
        let start = Instant::now();
        let numerals = self.config.numerals();

        tracing::debug!("Validating {} numerals", numerals.len());
        for numeral in numerals {
            check_numeral(numeral)?;
        }

        tracing::debug!("Expanding subtractive pairs");
        let additive_forms: Vec<String> = numerals
            .iter()
            .map(|numeral| expand_subtractive(numeral))
            .collect();

        let ordered_sum = combine(&additive_forms);
        tracing::debug!("Combined additive form: {}", ordered_sum);

        let reduced_sum = fold_runs(&ordered_sum);
        tracing::debug!("Folded to: {}", reduced_sum);

        let sum = compress_additive(&reduced_sum);
        tracing::debug!("Sum computed in {:?}", start.elapsed());

        Ok(sum)
    }
}
