use clap::Parser;
use roman_arith::utils::{logger, validation::Validate};
use roman_arith::{CliConfig, SumEngine};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting roman-arith CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Zero or one number: print usage and exit cleanly.
    if config.numerals.len() <= 1 {
        println!("Usage: roman-arith <roman-number-1> [...] <roman-number-n>");
        return;
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let engine = SumEngine::new(config);

    match engine.run() {
        Ok(sum) => {
            tracing::info!("✅ Sum computed successfully");
            println!("{}", sum);
        }
        Err(e) => {
            tracing::error!(
                "❌ Addition failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                roman_arith::utils::error::ErrorSeverity::Low => 0,
                roman_arith::utils::error::ErrorSeverity::Medium => 2,
                roman_arith::utils::error::ErrorSeverity::High => 1,
                roman_arith::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
