use anyhow::Context;
use clap::Parser;
use roman_arith::config::batch::BatchConfig;
use roman_arith::utils::validation::validate_path;
use roman_arith::utils::{logger, validation::Validate};
use roman_arith::SumEngine;

#[derive(Parser)]
#[command(name = "batch-add")]
#[command(about = "Add batches of roman numbers defined in a TOML file")]
struct Args {
    /// Path to TOML batch file
    #[arg(short, long, default_value = "sums.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - list the sums without computing them
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting batch roman addition");
    tracing::info!("📁 Loading batch from: {}", args.config);

    validate_path("config", &args.config)?;
    let config = BatchConfig::from_file(&args.config)
        .with_context(|| format!("failed to load batch file '{}'", args.config))?;

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Batch validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!(
        "✅ Batch '{}' loaded: {} sums",
        config.batch.name,
        config.sums.len()
    );
    if let Some(description) = &config.batch.description {
        tracing::info!("📝 {}", description);
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no sums will be computed");
        for sum in &config.sums {
            println!("{}: {}", sum.name, sum.terms.join(" + "));
        }
        return Ok(());
    }

    let mut failures = 0;
    for sum in &config.sums {
        let engine = SumEngine::new(sum.clone());
        match engine.run() {
            Ok(result) => println!("{} = {}", sum.name, result),
            Err(e) => {
                failures += 1;
                tracing::error!("❌ Sum '{}' failed: {}", sum.name, e);
                eprintln!("❌ {}: {}", sum.name, e.user_friendly_message());
                eprintln!("💡 建議: {}", e.recovery_suggestion());
            }
        }
    }

    if failures > 0 {
        tracing::error!("❌ {} of {} sums failed", failures, config.sums.len());
        std::process::exit(1);
    }

    tracing::info!("✅ All {} sums computed", config.sums.len());
    Ok(())
}
