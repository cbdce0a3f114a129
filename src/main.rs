use anyhow::Context;
use clap::Parser;
use job_search_hub::core::ConfigProvider;
use job_search_hub::utils::error::{ErrorSeverity, HubError};
use job_search_hub::utils::{logger, validation::Validate};
use job_search_hub::{CliConfig, HubEngine, LocalStorage, RunOutcome};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting job-search-hub");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並合併配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(e);
    }

    let storage = LocalStorage::new(config.output_path().unwrap_or(".").to_string());
    let engine = HubEngine::new(storage, config);

    match engine.run() {
        Ok(RunOutcome::Written(path)) => {
            println!("✅ Dashboard saved to: {}", path);
        }
        Ok(RunOutcome::Rendered(content)) => {
            std::io::stdout()
                .lock()
                .write_all(content.as_bytes())
                .context("Failed to write dashboard to stdout")?;
        }
        Err(e) => fail(e),
    }

    Ok(())
}

fn fail(e: HubError) -> ! {
    tracing::error!(
        "❌ job-search-hub failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
