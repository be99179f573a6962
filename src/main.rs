use clap::Parser;
use small_shop::core::ConfigProvider;
use small_shop::utils::error::ErrorSeverity;
use small_shop::utils::{logger, validation::Validate};
use small_shop::{Catalog, CliConfig, FileCatalogSource, Session, SessionOutcome, ShopError};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 合併設定檔與命令列參數
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            fail(e);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose(), config.log_level.as_deref());

    tracing::info!("Starting small-shop CLI");
    tracing::debug!("Session config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(e);
    }

    let source = FileCatalogSource::new(config.catalog_path());
    let catalog = match Catalog::load(&source) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("❌ Failed to load catalog '{}': {}", config.catalog_path(), e);
            fail(e);
        }
    };

    tracing::info!("✅ Catalog loaded: {} items", catalog.items().len());

    if config.dry_run {
        display_catalog_summary(&catalog, config.catalog_path());
        return Ok(());
    }

    let stdin = io::stdin();
    let mut session = Session::new(catalog, stdin.lock(), io::stdout()).with_prompt(config.prompt());

    match session.run()? {
        SessionOutcome::CheckedOut { total } => tracing::info!("💰 Checked out, total {}", total),
        SessionOutcome::Exited => tracing::info!("👋 Session ended without checkout"),
    }
    tracing::debug!("Cart at exit: {} items", session.catalog().cart().len());

    Ok(())
}

/// Startup errors end the process before the session starts.
fn fail(e: ShopError) -> ! {
    tracing::error!(
        "(Category: {:?}, Severity: {:?}) {}",
        e.category(),
        e.severity(),
        e
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
    };
    std::process::exit(exit_code);
}

fn display_catalog_summary(catalog: &Catalog, path: &str) {
    println!("📋 Catalog Summary:");
    println!("  File: {}", path);
    println!("  Items: {}", catalog.items().len());

    let mut tags: Vec<&str> = catalog
        .items()
        .iter()
        .flat_map(|i| i.tags())
        .map(String::as_str)
        .collect();
    tags.sort_unstable();
    tags.dedup();
    println!("  Hashtags: {}", tags.len());
    println!();

    for item in catalog.items() {
        println!("  {}", item);
    }
}
