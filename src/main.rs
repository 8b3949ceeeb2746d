use clap::Parser;
use notistat::utils::error::NotiError;
use notistat::utils::{logger, validation::Validate};
use notistat::{CliConfig, NotificationPipeline, ReportEngine, Settings, SqliteRecordSource};

fn fail(stage: &str, e: NotiError) -> ! {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting notistat");
    tracing::debug!("CLI config: {:?}", cli);

    // 合併並驗證配置
    let settings = match Settings::resolve(&cli).and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => fail("Configuration", e),
    };

    if settings.replace_user_names {
        tracing::info!("🔒 Replacing user names with pseudonyms");
    }

    let source = SqliteRecordSource::new(settings.db_path.clone());
    let pipeline = NotificationPipeline::new(source, settings);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(output) => print!("{}", output),
        Err(e) => fail("Report", e),
    }
}
