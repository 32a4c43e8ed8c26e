use oslog_handler::config::load_settings;
use oslog_handler::error::Result;
use oslog_handler::logging::init_tracing;
use oslog_handler::{Level, Logger, LoggingSystem, Metadata, default_sink};

fn main() -> Result<()> {
    // Only visible when the tracing sink is the native sink (non-Apple targets)
    init_tracing("oslog=trace,oslog_handler=debug");

    let settings = load_settings()?;
    tracing::info!(
        metadata_content = %settings.metadata_content,
        log_level = %settings.log_level,
        "Configuration loaded"
    );

    LoggingSystem::bootstrap(settings.handler_factory(default_sink()))?;

    let logger = Logger::new("OSLogHandlerTests/Logging");
    logger.info("Hello World");

    logger.set_metadata_value("run", Some(std::process::id().into()));
    let metadata = Metadata::new()
        .with("binary", env!("CARGO_PKG_NAME"))
        .with("version", env!("CARGO_PKG_VERSION"));

    for level in Level::ALL {
        oslog_handler::log!(logger, level, metadata: &metadata, "smoke test at {}", level);
    }

    Ok(())
}
