//! Process-wide registry mapping logger labels to handler factories
//!
//! # Data Flow
//! ```text
//! LoggingSystem::bootstrap(factory)   (once, at startup)
//! Logger::new(label)
//!     → LoggingSystem::global()
//!     → overrides[label] or default factory
//!     → Arc<dyn LogHandler>
//! ```

use crate::error::{OsLogError, Result};
use crate::handler::LogHandler;
use crate::logger::Logger;
use crate::oslog::{ContentMode, OsLogHandler};
use dashmap::DashMap;
use std::sync::{Arc, OnceLock};

/// Builds a handler for a label
pub type HandlerFactory = Arc<dyn Fn(&str) -> Arc<dyn LogHandler> + Send + Sync>;

static SYSTEM: OnceLock<LoggingSystem> = OnceLock::new();

pub struct LoggingSystem {
    factory: HandlerFactory,
    overrides: DashMap<String, HandlerFactory>,
}

impl LoggingSystem {
    pub fn new(factory: HandlerFactory) -> Self {
        Self {
            factory,
            overrides: DashMap::new(),
        }
    }

    /// Install the process-wide system. Only the first call wins.
    pub fn bootstrap(factory: HandlerFactory) -> Result<()> {
        SYSTEM
            .set(Self::new(factory))
            .map_err(|_| OsLogError::AlreadyBootstrapped)?;
        tracing::debug!("Logging system bootstrapped");
        Ok(())
    }

    /// The bootstrapped system, or a redacted os_log default if nobody bootstrapped
    pub fn global() -> &'static LoggingSystem {
        SYSTEM.get_or_init(|| Self::new(default_factory()))
    }

    /// Route one exact label to its own factory
    pub fn register(&self, label: impl Into<String>, factory: HandlerFactory) {
        let label = label.into();
        tracing::debug!(label = %label, "Registered handler factory override");
        self.overrides.insert(label, factory);
    }

    pub fn unregister(&self, label: &str) -> bool {
        self.overrides.remove(label).is_some()
    }

    pub fn make_handler(&self, label: &str) -> Arc<dyn LogHandler> {
        let factory = self
            .overrides
            .get(label)
            .map(|entry| entry.value().clone())
            .unwrap_or_else(|| self.factory.clone());
        factory(label)
    }

    pub fn logger(&self, label: impl Into<String>) -> Logger {
        let label = label.into();
        let handler = self.make_handler(&label);
        Logger::with_handler(label, handler)
    }
}

impl Default for LoggingSystem {
    fn default() -> Self {
        Self::new(default_factory())
    }
}

/// Factory producing `OsLogHandler`s with the given content mode on the platform sink
pub fn oslog_factory(content_mode: ContentMode) -> HandlerFactory {
    Arc::new(move |label: &str| {
        Arc::new(OsLogHandler::new(label, content_mode)) as Arc<dyn LogHandler>
    })
}

fn default_factory() -> HandlerFactory {
    oslog_factory(ContentMode::Redacted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MemorySink, NativeSink};

    fn memory_factory(sink: &MemorySink, mode: ContentMode) -> HandlerFactory {
        let sink = sink.clone();
        Arc::new(move |label: &str| {
            Arc::new(OsLogHandler::with_sink(label, mode, &sink as &dyn NativeSink))
                as Arc<dyn LogHandler>
        })
    }

    #[test]
    fn test_logger_uses_factory() {
        let sink = MemorySink::new();
        let system = LoggingSystem::new(memory_factory(&sink, ContentMode::Exposed));

        let logger = system.logger("OSLogHandlerTests/Logging");
        logger.info("Hello World");

        let entry = sink.last().unwrap();
        assert_eq!(entry.channel.domain(), "OSLogHandlerTests");
        assert_eq!(entry.channel.category(), "Logging");
        assert_eq!(entry.message, "[Logging]: Hello World");
    }

    #[test]
    fn test_override_takes_precedence() {
        let default_sink = MemorySink::new();
        let override_sink = MemorySink::new();
        let system = LoggingSystem::new(memory_factory(&default_sink, ContentMode::Redacted));
        system.register("App/Audit", memory_factory(&override_sink, ContentMode::Exposed));

        system.logger("App/Audit").info("audited");
        system.logger("App/Other").info("plain");

        assert_eq!(override_sink.messages(), vec!["[Audit]: audited"]);
        assert_eq!(default_sink.messages(), vec!["[Other]: plain"]);

        assert!(system.unregister("App/Audit"));
        assert!(!system.unregister("App/Audit"));
        system.logger("App/Audit").info("back to default");
        assert_eq!(default_sink.messages().len(), 2);
    }

    #[test]
    fn test_bootstrap_only_once() {
        let sink = MemorySink::new();
        // Another test in this process may have touched the global already.
        let _ = LoggingSystem::bootstrap(memory_factory(&sink, ContentMode::Exposed));

        let second = LoggingSystem::bootstrap(memory_factory(&sink, ContentMode::Exposed));
        assert!(matches!(second, Err(OsLogError::AlreadyBootstrapped)));
    }

    #[test]
    fn test_global_logger_never_fails() {
        let logger = Logger::new("App/Smoke");
        logger.info("Hello World");
        assert_eq!(logger.label(), "App/Smoke");
    }
}
