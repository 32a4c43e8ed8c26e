//! Logger facade handing records to a `LogHandler`

use crate::handler::{CallSite, LogHandler, Record};
use crate::level::Level;
use crate::metadata::{Metadata, MetadataValue};
use crate::system::LoggingSystem;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Cheap-to-clone logger bound to one label.
///
/// Clones share the handler, so a threshold or metadata change through one
/// clone is visible through all of them.
#[derive(Clone)]
pub struct Logger {
    label: String,
    source: String,
    handler: Arc<dyn LogHandler>,
}

impl Logger {
    /// Logger from the process-wide logging system
    pub fn new(label: impl Into<String>) -> Self {
        LoggingSystem::global().logger(label)
    }

    pub fn with_handler(label: impl Into<String>, handler: Arc<dyn LogHandler>) -> Self {
        let label = label.into();
        let source = default_source(&label).to_string();
        Self {
            label,
            source,
            handler,
        }
    }

    /// Override the component name shown as `[source]` in each line
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn handler(&self) -> &Arc<dyn LogHandler> {
        &self.handler
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.handler.log_level()
    }

    pub fn log_level(&self) -> Level {
        self.handler.log_level()
    }

    pub fn set_log_level(&self, level: Level) {
        self.handler.set_log_level(level);
    }

    pub fn metadata_value(&self, key: &str) -> Option<MetadataValue> {
        self.handler.metadata_value(key)
    }

    pub fn set_metadata_value(&self, key: &str, value: Option<MetadataValue>) {
        self.handler.set_metadata_value(key, value);
    }

    /// Forward one record if `level` passes the handler threshold
    pub fn log(
        &self,
        level: Level,
        message: impl fmt::Display,
        metadata: Option<&Metadata>,
        call_site: CallSite<'_>,
    ) {
        if !self.is_enabled(level) {
            return;
        }

        let message = message.to_string();
        let record = Record {
            level,
            message: &message,
            metadata,
            source: &self.source,
            call_site,
        };
        self.handler.log(&record);
    }

    #[track_caller]
    fn log_at_caller(&self, level: Level, message: impl fmt::Display, metadata: Option<&Metadata>) {
        let location = Location::caller();
        self.log(
            level,
            message,
            metadata,
            CallSite::new(location.file(), "", location.line()),
        );
    }

    #[track_caller]
    pub fn trace(&self, message: impl fmt::Display) {
        self.log_at_caller(Level::Trace, message, None);
    }

    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log_at_caller(Level::Debug, message, None);
    }

    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log_at_caller(Level::Info, message, None);
    }

    #[track_caller]
    pub fn notice(&self, message: impl fmt::Display) {
        self.log_at_caller(Level::Notice, message, None);
    }

    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) {
        self.log_at_caller(Level::Warning, message, None);
    }

    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log_at_caller(Level::Error, message, None);
    }

    #[track_caller]
    pub fn critical(&self, message: impl fmt::Display) {
        self.log_at_caller(Level::Critical, message, None);
    }

    /// Log with per-call metadata at the caller's location
    #[track_caller]
    pub fn log_with(&self, level: Level, message: impl fmt::Display, metadata: &Metadata) {
        self.log_at_caller(level, message, Some(metadata));
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("label", &self.label)
            .field("source", &self.source)
            .field("log_level", &self.log_level())
            .finish()
    }
}

/// Last non-empty label segment: `"App/Network"` logs as `[Network]`
fn default_source(label: &str) -> &str {
    label.rsplit('/').find(|s| !s.is_empty()).unwrap_or(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oslog::{ContentMode, OsLogHandler};
    use crate::sink::MemorySink;

    fn logger(label: &str, mode: ContentMode) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let handler = Arc::new(OsLogHandler::with_sink(label, mode, &sink));
        (Logger::with_handler(label, handler), sink)
    }

    #[test]
    fn test_default_source() {
        assert_eq!(default_source("App/Network"), "Network");
        assert_eq!(default_source("App"), "App");
        assert_eq!(default_source("App/"), "App");
        assert_eq!(default_source(""), "");
    }

    #[test]
    fn test_threshold_filters_records() {
        let (logger, sink) = logger("App/Net", ContentMode::Redacted);
        logger.set_log_level(Level::Warning);

        logger.info("dropped");
        logger.warning("kept");
        logger.critical("kept too");

        assert_eq!(sink.messages(), vec!["[Net]: kept", "[Net]: kept too"]);
    }

    #[test]
    fn test_track_caller_location() {
        let (logger, sink) = logger("App/Net", ContentMode::Exposed);
        logger.debug("here");

        let message = sink.last().unwrap().message;
        assert!(message.starts_with("[logger.rs("), "got {}", message);
        assert!(message.ends_with("][Net]: here"), "got {}", message);
    }

    #[test]
    fn test_with_source_override() {
        let (logger, sink) = logger("App/Net", ContentMode::Redacted);
        let logger = logger.with_source("Cache");
        logger.error("miss");

        assert_eq!(sink.messages(), vec!["[Cache]: miss"]);
    }

    #[test]
    fn test_clones_share_handler_state() {
        let (logger, sink) = logger("App/Net", ContentMode::Exposed);
        let clone = logger.clone();
        clone.set_metadata_value("request", Some("r1".into()));

        logger.log_with(Level::Info, "done", &Metadata::new().with("status", 200));

        assert_eq!(logger.metadata_value("request"), Some(MetadataValue::from("r1")));
        assert_eq!(
            sink.messages(),
            vec!["[Net]: done -- request = r1 status = 200"]
        );
    }
}
