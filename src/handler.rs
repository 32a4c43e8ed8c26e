//! The backend seam between the `Logger` facade and concrete handlers

use crate::level::Level;
use crate::metadata::{Metadata, MetadataValue};

/// Where a log call was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub function: &'a str,
    pub line: u32,
}

impl<'a> CallSite<'a> {
    /// Call site from raw parts, usually `file!()`, `module_path!()` and `line!()`
    pub fn new(file: &'a str, function: &'a str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }
}

/// One log call, borrowed for the duration of `LogHandler::log`
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: Level,
    pub message: &'a str,
    pub metadata: Option<&'a Metadata>,
    pub source: &'a str,
    pub call_site: CallSite<'a>,
}

impl<'a> Record<'a> {
    /// Record without metadata or call site
    pub fn new(level: Level, message: &'a str, source: &'a str) -> Self {
        Self {
            level,
            message,
            metadata: None,
            source,
            call_site: CallSite::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: &'a Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_call_site(mut self, call_site: CallSite<'a>) -> Self {
        self.call_site = call_site;
        self
    }
}

/// A logging backend.
///
/// Handlers are shared between logger clones and threads, so the mutable
/// parts (threshold and accumulated metadata) take `&self`.
pub trait LogHandler: Send + Sync {
    /// Handle one record. Must not fail or block on the caller's behalf.
    fn log(&self, record: &Record<'_>);

    /// Minimum level the facade should forward
    fn log_level(&self) -> Level;

    fn set_log_level(&self, level: Level);

    fn metadata_value(&self, key: &str) -> Option<MetadataValue>;

    /// `None` removes the key
    fn set_metadata_value(&self, key: &str, value: Option<MetadataValue>);

    fn metadata(&self) -> Metadata;

    fn set_metadata(&self, metadata: Metadata);
}
