//! Log record adapter forwarding to the native unified logging facility

use crate::channel::Channel;
use crate::error::{OsLogError, Result};
use crate::handler::{LogHandler, Record};
use crate::level::Level;
use crate::metadata::{Metadata, MetadataCache, MetadataValue};
use crate::sink::{self, FormatDirective, NativeLog, NativeSink};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

/// Placeholder written instead of metadata in redacted mode
pub const REDACTED_PLACEHOLDER: &str = "<private>";

/// Whether structured metadata is ever rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMode {
    /// Metadata is replaced with `<private>`. Safe for release builds.
    #[default]
    #[serde(alias = "private")]
    Redacted,
    /// Metadata is rendered as `key = value` pairs
    #[serde(alias = "public")]
    Exposed,
}

impl ContentMode {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentMode::Redacted => "redacted",
            ContentMode::Exposed => "exposed",
        }
    }
}

impl fmt::Display for ContentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentMode {
    type Err = OsLogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redacted" | "private" => Ok(ContentMode::Redacted),
            "exposed" | "public" => Ok(ContentMode::Exposed),
            _ => Err(OsLogError::InvalidContentMode(s.to_string())),
        }
    }
}

/// Handler that sends records to os_log.
///
/// The label picks the native `subsystem` and `category` (`"subsystem/category"`).
/// The content mode decides whether metadata shows up in the message or is
/// replaced by `<private>`.
pub struct OsLogHandler {
    channel: Channel,
    content_mode: ContentMode,
    log_level: RwLock<Level>,
    metadata: MetadataCache,
    native: Arc<dyn NativeLog>,
}

impl OsLogHandler {
    /// Open a handler on the process-wide platform sink
    pub fn new(label: &str, content_mode: ContentMode) -> Self {
        Self::with_sink(label, content_mode, sink::default_sink().as_ref())
    }

    /// Open a handler on an explicit sink
    pub fn with_sink(label: &str, content_mode: ContentMode, sink: &dyn NativeSink) -> Self {
        let channel = Channel::from_label(label);
        let native = sink.open(&channel);

        tracing::debug!(
            label = %label,
            subsystem = %channel.domain(),
            category = %channel.category(),
            content_mode = %content_mode,
            "Created os_log handler"
        );

        Self {
            channel,
            content_mode,
            log_level: RwLock::new(Level::Trace),
            metadata: MetadataCache::new(),
            native,
        }
    }

    /// Native channel derived from the label
    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Metadata content mode fixed at construction
    pub fn content_mode(&self) -> ContentMode {
        self.content_mode
    }

    /// Build the single line handed to the native sink
    pub fn format_message(&self, record: &Record<'_>) -> String {
        let exposed = self.content_mode == ContentMode::Exposed;
        let mut message = String::new();
        let site = record.call_site;

        if record.level < Level::Info && exposed && !site.file.is_empty() {
            message.push_str(&format!("[{}({})]", file_name(site.file), site.line));
        }

        message.push_str(&format!("[{}]: {}", record.source, record.message));

        if let Some(metadata) = record.metadata {
            message.push_str(" -- ");
            if exposed {
                if let Some(accumulated) = self.metadata.rendered() {
                    message.push_str(&accumulated);
                    message.push(' ');
                }
                if let Some(rendered) = metadata.render() {
                    message.push_str(&rendered);
                }
            } else {
                message.push_str(REDACTED_PLACEHOLDER);
            }
        }

        message
    }
}

impl LogHandler for OsLogHandler {
    fn log(&self, record: &Record<'_>) {
        let message = self.format_message(record);
        // Redaction already happened above, so the native layer must not redact again.
        self.native.emit(
            FormatDirective::Public,
            record.level.native_severity(),
            &message,
        );
    }

    fn log_level(&self) -> Level {
        *self.log_level.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_log_level(&self, level: Level) {
        *self.log_level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }

    fn metadata_value(&self, key: &str) -> Option<MetadataValue> {
        self.metadata.get(key)
    }

    fn set_metadata_value(&self, key: &str, value: Option<MetadataValue>) {
        self.metadata.set(key, value);
    }

    fn metadata(&self) -> Metadata {
        self.metadata.snapshot()
    }

    fn set_metadata(&self, metadata: Metadata) {
        self.metadata.replace(metadata);
    }
}

impl fmt::Debug for OsLogHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OsLogHandler")
            .field("channel", &self.channel)
            .field("content_mode", &self.content_mode)
            .field("log_level", &self.log_level())
            .field("native", &self.native)
            .finish()
    }
}

/// Last non-empty `/` segment of a path
fn file_name(path: &str) -> &str {
    path.rsplit('/').find(|s| !s.is_empty()).unwrap_or("")
}
