//! Native logging sinks
//!
//! # Data Flow
//! ```text
//! OsLogHandler::new(label)
//!     → NativeSink::open(channel)      (once, at construction)
//!     → Arc<dyn NativeLog>
//! OsLogHandler::log(record)
//!     → NativeLog::emit(directive, severity, message)
//! ```
//!
//! Sinks never report failures to the caller. A message the platform drops is
//! simply lost.

mod memory;
mod tracing_sink;

#[cfg(target_vendor = "apple")]
mod apple;

#[cfg(target_vendor = "apple")]
pub use apple::OsLogSink;
pub use memory::{MemoryEntry, MemorySink};
pub use tracing_sink::TracingSink;

use crate::channel::Channel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Severity as understood by the native facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeSeverity {
    Debug,
    Info,
    Error,
    Fault,
}

impl NativeSeverity {
    /// Raw `os_log_type_t` value
    pub fn os_log_type(&self) -> u8 {
        match self {
            NativeSeverity::Debug => 0x02,
            NativeSeverity::Info => 0x01,
            NativeSeverity::Error => 0x10,
            NativeSeverity::Fault => 0x11,
        }
    }

    /// Lowercase severity name
    pub fn as_str(&self) -> &'static str {
        match self {
            NativeSeverity::Debug => "debug",
            NativeSeverity::Info => "info",
            NativeSeverity::Error => "error",
            NativeSeverity::Fault => "fault",
        }
    }
}

impl fmt::Display for NativeSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Privacy directive the native formatter applies to the message argument.
///
/// `OsLogHandler` redacts metadata itself and always emits `Public`. `Private`
/// is for callers driving a `NativeLog` directly with text the native store
/// should hide; every bundled sink honors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatDirective {
    /// `%{public}@`: rendered as-is in the native store
    Public,
    /// `%{private}@`: redacted by the native store outside development
    Private,
}

impl FormatDirective {
    /// The os_log format string for this directive
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatDirective::Public => "%{public}@",
            FormatDirective::Private => "%{private}@",
        }
    }
}

/// An opened native logging channel
pub trait NativeLog: Send + Sync + fmt::Debug {
    fn emit(&self, directive: FormatDirective, severity: NativeSeverity, message: &str);
}

/// Opens native channels. Opening never fails; a sink that cannot reach its
/// facility hands back a channel that drops messages.
pub trait NativeSink: Send + Sync {
    fn open(&self, channel: &Channel) -> Arc<dyn NativeLog>;
}

static DEFAULT_SINK: OnceLock<Arc<dyn NativeSink>> = OnceLock::new();

/// Process-wide platform sink: os_log on Apple targets, tracing everywhere else.
///
/// Every call returns the same instance, so handlers built for one label share
/// one native channel.
pub fn default_sink() -> Arc<dyn NativeSink> {
    DEFAULT_SINK.get_or_init(platform_sink).clone()
}

#[cfg(target_vendor = "apple")]
fn platform_sink() -> Arc<dyn NativeSink> {
    Arc::new(OsLogSink::new())
}

#[cfg(not(target_vendor = "apple"))]
fn platform_sink() -> Arc<dyn NativeSink> {
    Arc::new(TracingSink::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_log_type_values() {
        assert_eq!(NativeSeverity::Info.os_log_type(), 0x01);
        assert_eq!(NativeSeverity::Debug.os_log_type(), 0x02);
        assert_eq!(NativeSeverity::Error.os_log_type(), 0x10);
        assert_eq!(NativeSeverity::Fault.os_log_type(), 0x11);
    }

    #[test]
    fn test_format_directive() {
        assert_eq!(FormatDirective::Public.as_str(), "%{public}@");
        assert_eq!(FormatDirective::Private.as_str(), "%{private}@");
    }

    #[test]
    fn test_default_sink_is_shared() {
        assert!(Arc::ptr_eq(&default_sink(), &default_sink()));
    }

    #[test]
    fn test_default_sink_opens_channel() {
        let sink = default_sink();
        let log = sink.open(&Channel::new("oslog-handler", "tests"));
        log.emit(FormatDirective::Public, NativeSeverity::Debug, "default sink smoke");
    }
}
