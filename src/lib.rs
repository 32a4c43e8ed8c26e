//! A logging backend that forwards structured log records to Apple's unified
//! logging system (`os_log`).
//!
//! A logger label `"subsystem/category"` selects the native channel. Metadata
//! is either rendered in full or replaced with `<private>`, depending on the
//! handler's [`ContentMode`].
//!
//! ```no_run
//! use oslog_handler::{ContentMode, LoggingSystem, Logger, Metadata, oslog_factory};
//!
//! LoggingSystem::bootstrap(oslog_factory(ContentMode::Exposed)).ok();
//!
//! let logger = Logger::new("com.example.app/Network");
//! logger.info("Hello World");
//! logger.log_with(
//!     oslog_handler::Level::Error,
//!     "request failed",
//!     &Metadata::new().with("status", 503),
//! );
//! ```

mod macros;

pub mod channel;
pub mod config;
pub mod error;
pub mod handler;
pub mod level;
pub mod logger;
pub mod logging;
pub mod metadata;
pub mod oslog;
pub mod sink;
pub mod system;

pub use channel::Channel;
pub use error::{OsLogError, Result};
pub use handler::{CallSite, LogHandler, Record};
pub use level::Level;
pub use logger::Logger;
pub use metadata::{Metadata, MetadataValue};
pub use oslog::{ContentMode, OsLogHandler, REDACTED_PLACEHOLDER};
#[cfg(target_vendor = "apple")]
pub use sink::OsLogSink;
pub use sink::{
    FormatDirective, MemoryEntry, MemorySink, NativeLog, NativeSeverity, NativeSink, TracingSink,
    default_sink,
};
pub use system::{HandlerFactory, LoggingSystem, oslog_factory};
