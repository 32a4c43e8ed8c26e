//! Logging macros capturing `file!()`, `module_path!()` and `line!()`
//!
//! ```ignore
//! use oslog_handler::{Logger, Metadata, info, log, Level};
//!
//! let logger = Logger::new("com.example.app/Network");
//! info!(logger, "connected to {}", host);
//! log!(logger, Level::Error, metadata: &Metadata::new().with("code", 504), "upstream timeout");
//! ```
//!
//! Formatting only happens when the level passes the handler threshold.

/// Log at an explicit level, optionally with `metadata: <&Metadata>,` first
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, metadata: $metadata:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled(level) {
            logger.log(
                level,
                ::std::format_args!($($arg)+),
                ::std::option::Option::Some($metadata),
                $crate::CallSite::new(::std::file!(), ::std::module_path!(), ::std::line!()),
            );
        }
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled(level) {
            logger.log(
                level,
                ::std::format_args!($($arg)+),
                ::std::option::Option::None,
                $crate::CallSite::new(::std::file!(), ::std::module_path!(), ::std::line!()),
            );
        }
    }};
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Trace, $($arg)+) };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Notice, $($arg)+) };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Warning, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Error, $($arg)+) };
}

#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Critical, $($arg)+) };
}

#[cfg(test)]
mod tests {
    use crate::{ContentMode, Level, Logger, Metadata, MemorySink, OsLogHandler};
    use std::sync::Arc;

    fn logger(mode: ContentMode) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let handler = Arc::new(OsLogHandler::with_sink("App/Macros", mode, &sink));
        (Logger::with_handler("App/Macros", handler), sink)
    }

    #[test]
    fn test_level_macros_format_arguments() {
        let (logger, sink) = logger(ContentMode::Redacted);
        crate::info!(logger, "connected to {}:{}", "db", 5432);
        crate::critical!(logger, "down");

        assert_eq!(
            sink.messages(),
            vec!["[Macros]: connected to db:5432", "[Macros]: down"]
        );
    }

    #[test]
    fn test_macro_metadata_argument() {
        let (logger, sink) = logger(ContentMode::Exposed);
        let metadata = Metadata::new().with("code", 504);
        crate::log!(logger, Level::Error, metadata: &metadata, "upstream {}", "timeout");

        assert_eq!(sink.messages(), vec!["[Macros]: upstream timeout -- code = 504"]);
    }

    #[test]
    fn test_macro_captures_file_and_line() {
        let (logger, sink) = logger(ContentMode::Exposed);
        let line = line!() + 1;
        crate::trace!(logger, "here");

        assert_eq!(
            sink.messages(),
            vec![format!("[macros.rs({})][Macros]: here", line)]
        );
    }

    #[test]
    fn test_disabled_level_skips_formatting() {
        struct Panics;
        impl std::fmt::Display for Panics {
            fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                panic!("formatted a filtered record");
            }
        }

        let (logger, sink) = logger(ContentMode::Redacted);
        logger.set_log_level(Level::Error);
        crate::debug!(logger, "{}", Panics);
        crate::warning!(logger, "{}", Panics);

        assert!(sink.entries().is_empty());
    }
}
