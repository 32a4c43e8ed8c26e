use crate::channel::Channel;
use crate::sink::{FormatDirective, NativeLog, NativeSeverity, NativeSink};
use std::sync::Arc;

/// Sink that re-emits lines as `tracing` events with target `oslog`.
///
/// Used where os_log does not exist. Private lines keep the os_log contract
/// and are replaced with `<private>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a tracing sink
    pub fn new() -> Self {
        Self
    }
}

impl NativeSink for TracingSink {
    fn open(&self, channel: &Channel) -> Arc<dyn NativeLog> {
        tracing::debug!(channel = %channel, "Opened tracing channel");
        Arc::new(TracingLog {
            channel: channel.clone(),
        })
    }
}

#[derive(Debug)]
struct TracingLog {
    channel: Channel,
}

impl NativeLog for TracingLog {
    fn emit(&self, directive: FormatDirective, severity: NativeSeverity, message: &str) {
        let message = match directive {
            FormatDirective::Public => message,
            FormatDirective::Private => "<private>",
        };
        let subsystem = self.channel.domain();
        let category = self.channel.category();

        match severity {
            NativeSeverity::Debug => tracing::debug!(
                target: "oslog",
                subsystem = %subsystem,
                category = %category,
                severity = %severity,
                "{}",
                message
            ),
            NativeSeverity::Info => tracing::info!(
                target: "oslog",
                subsystem = %subsystem,
                category = %category,
                severity = %severity,
                "{}",
                message
            ),
            NativeSeverity::Error | NativeSeverity::Fault => tracing::error!(
                target: "oslog",
                subsystem = %subsystem,
                category = %category,
                severity = %severity,
                "{}",
                message
            ),
        }
    }
}
