use crate::channel::Channel;
use crate::sink::{FormatDirective, NativeLog, NativeSeverity, NativeSink};
use std::sync::{Arc, Mutex, PoisonError};

/// One captured emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryEntry {
    pub channel: Channel,
    pub directive: FormatDirective,
    pub severity: NativeSeverity,
    pub message: String,
}

/// Sink that keeps every emitted line in memory.
///
/// Cloning shares the buffer, so a test can hold one clone while a handler
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<MemoryEntry>>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Every entry captured so far, oldest first
    pub fn entries(&self) -> Vec<MemoryEntry> {
        self.lock().clone()
    }

    /// Just the message text of every entry
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|e| e.message.clone()).collect()
    }

    /// Most recent entry
    pub fn last(&self) -> Option<MemoryEntry> {
        self.lock().last().cloned()
    }

    /// Drop all captured entries
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<MemoryEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl NativeSink for MemorySink {
    fn open(&self, channel: &Channel) -> Arc<dyn NativeLog> {
        Arc::new(MemoryLog {
            channel: channel.clone(),
            sink: self.clone(),
        })
    }
}

#[derive(Debug)]
struct MemoryLog {
    channel: Channel,
    sink: MemorySink,
}

impl NativeLog for MemoryLog {
    fn emit(&self, directive: FormatDirective, severity: NativeSeverity, message: &str) {
        self.sink.lock().push(MemoryEntry {
            channel: self.channel.clone(),
            directive,
            severity,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_entries() {
        let sink = MemorySink::new();
        let log = sink.open(&Channel::new("App", "Db"));

        log.emit(FormatDirective::Public, NativeSeverity::Info, "first");
        log.emit(FormatDirective::Private, NativeSeverity::Fault, "second");

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].channel, Channel::new("App", "Db"));
        assert_eq!(entries[1].directive, FormatDirective::Private);
        assert_eq!(sink.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_clones_share_buffer() {
        let sink = MemorySink::new();
        let other = sink.clone();
        other
            .open(&Channel::new("App", ""))
            .emit(FormatDirective::Public, NativeSeverity::Debug, "shared");

        assert_eq!(sink.last().map(|e| e.message), Some("shared".to_string()));
        sink.clear();
        assert!(other.entries().is_empty());
    }
}
