//! os_log bindings through the C shim built in `build.rs`

use crate::channel::Channel;
use crate::logging::log_error;
use crate::sink::{FormatDirective, NativeLog, NativeSeverity, NativeSink};
use dashmap::DashMap;
use std::ffi::{CString, c_char, c_void};
use std::ptr;
use std::sync::Arc;

type OsLogT = *mut c_void;

unsafe extern "C" {
    fn oslog_handler_create(subsystem: *const c_char, category: *const c_char) -> OsLogT;
    fn oslog_handler_release(log: OsLogT);
    fn oslog_handler_emit_public(log: OsLogT, log_type: u8, message: *const c_char);
    fn oslog_handler_emit_private(log: OsLogT, log_type: u8, message: *const c_char);
}

/// Sink backed by Apple's unified logging.
///
/// `os_log_t` handles are cached per channel, so loggers sharing a label share
/// one native handle.
#[derive(Debug, Default)]
pub struct OsLogSink {
    handles: DashMap<Channel, Arc<OsLog>>,
}

impl OsLogSink {
    /// Create a sink with an empty handle cache
    pub fn new() -> Self {
        Self::default()
    }
}

impl NativeSink for OsLogSink {
    fn open(&self, channel: &Channel) -> Arc<dyn NativeLog> {
        self.handles
            .entry(channel.clone())
            .or_insert_with(|| Arc::new(OsLog::create(channel)))
            .clone()
    }
}

#[derive(Debug)]
struct OsLog {
    raw: OsLogT,
}

// SAFETY: os_log_t objects are immutable and documented as thread-safe.
unsafe impl Send for OsLog {}
unsafe impl Sync for OsLog {}

impl OsLog {
    fn create(channel: &Channel) -> Self {
        let names = CString::new(channel.domain())
            .and_then(|d| CString::new(channel.category()).map(|c| (d, c)));

        let raw = match names {
            // SAFETY: both pointers are valid NUL-terminated strings for the call.
            Ok((domain, category)) => unsafe {
                oslog_handler_create(domain.as_ptr(), category.as_ptr())
            },
            Err(e) => {
                log_error("open_oslog_channel", &e);
                // SAFETY: the shim maps NULL names to OS_LOG_DEFAULT.
                unsafe { oslog_handler_create(ptr::null(), ptr::null()) }
            }
        };

        tracing::debug!(channel = %channel, "Opened os_log channel");
        Self { raw }
    }
}

impl NativeLog for OsLog {
    fn emit(&self, directive: FormatDirective, severity: NativeSeverity, message: &str) {
        let message = c_message(message);

        // SAFETY: `raw` came from os_log_create and `message` outlives the call.
        unsafe {
            match directive {
                FormatDirective::Public => {
                    oslog_handler_emit_public(self.raw, severity.os_log_type(), message.as_ptr())
                }
                FormatDirective::Private => {
                    oslog_handler_emit_private(self.raw, severity.os_log_type(), message.as_ptr())
                }
            }
        }
    }
}

/// C copy of `message` with interior NULs stripped
fn c_message(message: &str) -> CString {
    match CString::new(message) {
        Ok(message) => message,
        Err(e) => {
            let mut bytes = e.into_vec();
            bytes.retain(|b| *b != 0);
            CString::new(bytes).unwrap_or_default()
        }
    }
}

impl Drop for OsLog {
    fn drop(&mut self) {
        // SAFETY: `raw` is released exactly once; the shim skips OS_LOG_DEFAULT.
        unsafe { oslog_handler_release(self.raw) }
    }
}
