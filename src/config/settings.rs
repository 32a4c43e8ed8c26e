use crate::error::{OsLogError, Result};
use crate::handler::LogHandler;
use crate::level::Level;
use crate::oslog::{ContentMode, OsLogHandler};
use crate::sink::NativeSink;
use crate::system::HandlerFactory;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

pub const ENV_METADATA_CONTENT: &str = "OSLOG_METADATA_CONTENT";
pub const ENV_LOG_LEVEL: &str = "OSLOG_LOG_LEVEL";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub metadata_content: ContentMode,
    pub log_level: Level,
}

impl Settings {
    /// Read settings through `lookup`, falling back to defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let metadata_content = match lookup(ENV_METADATA_CONTENT) {
            Some(value) => value.parse().map_err(|_| {
                OsLogError::Config(format!("Invalid {}: {}", ENV_METADATA_CONTENT, value))
            })?,
            None => ContentMode::default(),
        };

        let log_level = match lookup(ENV_LOG_LEVEL) {
            Some(value) => value
                .parse()
                .map_err(|_| OsLogError::Config(format!("Invalid {}: {}", ENV_LOG_LEVEL, value)))?,
            None => Level::default(),
        };

        Ok(Self {
            metadata_content,
            log_level,
        })
    }

    /// Read settings from a dotenv file only, ignoring the process environment
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let vars = dotenvy::from_path_iter(path.as_ref())?
            .collect::<std::result::Result<HashMap<String, String>, _>>()?;
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Factory for `LoggingSystem` applying these settings to every new handler
    pub fn handler_factory(self, sink: Arc<dyn NativeSink>) -> HandlerFactory {
        Arc::new(move |label: &str| {
            let handler = OsLogHandler::with_sink(label, self.metadata_content, sink.as_ref());
            handler.set_log_level(self.log_level);
            Arc::new(handler) as Arc<dyn LogHandler>
        })
    }
}

pub fn load_settings() -> Result<Settings> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    Settings::from_lookup(|key| std::env::var(key).ok())
}
