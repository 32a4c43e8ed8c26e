mod settings;

pub use settings::{ENV_LOG_LEVEL, ENV_METADATA_CONTENT, Settings, load_settings};
