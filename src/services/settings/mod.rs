mod service;

pub use service::{
    load_config, load_config_or_default, resolve_config_path, ConfigError, CONFIG_FILE_NAME,
    CONFIG_PATH_ENV,
};
