mod manager;

pub use manager::{
    Config, ConfigManager, DEFAULT_CACHE_TTL, DEFAULT_CMD_HISTORY_LIMIT, SETTING_NAMES,
};
