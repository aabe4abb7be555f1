mod model;
mod store;

pub use model::{AgingConfig, AgingRule, EffectiveRule, DEFAULT_EXPIRE, DEFAULT_KEEP};
pub use store::{
    config_dir, config_file, ConfigState, RuleState, ARCHIVE_DIR_NAME, CONFIG_DIR_NAME,
    CONFIG_FILE_NAME, LOG_DIR_NAME,
};
