use tempfile::TempDir;

use crate::config::{AgingConfig, AgingRule, DEFAULT_EXPIRE};
use crate::duration::AgeSpan;
use crate::error::AgingError;

use super::*;

#[test]
fn load_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope");

    let err = AgingConfig::load(&missing).unwrap_err();
    assert!(matches!(err, AgingError::DirectoryNotFound(_)));
}

#[test]
fn load_unconfigured_directory_yields_empty_default() {
    let temp = TempDir::new().unwrap();

    let config = AgingConfig::load(temp.path()).unwrap();
    assert!(!config.exists());
    assert!(config.expire.is_none());
    assert!(config.keep.is_none());
    assert!(config.rules().is_empty());
}

#[test]
fn save_then_load_round_trips_rules_and_overrides() {
    let temp = TempDir::new().unwrap();

    let mut config = AgingConfig::load(temp.path()).unwrap();
    config.expire = Some(AgeSpan::from_days(100));
    config.keep = Some(AgeSpan::from_days(10));

    let mut first = AgingRule::new("*.log");
    first.expire = Some(AgeSpan::from_days(7));
    let second = AgingRule::new("backup-[old]?");
    config.insert_rule(0, second).unwrap();
    config.insert_rule(0, first).unwrap();
    config.save().unwrap();

    let loaded = AgingConfig::load(temp.path()).unwrap();
    assert!(loaded.exists());
    assert_eq!(loaded.expire, Some(AgeSpan::from_days(100)));
    assert_eq!(loaded.keep, Some(AgeSpan::from_days(10)));

    let patterns: Vec<&str> = loaded.rules().iter().map(AgingRule::pattern).collect();
    assert_eq!(patterns, ["*.log", "backup-[old]?"]);
    assert_eq!(loaded.rules()[0].expire, Some(AgeSpan::from_days(7)));
    assert!(loaded.rules()[0].keep.is_none());
    assert!(loaded.rules()[1].expire.is_none());
}

#[test]
fn save_creates_reserved_subpath() {
    let temp = TempDir::new().unwrap();

    let config = AgingConfig::load(temp.path()).unwrap();
    config.save().unwrap();

    assert!(temp.path().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME).is_file());
    assert!(AgingConfig::load(temp.path()).unwrap().exists());
}

#[test]
fn delete_removes_entire_subpath() {
    let temp = TempDir::new().unwrap();

    let config = AgingConfig::load(temp.path()).unwrap();
    config.save().unwrap();
    config.delete().unwrap();

    assert!(!temp.path().join(CONFIG_DIR_NAME).exists());
    assert!(!AgingConfig::load(temp.path()).unwrap().exists());
}

#[test]
fn clear_archive_and_log_remove_only_their_subdirs() {
    let temp = TempDir::new().unwrap();

    let config = AgingConfig::load(temp.path()).unwrap();
    config.save().unwrap();

    let archive = config_dir(temp.path()).join(ARCHIVE_DIR_NAME);
    let log = config_dir(temp.path()).join(LOG_DIR_NAME);
    std::fs::create_dir_all(&archive).unwrap();
    std::fs::create_dir_all(&log).unwrap();

    config.clear_archive().unwrap();
    assert!(!archive.exists());
    assert!(log.exists());

    config.clear_log().unwrap();
    assert!(!log.exists());
    assert!(config_file(temp.path()).is_file());
}

#[test]
fn clear_archive_is_a_noop_when_absent() {
    let temp = TempDir::new().unwrap();

    let config = AgingConfig::load(temp.path()).unwrap();
    config.clear_archive().unwrap();
    config.clear_log().unwrap();
}

#[test]
fn corrupt_state_file_is_a_decode_error() {
    let temp = TempDir::new().unwrap();

    std::fs::create_dir_all(config_dir(temp.path())).unwrap();
    std::fs::write(config_file(temp.path()), "not = [valid").unwrap();

    let err = AgingConfig::load(temp.path()).unwrap_err();
    assert!(matches!(err, AgingError::TomlParse(_)));
    assert_eq!(err.exit_code(), crate::EXIT_ERROR);
}

#[test]
fn child_inherits_parent_expire_through_load() {
    let temp = TempDir::new().unwrap();
    let child_dir = temp.path().join("proj");
    std::fs::create_dir(&child_dir).unwrap();

    let mut parent = AgingConfig::load(temp.path()).unwrap();
    parent.expire = Some(AgeSpan::from_days(100));
    parent.save().unwrap();

    let child = AgingConfig::load(&child_dir).unwrap();
    assert!(!child.exists());
    assert!(child.effective_exists().unwrap());
    assert_eq!(child.effective_expire().unwrap(), AgeSpan::from_days(100));
}

#[test]
fn child_rule_added_and_saved_survives_reload() {
    let temp = TempDir::new().unwrap();
    let child_dir = temp.path().join("proj");
    std::fs::create_dir(&child_dir).unwrap();

    let mut child = AgingConfig::load(&child_dir).unwrap();
    child.insert_rule(0, AgingRule::new("*.tmp")).unwrap();
    child.save().unwrap();

    let reloaded = AgingConfig::load(&child_dir).unwrap();
    assert_eq!(reloaded.rules().len(), 1);
    assert_eq!(reloaded.rules()[0].pattern(), "*.tmp");
}

#[test]
fn sibling_configs_resolve_their_own_parent_chains() {
    let temp = TempDir::new().unwrap();
    let left_dir = temp.path().join("left");
    let right_dir = temp.path().join("right");
    std::fs::create_dir(&left_dir).unwrap();
    std::fs::create_dir(&right_dir).unwrap();

    let left = AgingConfig::load(&left_dir).unwrap();
    // Resolve left's chain first, then change the parent on disk.
    assert_eq!(left.effective_expire().unwrap(), DEFAULT_EXPIRE);

    let mut parent = AgingConfig::load(temp.path()).unwrap();
    parent.expire = Some(AgeSpan::from_days(9));
    parent.save().unwrap();

    // left memoized its parent before the save; right loads fresh.
    assert_eq!(left.effective_expire().unwrap(), DEFAULT_EXPIRE);
    let right = AgingConfig::load(&right_dir).unwrap();
    assert_eq!(right.effective_expire().unwrap(), AgeSpan::from_days(9));
}

#[test]
fn state_round_trips_through_toml() {
    let state = ConfigState {
        expire: Some(AgeSpan::from_days(30)),
        keep: None,
        rules: vec![RuleState {
            pattern: "*.bak".to_string(),
            expire: None,
            keep: Some(AgeSpan::from_days(3)),
        }],
    };

    let encoded = toml::to_string_pretty(&state).unwrap();
    let decoded: ConfigState = toml::from_str(&encoded).unwrap();
    assert_eq!(decoded, state);
}
