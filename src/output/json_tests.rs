use crate::duration::AgeSpan;
use crate::output::{ListReport, ReportFormatter, RuleEntry};

use super::*;

#[test]
fn report_serializes_with_duration_strings() {
    let report = ListReport {
        directory: "/proj".to_string(),
        effective: true,
        expire: Some(AgeSpan::from_days(100)),
        keep: Some(AgeSpan::from_days(365)),
        rules: vec![RuleEntry {
            position: 0,
            pattern: "*.tmp".to_string(),
            expire: Some(AgeSpan::from_days(100)),
            keep: Some(AgeSpan::from_days(365)),
            from: Some("/".to_string()),
        }],
    };

    let output = JsonFormatter.format(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["directory"], "/proj");
    assert_eq!(value["effective"], true);
    assert_eq!(value["expire"], "100d");
    assert_eq!(value["rules"][0]["pattern"], "*.tmp");
    assert_eq!(value["rules"][0]["from"], "/");
}

#[test]
fn absent_overrides_are_omitted() {
    let report = ListReport {
        directory: "/proj".to_string(),
        effective: false,
        expire: None,
        keep: None,
        rules: vec![RuleEntry {
            position: 0,
            pattern: "*.tmp".to_string(),
            expire: None,
            keep: None,
            from: None,
        }],
    };

    let output = JsonFormatter.format(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!(value.get("expire").is_none());
    assert!(value["rules"][0].get("keep").is_none());
    assert!(value["rules"][0].get("from").is_none());
}

#[test]
fn output_ends_with_newline() {
    let report = ListReport {
        directory: "/".to_string(),
        effective: false,
        expire: None,
        keep: None,
        rules: Vec::new(),
    };

    let output = JsonFormatter.format(&report).unwrap();
    assert!(output.ends_with('\n'));
}
