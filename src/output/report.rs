//! The `list` command's view of a folder's configuration.

use serde::Serialize;

use crate::config::AgingConfig;
use crate::duration::AgeSpan;
use crate::error::Result;

/// What `list` shows for one folder: either the folder's own rules and
/// overrides, or the effective view merged down the ancestor chain.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub directory: String,
    /// True when the report shows effective (inherited) values.
    pub effective: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<AgeSpan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep: Option<AgeSpan>,
    pub rules: Vec<RuleEntry>,
}

#[derive(Debug, Serialize)]
pub struct RuleEntry {
    pub position: usize,
    pub pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<AgeSpan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep: Option<AgeSpan>,
    /// Ancestor directory the rule was inherited from; `None` for the
    /// folder's own rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl ListReport {
    /// Report of the folder's own rules and overrides only. Absent
    /// values stay absent; nothing is resolved.
    #[must_use]
    pub fn own(config: &AgingConfig) -> Self {
        let rules = config
            .rules()
            .iter()
            .enumerate()
            .map(|(position, rule)| RuleEntry {
                position,
                pattern: rule.pattern().to_string(),
                expire: rule.expire,
                keep: rule.keep,
                from: None,
            })
            .collect();

        Self {
            directory: config.directory().display().to_string(),
            effective: false,
            expire: config.expire,
            keep: config.keep,
            rules,
        }
    }

    /// Report of everything in force for the folder: merged rules with
    /// fully resolved durations, inherited entries annotated with the
    /// ancestor that contributed them.
    ///
    /// # Errors
    /// Propagates storage errors from the parent-chain walk.
    pub fn effective(config: &AgingConfig) -> Result<Self> {
        let mut rules = Vec::new();
        for (position, effective) in config.effective_rules()?.iter().enumerate() {
            let inherited = effective.origin.directory() != config.directory();
            rules.push(RuleEntry {
                position,
                pattern: effective.rule.pattern().to_string(),
                expire: Some(effective.rule.effective_expire(Some(effective.origin))?),
                keep: Some(effective.rule.effective_keep(Some(effective.origin))?),
                from: inherited.then(|| effective.origin.directory().display().to_string()),
            });
        }

        Ok(Self {
            directory: config.directory().display().to_string(),
            effective: true,
            expire: Some(config.effective_expire()?),
            keep: Some(config.effective_keep()?),
            rules,
        })
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
