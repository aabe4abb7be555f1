//! Aging rules and their hierarchical resolution.
//!
//! A folder's configuration inherits from its ancestors the way
//! `.gitignore` files cascade: a value left unset defers to the nearest
//! ancestor that sets it, and ultimately to the global defaults. The
//! parent chain is loaded lazily and memoized per instance; effective
//! values are recomputed on every access so uncommitted in-memory edits
//! are always reflected.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use crate::duration::AgeSpan;
use crate::error::{AgingError, Result};
use crate::pattern::Pattern;

use super::store::{self, ConfigState, RuleState};

/// Files expire two years after their last modification unless a rule or
/// folder says otherwise.
pub const DEFAULT_EXPIRE: AgeSpan = AgeSpan::from_days(730);

/// Expired files are kept for one year before deletion unless overridden.
pub const DEFAULT_KEEP: AgeSpan = AgeSpan::from_days(365);

/// One aging rule: a file name pattern plus optional expire/keep
/// overrides. A rule on its own resolves against the global defaults;
/// rules held by an [`AgingConfig`] resolve through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgingRule {
    pattern: Pattern,
    pub expire: Option<AgeSpan>,
    pub keep: Option<AgeSpan>,
}

impl AgingRule {
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: Pattern::new(pattern),
            expire: None,
            keep: None,
        }
    }

    /// The raw pattern text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Replace the pattern, recompiling the matcher.
    pub fn set_pattern(&mut self, text: &str) {
        self.pattern = Pattern::new(text);
    }

    /// Test a file name against this rule's pattern.
    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.matches(file_name)
    }

    /// Expire duration governing files matched by this rule: the rule's
    /// own override, else the owning config's effective value, else the
    /// global default.
    ///
    /// # Errors
    /// Propagates storage errors from the owner's parent-chain walk.
    pub fn effective_expire(&self, owner: Option<&AgingConfig>) -> Result<AgeSpan> {
        if let Some(expire) = self.expire {
            return Ok(expire);
        }
        owner.map_or(Ok(DEFAULT_EXPIRE), AgingConfig::effective_expire)
    }

    /// Keep duration governing files matched by this rule; resolution
    /// mirrors [`AgingRule::effective_expire`].
    ///
    /// # Errors
    /// Propagates storage errors from the owner's parent-chain walk.
    pub fn effective_keep(&self, owner: Option<&AgingConfig>) -> Result<AgeSpan> {
        if let Some(keep) = self.keep {
            return Ok(keep);
        }
        owner.map_or(Ok(DEFAULT_KEEP), AgingConfig::effective_keep)
    }
}

impl Default for AgingRule {
    /// A rule matching every file, with no overrides.
    fn default() -> Self {
        Self::new("*")
    }
}

/// A rule from an effective listing together with the config that
/// contributed it. `origin` is the config itself for own rules and an
/// ancestor for inherited ones.
#[derive(Debug)]
pub struct EffectiveRule<'a> {
    pub rule: &'a AgingRule,
    pub origin: &'a AgingConfig,
}

/// One folder's aging configuration: its own rule list and overrides plus
/// a lazily resolved view of the ancestor chain.
#[derive(Debug)]
pub struct AgingConfig {
    directory: PathBuf,
    exists: bool,
    pub expire: Option<AgeSpan>,
    pub keep: Option<AgeSpan>,
    rules: Vec<AgingRule>,
    parent: OnceCell<Option<Box<AgingConfig>>>,
}

impl AgingConfig {
    /// Load the configuration governing `directory`.
    ///
    /// A folder that was never configured yields an empty in-memory
    /// default still bound to the folder, with `exists() == false`.
    ///
    /// # Errors
    /// [`AgingError::DirectoryNotFound`] if the directory does not exist;
    /// storage or decode errors if the persisted state cannot be read.
    pub fn load(directory: impl AsRef<Path>) -> Result<Self> {
        let directory = directory.as_ref();
        if !directory.is_dir() {
            return Err(AgingError::DirectoryNotFound(directory.to_path_buf()));
        }
        let directory = dunce::canonicalize(directory).map_err(|source| AgingError::Storage {
            path: directory.to_path_buf(),
            source,
        })?;

        Ok(match store::read(&directory)? {
            Some(state) => Self::from_state(directory, state),
            None => Self::empty(directory),
        })
    }

    fn empty(directory: PathBuf) -> Self {
        Self {
            directory,
            exists: false,
            expire: None,
            keep: None,
            rules: Vec::new(),
            parent: OnceCell::new(),
        }
    }

    fn from_state(directory: PathBuf, state: ConfigState) -> Self {
        let rules = state
            .rules
            .into_iter()
            .map(|rule| {
                let mut aging_rule = AgingRule::new(&rule.pattern);
                aging_rule.expire = rule.expire;
                aging_rule.keep = rule.keep;
                aging_rule
            })
            .collect();

        Self {
            directory,
            exists: true,
            expire: state.expire,
            keep: state.keep,
            rules,
            parent: OnceCell::new(),
        }
    }

    fn to_state(&self) -> ConfigState {
        ConfigState {
            expire: self.expire,
            keep: self.keep,
            rules: self
                .rules
                .iter()
                .map(|rule| RuleState {
                    pattern: rule.pattern().to_string(),
                    expire: rule.expire,
                    keep: rule.keep,
                })
                .collect(),
        }
    }

    /// Persist the current state under the folder's reserved subpath.
    ///
    /// # Errors
    /// Storage or encode errors; not retried.
    pub fn save(&self) -> Result<()> {
        store::write(&self.directory, &self.to_state())
    }

    /// Remove the folder's entire persisted configuration, recursively.
    /// Parent and child configurations are unaffected.
    ///
    /// # Errors
    /// Storage errors; not retried.
    pub fn delete(&self) -> Result<()> {
        store::delete(&self.directory)
    }

    /// Remove the folder's archived files, if any.
    ///
    /// # Errors
    /// Storage errors; not retried.
    pub fn clear_archive(&self) -> Result<()> {
        store::remove_subdir(&self.directory, store::ARCHIVE_DIR_NAME)
    }

    /// Remove the folder's sweep logs, if any.
    ///
    /// # Errors
    /// Storage errors; not retried.
    pub fn clear_log(&self) -> Result<()> {
        store::remove_subdir(&self.directory, store::LOG_DIR_NAME)
    }

    /// The absolute directory this configuration governs.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Whether persisted state was found for this folder itself.
    #[must_use]
    pub const fn exists(&self) -> bool {
        self.exists
    }

    /// The folder's own rules, in list order.
    #[must_use]
    pub fn rules(&self) -> &[AgingRule] {
        &self.rules
    }

    /// The parent folder's configuration, or `None` at the filesystem
    /// root. Loaded on first access and memoized for this instance;
    /// sibling configs loaded separately each resolve their own chain.
    ///
    /// # Errors
    /// Storage or decode errors from loading the parent.
    pub fn parent(&self) -> Result<Option<&Self>> {
        if self.parent.get().is_none() {
            let loaded = match self.directory.parent() {
                Some(parent_dir) => Some(Box::new(Self::load(parent_dir)?)),
                None => None,
            };
            // Single-threaded cell: nothing can have raced the check above.
            let _ = self.parent.set(loaded);
        }
        Ok(self.parent.get().and_then(|slot| slot.as_deref()))
    }

    /// Expire duration in force for this folder: its own override, else
    /// the nearest ancestor's, else [`DEFAULT_EXPIRE`].
    ///
    /// # Errors
    /// Storage or decode errors from the parent-chain walk.
    pub fn effective_expire(&self) -> Result<AgeSpan> {
        if let Some(expire) = self.expire {
            return Ok(expire);
        }
        match self.parent()? {
            Some(parent) => parent.effective_expire(),
            None => Ok(DEFAULT_EXPIRE),
        }
    }

    /// Keep duration in force for this folder; resolution mirrors
    /// [`AgingConfig::effective_expire`].
    ///
    /// # Errors
    /// Storage or decode errors from the parent-chain walk.
    pub fn effective_keep(&self) -> Result<AgeSpan> {
        if let Some(keep) = self.keep {
            return Ok(keep);
        }
        match self.parent()? {
            Some(parent) => parent.effective_keep(),
            None => Ok(DEFAULT_KEEP),
        }
    }

    /// Whether this folder or any ancestor has persisted configuration.
    ///
    /// # Errors
    /// Storage or decode errors from the parent-chain walk.
    pub fn effective_exists(&self) -> Result<bool> {
        if self.exists {
            return Ok(true);
        }
        match self.parent()? {
            Some(parent) => parent.effective_exists(),
            None => Ok(false),
        }
    }

    /// All rules in force for this folder: its own rules first, then each
    /// ancestor's in turn, each annotated with its originating config.
    ///
    /// # Errors
    /// Storage or decode errors from the parent-chain walk.
    pub fn effective_rules(&self) -> Result<Vec<EffectiveRule<'_>>> {
        let mut rules: Vec<EffectiveRule<'_>> = self
            .rules
            .iter()
            .map(|rule| EffectiveRule { rule, origin: self })
            .collect();

        if let Some(parent) = self.parent()? {
            rules.extend(parent.effective_rules()?);
        }
        Ok(rules)
    }

    /// Insert `rule` at `position` in the folder's own rule list.
    ///
    /// # Errors
    /// [`AgingError::RuleNotFound`] if `position` is past the end.
    pub fn insert_rule(&mut self, position: usize, rule: AgingRule) -> Result<()> {
        if position > self.rules.len() {
            return Err(AgingError::RuleNotFound { index: position });
        }
        self.rules.insert(position, rule);
        Ok(())
    }

    /// Remove the rules at `positions` from the folder's own rule list,
    /// returning the removed rules in ascending index order. Every index is
    /// validated before anything is removed, so an out-of-range index
    /// leaves the list unmodified.
    ///
    /// # Errors
    /// [`AgingError::RuleNotFound`] for the first out-of-range index.
    pub fn remove_rules(&mut self, positions: &[usize]) -> Result<Vec<AgingRule>> {
        for &index in positions {
            if index >= self.rules.len() {
                return Err(AgingError::RuleNotFound { index });
            }
        }

        let mut ordered: Vec<usize> = positions.to_vec();
        ordered.sort_unstable();
        ordered.dedup();

        // Highest index first so earlier removals don't shift later ones.
        let mut removed: Vec<AgingRule> = ordered
            .into_iter()
            .rev()
            .map(|index| self.rules.remove(index))
            .collect();
        removed.reverse();
        Ok(removed)
    }

    /// Drop every rule from the folder's own rule list.
    pub fn clear_rules(&mut self) {
        self.rules.clear();
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
