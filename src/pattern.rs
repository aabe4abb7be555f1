//! File name patterns for aging rules.
//!
//! The pattern language is deliberately small: `*` matches any run of
//! characters, everything else is literal. In particular `.`, `<`, `>`,
//! `(`, `)`, `[`, `]` and `?` carry no special meaning, so an unmatched
//! bracket is a valid pattern, never a compile error.

use std::fmt;

use regex::Regex;

/// A compiled file name pattern. Holds the raw text and the compiled
/// matcher together so the two can never drift apart.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    regex: Regex,
}

impl Pattern {
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self {
            raw: pattern.to_string(),
            regex: compile(pattern),
        }
    }

    /// The raw pattern text as the user supplied it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Full-string match against a file name. Case-sensitive, never a
    /// substring search.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

impl Default for Pattern {
    /// The default pattern matches everything.
    fn default() -> Self {
        Self::new("*")
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Pattern {}

fn compile(pattern: &str) -> Regex {
    // Patterns that slip past `translate` with metacharacters the engine
    // rejects (such as a malformed counted repetition) match literally.
    Regex::new(&translate(pattern)).unwrap_or_else(|_| literal(pattern))
}

/// Translate a pattern into an anchored regular expression.
fn translate(pattern: &str) -> String {
    // '.' must be escaped before '*' expands to ".*".
    let mut translated = pattern.replace('.', r"\.").replace('*', ".*");
    for meta in ['<', '>', '(', ')', '[', ']', '?'] {
        translated = translated.replace(meta, &format!("\\{meta}"));
    }
    format!("^{translated}$")
}

fn literal(pattern: &str) -> Regex {
    Regex::new(&format!("^{}$", regex::escape(pattern))).expect("escaped pattern is a valid regex")
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
