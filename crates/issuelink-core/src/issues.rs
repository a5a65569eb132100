//! Issue key extraction from commit messages

use crate::error::Result;
use crate::types::Args;
use memchr::memmem;
use regex::Regex;

/// Issue key matcher with a precompiled per-project pattern
///
/// Compile once, match many: a matcher built for project `TEST`
/// recognizes `TEST-<digits>` tokens, case-sensitive, anywhere in the
/// text. An empty project prefix matches nothing.
pub struct IssueMatcher {
    /// `None` when the project prefix is empty
    pattern: Option<Regex>,
    prefix: memmem::Finder<'static>,
}

impl IssueMatcher {
    /// Create a matcher for the given project prefix
    ///
    /// The prefix is taken literally; regex metacharacters in it are
    /// escaped before compilation.
    pub fn new(project: &str) -> Result<Self> {
        let pattern = if project.is_empty() {
            // An empty prefix would turn every "-<digits>" into a key
            None
        } else {
            Some(Regex::new(&format!("{}-[0-9]+", regex::escape(project)))?)
        };

        Ok(Self {
            pattern,
            prefix: memmem::Finder::new(project.as_bytes()).into_owned(),
        })
    }

    /// Extract all distinct issue keys from `text`
    ///
    /// Keys are returned in first-occurrence order; a key mentioned more
    /// than once is reported once. Returns an empty vec, never an error,
    /// when nothing matches.
    pub fn extract<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };

        // Cheap prescan: most commit messages carry no issue key at all
        if self.prefix.find(text.as_bytes()).is_none() {
            return Vec::new();
        }

        let mut keys: Vec<&'t str> = Vec::new();
        for found in pattern.find_iter(text) {
            let key = found.as_str();
            // Linear dedup — key counts per message are tiny
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    /// Whether `text` references at least one issue key
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        match &self.pattern {
            Some(pattern) => {
                self.prefix.find(text.as_bytes()).is_some() && pattern.is_match(text)
            }
            None => false,
        }
    }
}

/// Extract issue keys from a build context record
///
/// Record-level convenience over [`IssueMatcher`]: builds the matcher
/// from `args.project` and scans `args.commit.message`. Never fails;
/// degenerate input produces an empty vec.
pub fn extract_issues(args: &Args<'_>) -> Vec<String> {
    IssueMatcher::new(&args.project)
        .map(|matcher| {
            matcher
                .extract(&args.commit.message)
                .into_iter()
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default()
}
