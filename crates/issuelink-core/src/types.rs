//! Core type definitions with zero-copy input handling

use serde::Serialize;
use std::borrow::Cow;

/// Commit details handed to the plugin by the CI runner
#[derive(Debug, Clone, Default)]
pub struct Commit<'a> {
    /// Full commit message, free text
    pub message: Cow<'a, str>,
}

/// Per-invocation configuration record
///
/// Owned by the caller and read-only to the extractors. Empty string
/// fields mean "unset" — CI runners hand settings through environment
/// variables and an absent setting arrives as an empty string.
#[derive(Debug, Clone, Default)]
pub struct Args<'a> {
    /// Commit the build runs against
    pub commit: Commit<'a>,

    /// Issue key prefix, e.g. `TEST` matches `TEST-123`
    pub project: Cow<'a, str>,

    /// Tracker URL or bare hostname the instance name is derived from
    pub instance: Cow<'a, str>,

    /// Deployment environment id, empty = unset
    pub environment_id: Cow<'a, str>,

    /// Deployment environment type, empty = unset
    pub environment_type: Cow<'a, str>,
}

/// Derived metadata record, ready for CI output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    /// Distinct issue keys, first-occurrence order
    pub issues: Vec<String>,

    /// Instance name derived from the tracker URL/hostname
    pub instance: String,

    /// Resolved environment id (configured value or `production`)
    pub environment_id: String,

    /// Resolved environment type (configured value or `production`)
    pub environment_type: String,
}
