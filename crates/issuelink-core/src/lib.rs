//! # Issuelink Core
//!
//! Issue tracker metadata extraction for CI deployment pipelines.
//!
//! Given the build context a CI runner hands a plugin step, this library
//! derives:
//! - **Issue keys** (`TEST-123`) referenced by the commit message
//! - The **instance name** of the tracker (first host label of its URL)
//! - The **deployment environment** id and type, with a `production`
//!   fallback when unset
//!
//! All derivation is pure and synchronous. Malformed input degrades to an
//! empty or unchanged result, never an error.
//!
//! ## Example
//!
//! ```
//! use issuelink_core::{Args, Commit, resolve_metadata};
//! use std::borrow::Cow;
//!
//! # fn example() -> issuelink_core::Result<()> {
//! let args = Args {
//!     commit: Commit {
//!         message: Cow::Borrowed("TEST-42 fix login redirect"),
//!     },
//!     project: Cow::Borrowed("TEST"),
//!     instance: Cow::Borrowed("https://myteam.example.com"),
//!     ..Default::default()
//! };
//!
//! let metadata = resolve_metadata(&args)?;
//! assert_eq!(metadata.issues, vec!["TEST-42"]);
//! assert_eq!(metadata.instance, "myteam");
//! assert_eq!(metadata.environment_id, "production");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod environment;
pub mod error;
pub mod instance;
pub mod issues;
pub mod output;
pub mod types;

pub use environment::{environment_id, environment_type, DEFAULT_ENVIRONMENT};
pub use error::{Error, ErrorKind, Result};
pub use instance::extract_instance_name;
pub use issues::{extract_issues, IssueMatcher};
pub use types::{Args, Commit, Metadata};

/// Derive the full metadata record from a build context
///
/// This is the main entry point for the library. It compiles the issue
/// matcher for the configured project prefix, then runs all three
/// extractors over the input record.
///
/// The only failure path is matcher compilation; the extractors
/// themselves never fail.
///
/// # Example
///
/// ```
/// use issuelink_core::{Args, Commit, resolve_metadata};
/// use std::borrow::Cow;
///
/// # fn example() -> issuelink_core::Result<()> {
/// let args = Args {
///     commit: Commit {
///         message: Cow::Borrowed("rollout for TEST-7 and TEST-9"),
///     },
///     project: Cow::Borrowed("TEST"),
///     ..Default::default()
/// };
///
/// let metadata = resolve_metadata(&args)?;
/// assert_eq!(metadata.issues.len(), 2);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub fn resolve_metadata(args: &Args<'_>) -> Result<Metadata> {
    let matcher = IssueMatcher::new(&args.project)?;

    let issues = matcher
        .extract(&args.commit.message)
        .into_iter()
        .map(str::to_owned)
        .collect();

    Ok(Metadata {
        issues,
        instance: extract_instance_name(&args.instance).into_owned(),
        environment_id: environment_id(args).to_owned(),
        environment_type: environment_type(args).to_owned(),
    })
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_library_version() {
        // Smoke test to ensure library compiles
        let _ = env!("CARGO_PKG_VERSION");
    }
}
