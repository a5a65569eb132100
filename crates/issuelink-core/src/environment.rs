//! Deployment environment resolution with default fallback

use crate::types::Args;

/// Environment id/type used when the configuration leaves them unset
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Resolve the deployment environment id
///
/// Returns the configured value verbatim when non-empty, otherwise
/// [`DEFAULT_ENVIRONMENT`]. No trimming or case normalization.
#[inline]
pub fn environment_id<'a>(args: &'a Args<'_>) -> &'a str {
    non_empty_or_default(&args.environment_id)
}

/// Resolve the deployment environment type
///
/// Same contract as [`environment_id`], reading `environment_type`.
#[inline]
pub fn environment_type<'a>(args: &'a Args<'_>) -> &'a str {
    non_empty_or_default(&args.environment_type)
}

#[inline]
fn non_empty_or_default(value: &str) -> &str {
    if value.is_empty() {
        DEFAULT_ENVIRONMENT
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn test_environment_id_set() {
        let args = Args {
            environment_id: Cow::Borrowed("env-123"),
            ..Default::default()
        };
        assert_eq!(environment_id(&args), "env-123");
    }

    #[test]
    fn test_environment_id_unset() {
        let args = Args::default();
        assert_eq!(environment_id(&args), "production");
    }

    #[test]
    fn test_environment_type_set() {
        let args = Args {
            environment_type: Cow::Borrowed("prod"),
            ..Default::default()
        };
        assert_eq!(environment_type(&args), "prod");
    }

    #[test]
    fn test_environment_type_unset() {
        let args = Args::default();
        assert_eq!(environment_type(&args), "production");
    }

    #[test]
    fn test_value_not_trimmed() {
        // Whitespace counts as a value — the check is emptiness only
        let args = Args {
            environment_id: Cow::Borrowed("  staging  "),
            ..Default::default()
        };
        assert_eq!(environment_id(&args), "  staging  ");
    }
}
