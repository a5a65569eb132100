//! Property-based tests using proptest

use issuelink_core::{
    environment_id, environment_type, extract_instance_name, IssueMatcher, Args,
    DEFAULT_ENVIRONMENT,
};
use proptest::prelude::*;
use std::borrow::Cow;

// Generate hostnames of 1-4 dot-delimited labels
fn arb_host() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,9}(\\.[a-z][a-z0-9]{0,9}){0,3}")
        .expect("valid regex")
}

proptest! {
    #[test]
    fn test_lowercase_text_never_matches_uppercase_prefix(msg in "[a-z0-9 .,!?-]{0,120}") {
        let matcher = IssueMatcher::new("TEST").unwrap();
        prop_assert!(matcher.extract(&msg).is_empty());
    }

    #[test]
    fn test_extracted_keys_are_wellformed_substrings(msg in ".{0,200}") {
        let matcher = IssueMatcher::new("TEST").unwrap();
        for key in matcher.extract(&msg) {
            prop_assert!(key.starts_with("TEST-"));
            prop_assert!(key["TEST-".len()..].bytes().all(|b| b.is_ascii_digit()));
            prop_assert!(msg.contains(key));
        }
    }

    #[test]
    fn test_extracted_keys_are_distinct(msg in "(TEST-[0-9]{1,3} ){0,10}") {
        let matcher = IssueMatcher::new("TEST").unwrap();
        let keys = matcher.extract(&msg);
        let mut deduped = keys.clone();
        deduped.sort_unstable();
        deduped.dedup();
        prop_assert_eq!(keys.len(), deduped.len());
    }

    #[test]
    fn test_extraction_never_panics(msg in ".{0,200}", project in "[A-Za-z0-9.*+\\[\\]]{0,12}") {
        // Arbitrary project prefixes must compile (escaped) and scan safely
        let matcher = IssueMatcher::new(&project).unwrap();
        let _ = matcher.extract(&msg);
    }

    #[test]
    fn test_url_instance_name_is_first_host_label(host in arb_host()) {
        let url = format!("https://{}", host);
        let want = host.split('.').next().unwrap_or("");
        prop_assert_eq!(extract_instance_name(&url), want);
    }

    #[test]
    fn test_bare_host_instance_name_is_first_label(host in arb_host()) {
        let want = host.split('.').next().unwrap_or("");
        prop_assert_eq!(extract_instance_name(&host), want);
    }

    #[test]
    fn test_instance_name_never_panics(input in ".{0,200}") {
        let _ = extract_instance_name(&input);
    }

    #[test]
    fn test_environment_is_value_or_default(value in ".{0,40}") {
        let argv = Args {
            environment_id: Cow::Borrowed(value.as_str()),
            environment_type: Cow::Borrowed(value.as_str()),
            ..Default::default()
        };

        let id = environment_id(&argv);
        let ty = environment_type(&argv);

        if value.is_empty() {
            prop_assert_eq!(id, DEFAULT_ENVIRONMENT);
            prop_assert_eq!(ty, DEFAULT_ENVIRONMENT);
        } else {
            prop_assert_eq!(id, value.as_str());
            prop_assert_eq!(ty, value.as_str());
        }

        // Whatever the input, resolution never yields an empty string
        prop_assert!(!environment_id(&argv).is_empty());
    }
}
