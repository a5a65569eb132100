//! Instance name derivation from tracker URLs and hostnames

use std::borrow::Cow;
use url::Url;

/// Derive a short instance name from a URL or bare hostname
///
/// The instance name is the first dot-delimited label of the host:
/// `https://myteam.example.com` and `myteam.example.com` both yield
/// `myteam`. Input that carries no host structure comes back unchanged,
/// and a URL whose host is empty (`http://`) yields the empty string.
/// Never errors.
///
/// # Example
///
/// ```
/// use issuelink_core::extract_instance_name;
///
/// assert_eq!(extract_instance_name("https://myteam.example.com"), "myteam");
/// assert_eq!(extract_instance_name("localhost"), "localhost");
/// assert_eq!(extract_instance_name("http://"), "");
/// ```
pub fn extract_instance_name(input: &str) -> Cow<'_, str> {
    match Url::parse(input) {
        // Full URL: take the host's first label. The host borrows from
        // the parsed Url, so this arm owns its result.
        Ok(parsed) => match parsed.host_str() {
            Some(host) => Cow::Owned(first_label(host).to_owned()),
            // Scheme without host, e.g. `mailto:ops@example.com`
            None => Cow::Borrowed(""),
        },

        // No scheme: treat the whole input as a hostname
        Err(url::ParseError::RelativeUrlWithoutBase) => Cow::Borrowed(first_label(input)),

        // URL-shaped but unusable host, e.g. `http://`
        Err(_) => Cow::Borrowed(""),
    }
}

/// First dot-delimited label of a hostname; the whole string when there
/// is no dot.
#[inline]
fn first_label(host: &str) -> &str {
    host.split('.').next().unwrap_or(host)
}
