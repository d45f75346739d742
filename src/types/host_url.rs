//! NewType for the base URL of a Domino deployment.

use crate::errors::InvalidHostUrl;
use aliri_braid::braid;

/// A [HostUrl] is the base URL of a Domino deployment, e.g.
/// `https://try.dominodatalab.com`
///
/// It never ends with `/`, so routes can be appended as `{host}/...`.
#[braid(validator, serde)]
pub struct HostUrl(String);

impl aliri_braid::Validator for HostUrl {
    type Error = InvalidHostUrl;

    fn validate(s: &str) -> Result<(), Self::Error> {
        if !(s.starts_with("http://") || s.starts_with("https://")) {
            Err(InvalidHostUrl::Protocol(s.to_string()))
        } else if s.ends_with('/') {
            Err(InvalidHostUrl::TrailingSlash(s.to_string()))
        } else {
            Ok(())
        }
    }
}

impl HostUrl {
    /// Validate a user-supplied host, dropping any trailing slashes first.
    pub fn normalize(s: impl AsRef<str>) -> Result<Self, InvalidHostUrl> {
        HostUrl::new(s.as_ref().trim_end_matches('/').to_string())
    }
}
