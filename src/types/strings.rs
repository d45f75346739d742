use aliri_braid::braid;
use std::fmt;

/// *Domino* username of a project owner.
#[braid(serde)]
pub struct OwnerUsername;

/// Name of a project, unique per owner.
#[braid(serde)]
pub struct ProjectName;

/// Path of a file inside a project, e.g. `/results/out.csv`
#[braid(serde)]
pub struct ProjectPath;

/// Username or email address of a (prospective) collaborator.
#[braid(serde)]
pub struct CollaboratorName;

/// A user's API key. Sent as the password of HTTP Basic authorization.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}
