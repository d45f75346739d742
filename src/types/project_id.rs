use super::strings::{OwnerUsername, ProjectName};
use crate::errors::InvalidProjectId;
use std::fmt;
use std::str::FromStr;

/// A project identifier of the form `owner/project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectId {
    pub owner: OwnerUsername,
    pub name: ProjectName,
}

impl ProjectId {
    pub fn new(owner: OwnerUsername, name: ProjectName) -> Self {
        Self { owner, name }
    }
}

impl FromStr for ProjectId {
    type Err = InvalidProjectId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, name) = s
            .split_once('/')
            .ok_or_else(|| InvalidProjectId::MissingSlash(s.to_string()))?;
        if name.contains('/') {
            return Err(InvalidProjectId::TooManySlashes(s.to_string()));
        }
        if owner.is_empty() || name.is_empty() {
            return Err(InvalidProjectId::Empty(s.to_string()));
        }
        Ok(Self {
            owner: OwnerUsername::new(owner.to_string()),
            name: ProjectName::new(name.to_string()),
        })
    }
}

impl TryFrom<&str> for ProjectId {
    type Error = InvalidProjectId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
