use crate::errors::InvalidProjectRole;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a collaborator on a project.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
pub enum ProjectRole {
    Contributor,
    ResultsConsumer,
    LauncherUser,
    ProjectImporter,
}

impl ProjectRole {
    pub const ALL: [ProjectRole; 4] = [
        ProjectRole::Contributor,
        ProjectRole::ResultsConsumer,
        ProjectRole::LauncherUser,
        ProjectRole::ProjectImporter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectRole::Contributor => "Contributor",
            ProjectRole::ResultsConsumer => "ResultsConsumer",
            ProjectRole::LauncherUser => "LauncherUser",
            ProjectRole::ProjectImporter => "ProjectImporter",
        }
    }
}

impl FromStr for ProjectRole {
    type Err = InvalidProjectRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| InvalidProjectRole(s.to_string()))
    }
}

impl fmt::Display for ProjectRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
