//! Request payloads and response data of the Domino API.
//!
//! Domino's responses are passed through as decoded JSON without
//! interpretation. The aliases below only document what each one holds.

use crate::types::*;
use serde::{Deserialize, Serialize};

/// A run, or list of runs.
pub type Run = serde_json::Value;
/// A listing of files at a commit.
pub type FileEntry = serde_json::Value;
/// State of a project's model endpoint.
pub type EndpointState = serde_json::Value;
/// One or more project collaborators.
pub type Collaborator = serde_json::Value;
/// Metadata of a project, or a list of projects.
pub type ProjectMetadata = serde_json::Value;
/// A tag, or list of tags.
pub type Tag = serde_json::Value;

/// Response of `GET /version`.
#[derive(Debug, Deserialize)]
pub(crate) struct VersionResponse {
    pub version: DeploymentVersion,
}

/// Request body to start a run.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StartRun {
    pub command: Vec<String>,
    pub is_direct: bool,
    pub commit_id: Option<CommitId>,
    pub title: Option<String>,
    pub tier: Option<String>,
    pub publish_api_endpoint: Option<bool>,
}

impl StartRun {
    pub fn new<S: Into<String>>(command: impl IntoIterator<Item = S>) -> Self {
        Self {
            command: command.into_iter().map(|s| s.into()).collect(),
            ..Default::default()
        }
    }
}

/// The file and function which a model endpoint calls.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BindingDefinition {
    pub file: String,
    pub function: String,
}

/// Request body to publish a model endpoint.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublishRelease {
    pub commit_id: CommitId,
    pub binding_definition: BindingDefinition,
}

#[derive(Serialize)]
pub(crate) struct NewProjectForm<'a> {
    pub owner: &'a OwnerUsername,
    pub name: &'a ProjectName,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCollaboratorForm<'a> {
    pub collaborator_username_or_email: &'a CollaboratorName,
    pub welcome_message: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RemoveCollaboratorForm<'a> {
    pub collaborator_username: &'a CollaboratorName,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChangeRoleForm<'a> {
    pub collaborator_username: &'a CollaboratorName,
    pub project_role: ProjectRole,
}
