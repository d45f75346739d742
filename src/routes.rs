//! URLs of the Domino API.
//!
//! There are three families of routes:
//!
//! - the versioned REST API, `{host}/v1/projects/{owner}/{project}/...`
//! - legacy web routes, `{host}/{owner}/{project}/...`, for collaborator
//!   management which has no REST counterpart yet
//! - host-level routes, e.g. `{host}/version`
//!
//! Identifiers are concatenated as given, without escaping.

use crate::types::*;

/// URL builder for a single project on a Domino deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    host: HostUrl,
    owner: OwnerUsername,
    project: ProjectName,
}

impl Routes {
    pub fn new(host: HostUrl, project: ProjectId) -> Self {
        Self {
            host,
            owner: project.owner,
            project: project.name,
        }
    }

    pub fn host(&self) -> &HostUrl {
        &self.host
    }

    pub fn owner(&self) -> &OwnerUsername {
        &self.owner
    }

    pub fn project(&self) -> &ProjectName {
        &self.project
    }

    fn project_url(&self) -> String {
        format!("{}/v1/projects/{}/{}", self.host, self.owner, self.project)
    }

    pub fn runs_list(&self) -> String {
        format!("{}/runs", self.project_url())
    }

    pub fn runs_start(&self) -> String {
        format!("{}/runs", self.project_url())
    }

    pub fn runs_status(&self, run_id: &RunId) -> String {
        format!("{}/runs/{}", self.project_url(), run_id)
    }

    pub fn files_list(&self, commit_id: &CommitId, path: &ProjectPath) -> String {
        format!("{}/files/{}/{}", self.project_url(), commit_id, path)
    }

    /// `path` is expected to start with `/`.
    pub fn files_upload(&self, path: &ProjectPath) -> String {
        format!("{}{}", self.project_url(), path)
    }

    pub fn blobs_get(&self, key: &BlobKey) -> String {
        format!("{}/blobs/{}", self.project_url(), key)
    }

    // Legacy routes

    fn legacy_project_url(&self) -> String {
        format!("{}/{}/{}", self.host, self.owner, self.project)
    }

    pub fn collaborators_get(&self) -> String {
        format!("{}/collaborators", self.legacy_project_url())
    }

    pub fn collaborators_add(&self) -> String {
        format!("{}/addCollaborator", self.legacy_project_url())
    }

    pub fn collaborators_remove(&self) -> String {
        format!("{}/removeCollaborator", self.legacy_project_url())
    }

    pub fn collaborators_change_role(&self) -> String {
        format!("{}/changeCollaboratorProjectRole", self.legacy_project_url())
    }

    // Endpoint routes

    /// The model endpoint lives under `/v1/{owner}/{project}`, without `projects/`.
    pub fn endpoint(&self) -> String {
        format!("{}/v1/{}/{}/endpoint", self.host, self.owner, self.project)
    }

    pub fn endpoint_state(&self) -> String {
        format!("{}/state", self.endpoint())
    }

    pub fn endpoint_publish(&self) -> String {
        format!("{}/publishRelease", self.endpoint())
    }

    // Host-level routes

    pub fn deployment_version(&self) -> String {
        format!("{}/version", self.host)
    }

    pub fn project_create(&self) -> String {
        format!("{}/new", self.host)
    }

    pub fn projects_list(&self) -> String {
        format!("{}/project", self.host)
    }

    /// Metadata of any project, defaulting to this one.
    pub fn project_metadata(
        &self,
        owner: Option<&OwnerUsername>,
        project: Option<&ProjectName>,
    ) -> String {
        let owner = owner.unwrap_or(&self.owner);
        let project = project.unwrap_or(&self.project);
        format!("{}/project/{}/{}", self.host, owner, project)
    }

    pub fn tags_list(&self) -> String {
        format!("{}/tags", self.host)
    }

    pub fn tag_metadata(&self, tag_id: &TagId) -> String {
        format!("{}/tags/{}", self.host, tag_id)
    }
}
