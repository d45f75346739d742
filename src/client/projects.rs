use super::base::DominoClient;
use crate::constants::MIN_COLLABORATION_VERSION;
use crate::disposition::Disposition;
use crate::errors::DominoError;
use crate::models::{NewProjectForm, ProjectMetadata, Tag};
use crate::types::{OwnerUsername, ProjectName, TagId};

impl DominoClient {
    /// Create a new project.
    ///
    /// Requires Domino 1.53.0.0 or later.
    pub async fn project_create(
        &self,
        owner: &OwnerUsername,
        name: &ProjectName,
    ) -> Result<Disposition, DominoError> {
        self.requires_at_least(MIN_COLLABORATION_VERSION)?;
        let form = NewProjectForm { owner, name };
        self.post_flash_form(self.routes().project_create(), &form).await
    }

    /// List projects visible to the user.
    pub async fn projects_list(&self) -> Result<ProjectMetadata, DominoError> {
        self.get_json(self.routes().projects_list()).await
    }

    /// Get a project's metadata. Unspecified owner or name default to this client's project.
    pub async fn project_metadata(
        &self,
        owner: Option<&OwnerUsername>,
        name: Option<&ProjectName>,
    ) -> Result<ProjectMetadata, DominoError> {
        self.get_json(self.routes().project_metadata(owner, name)).await
    }

    /// List tags.
    pub async fn tags_list(&self) -> Result<Tag, DominoError> {
        self.get_json(self.routes().tags_list()).await
    }

    /// Get a tag's metadata.
    pub async fn tag_metadata(&self, tag_id: &TagId) -> Result<Tag, DominoError> {
        self.get_json(self.routes().tag_metadata(tag_id)).await
    }
}
