//! Collaborator management, which only the legacy web routes offer.
//! All of it requires Domino 1.53.0.0 or later.

use super::base::DominoClient;
use crate::constants::MIN_COLLABORATION_VERSION;
use crate::disposition::Disposition;
use crate::errors::DominoError;
use crate::models::{AddCollaboratorForm, ChangeRoleForm, Collaborator, RemoveCollaboratorForm};
use crate::types::{CollaboratorName, ProjectRole};

impl DominoClient {
    /// List the collaborators of this project.
    pub async fn collaborators_get(&self) -> Result<Collaborator, DominoError> {
        self.requires_at_least(MIN_COLLABORATION_VERSION)?;
        self.get_json(self.routes().collaborators_get()).await
    }

    /// Invite a user, given by username or email, to collaborate on this project.
    pub async fn collaborators_add(
        &self,
        username_or_email: &CollaboratorName,
        welcome_message: &str,
    ) -> Result<Disposition, DominoError> {
        self.requires_at_least(MIN_COLLABORATION_VERSION)?;
        let form = AddCollaboratorForm {
            collaborator_username_or_email: username_or_email,
            welcome_message,
        };
        self.post_flash_form(self.routes().collaborators_add(), &form).await
    }

    /// Remove a collaborator from this project.
    pub async fn collaborators_remove(
        &self,
        username: &CollaboratorName,
    ) -> Result<Disposition, DominoError> {
        self.requires_at_least(MIN_COLLABORATION_VERSION)?;
        let form = RemoveCollaboratorForm {
            collaborator_username: username,
        };
        self.post_flash_form(self.routes().collaborators_remove(), &form).await
    }

    /// Change a collaborator's role. `role` must be one of
    /// `Contributor`, `ResultsConsumer`, `LauncherUser`, `ProjectImporter`.
    pub async fn collaborators_change_role(
        &self,
        username: &CollaboratorName,
        role: &str,
    ) -> Result<Disposition, DominoError> {
        self.requires_at_least(MIN_COLLABORATION_VERSION)?;
        let project_role: ProjectRole = role.parse()?;
        let form = ChangeRoleForm {
            collaborator_username: username,
            project_role,
        };
        self.post_status_form(self.routes().collaborators_change_role(), &form).await
    }
}
