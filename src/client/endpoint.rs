use super::base::DominoClient;
use crate::errors::{check, DominoError};
use crate::models::{BindingDefinition, EndpointState, PublishRelease};
use crate::types::CommitId;
use reqwest::Method;

impl DominoClient {
    /// Get the state of this project's model endpoint.
    pub async fn endpoint_state(&self) -> Result<EndpointState, DominoError> {
        self.get_json(self.routes().endpoint_state()).await
    }

    /// Take down this project's model endpoint.
    pub async fn endpoint_unpublish(&self) -> Result<reqwest::Response, DominoError> {
        let res = self
            .request(Method::DELETE, self.routes().endpoint())
            .send()
            .await?;
        check(res).await
    }

    /// Publish `function` from `file` at the given commit as this project's model endpoint.
    pub async fn endpoint_publish(
        &self,
        file: &str,
        function: &str,
        commit_id: &CommitId,
    ) -> Result<reqwest::Response, DominoError> {
        let release = PublishRelease {
            commit_id: commit_id.clone(),
            binding_definition: BindingDefinition {
                file: file.to_string(),
                function: function.to_string(),
            },
        };
        self.send_json(Method::POST, self.routes().endpoint_publish(), &release).await
    }
}
