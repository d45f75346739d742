use super::base::DominoClient;
use crate::errors::DominoError;
use crate::models::{Run, StartRun};
use crate::types::RunId;
use reqwest::Method;

impl DominoClient {
    /// List the runs of this project.
    pub async fn runs_list(&self) -> Result<Run, DominoError> {
        self.get_json(self.routes().runs_list()).await
    }

    /// Start a run.
    pub async fn runs_start(&self, run: &StartRun) -> Result<Run, DominoError> {
        let res = self
            .send_json(Method::POST, self.routes().runs_start(), run)
            .await?;
        Ok(res.json().await?)
    }

    /// Get the status of a run.
    pub async fn runs_status(&self, run_id: &RunId) -> Result<Run, DominoError> {
        self.get_json(self.routes().runs_status(run_id)).await
    }
}
