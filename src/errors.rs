//! Errors for this crate.
//! About anyhow: see https://github.com/TrueLayer/reqwest-middleware/issues/119

use crate::disposition::Disposition;
use crate::types::DeploymentVersion;
use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum InvalidHostUrl {
    #[error("Given URL does not start with \"http://\" or \"https://\": {0}")]
    Protocol(String),

    #[error("Given URL must not end with \"/\": {0}")]
    TrailingSlash(String),
}

aliri_braid::from_infallible!(InvalidHostUrl);

#[derive(thiserror::Error, Debug)]
pub enum InvalidProjectId {
    #[error("Project must be given as \"owner/project\", got \"{0}\"")]
    MissingSlash(String),

    #[error("Project \"{0}\" contains more than one \"/\"")]
    TooManySlashes(String),

    #[error("Project \"{0}\" has an empty owner or project name")]
    Empty(String),
}

#[derive(thiserror::Error, Debug)]
#[error(
    "Invalid role \"{0}\". Choices are: Contributor, ResultsConsumer, LauncherUser, ProjectImporter"
)]
pub struct InvalidProjectRole(pub String);

/// Errors resolving a [crate::DominoConfig].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Host must be given as an argument or through the {0} environment variable.")]
    MissingHost(&'static str),

    #[error("API key must be given as an argument or through the {0} environment variable.")]
    MissingApiKey(&'static str),

    #[error(transparent)]
    Host(#[from] InvalidHostUrl),

    #[error(transparent)]
    Project(#[from] InvalidProjectId),
}

/// Errors representing failed interactions with Domino.
#[derive(thiserror::Error, Debug)]
pub enum DominoError {
    /// Error response with an explanation from Domino.
    #[error("({status:?} {reason:?}): {text}")]
    Http {
        status: StatusCode,
        reason: &'static str,
        text: String,
        source: reqwest::Error,
    },

    /// Error response without explanation from Domino.
    #[error(transparent)]
    Raw(#[from] reqwest::Error),

    /// Error from reqwest middleware function.
    #[error(transparent)]
    Middleware(anyhow::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Form(#[from] serde_urlencoded::ser::Error),

    /// The deployment is too old for the requested operation.
    #[error(
        "You need at least version {required} but your deployment seems to be running {actual}"
    )]
    VersionGate {
        required: &'static str,
        actual: DeploymentVersion,
    },

    #[error(transparent)]
    InvalidRole(#[from] InvalidProjectRole),

    /// A legacy endpoint reported failure.
    #[error("{}", .0.message)]
    Disposition(Disposition),

    #[error("Response did not set the PLAY_FLASH cookie")]
    MissingFlashCookie,

    #[error("Malformed PLAY_FLASH cookie: \"{0}\"")]
    MalformedFlashCookie(String),
}

pub(crate) async fn check(res: reqwest::Response) -> Result<reqwest::Response, DominoError> {
    match res.error_for_status_ref() {
        Ok(_) => Ok(res),
        Err(source) => {
            let status = res.status();
            let reason = status.canonical_reason().unwrap_or("unknown reason");
            let text = res.text().await.map_err(DominoError::Raw)?;
            Err(DominoError::Http {
                status,
                reason,
                text,
                source,
            })
        }
    }
}

/// An error which might occur while uploading or downloading files.
#[derive(thiserror::Error, Debug)]
pub enum FileIOError {
    #[error("\"{0}\" is an invalid file path")]
    PathError(String),
    #[error(transparent)]
    Domino(DominoError),
    #[error(transparent)]
    IO(std::io::Error),
}

impl From<reqwest::Error> for FileIOError {
    fn from(e: reqwest::Error) -> Self {
        FileIOError::Domino(DominoError::Raw(e))
    }
}

impl From<reqwest_middleware::Error> for FileIOError {
    fn from(e: reqwest_middleware::Error) -> Self {
        FileIOError::Domino(e.into())
    }
}

impl From<DominoError> for FileIOError {
    fn from(e: DominoError) -> Self {
        FileIOError::Domino(e)
    }
}

impl From<std::io::Error> for FileIOError {
    fn from(e: std::io::Error) -> Self {
        FileIOError::IO(e)
    }
}

impl From<reqwest_middleware::Error> for DominoError {
    fn from(error: reqwest_middleware::Error) -> Self {
        match error {
            reqwest_middleware::Error::Middleware(e) => DominoError::Middleware(e),
            reqwest_middleware::Error::Reqwest(e) => DominoError::Raw(e),
        }
    }
}
