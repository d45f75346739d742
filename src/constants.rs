/// Environment variable consulted for the API host when none is given.
pub(crate) const HOST_ENV_VAR: &str = "DOMINO_API_HOST";

/// Environment variable consulted for the API key when none is given.
pub(crate) const API_KEY_ENV_VAR: &str = "DOMINO_USER_API_KEY";

/// Cookie set by legacy (Play framework) endpoints to report an outcome.
pub(crate) const FLASH_COOKIE: &str = "PLAY_FLASH";

pub(crate) const FLASH_MESSAGE: &str = "dominoFlashMessage";
pub(crate) const FLASH_ERROR: &str = "dominoFlashError";

/// Oldest deployment exposing project creation and collaborator management.
pub(crate) const MIN_COLLABORATION_VERSION: &str = "1.53.0.0";
