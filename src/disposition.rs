//! Outcome of a call to a legacy (non-REST) Domino endpoint.
//!
//! Legacy endpoints answer with a redirect rather than a structured body. Their
//! verdict is either carried by the `PLAY_FLASH` cookie, or only by the HTTP
//! status code.

use crate::constants::{FLASH_COOKIE, FLASH_ERROR, FLASH_MESSAGE};
use crate::errors::DominoError;
use reqwest::StatusCode;
use serde::Serialize;

/// Kind of flash message set by a legacy endpoint.
#[derive(Serialize, Debug, Copy, Clone, Eq, PartialEq)]
pub enum MessageType {
    #[serde(rename = "dominoFlashMessage")]
    FlashMessage,
    #[serde(rename = "dominoFlashError")]
    FlashError,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::FlashMessage => FLASH_MESSAGE,
            MessageType::FlashError => FLASH_ERROR,
        }
    }
}

/// Parsed success/failure verdict of a legacy endpoint.
#[derive(Serialize, Debug, Clone, Eq, PartialEq)]
pub struct Disposition {
    pub message_type: MessageType,
    pub message: String,
    pub is_error: bool,
}

impl Disposition {
    /// Parse the value of a `PLAY_FLASH` cookie, e.g.
    /// `dominoFlashError=Project+already+exists`
    pub fn from_flash_cookie(value: &str) -> Result<Self, DominoError> {
        let (message_type, encoded) = value
            .split_once('=')
            .ok_or_else(|| DominoError::MalformedFlashCookie(value.to_string()))?;
        let decoded = urlencoding::decode_binary(encoded.as_bytes());
        let message = String::from_utf8_lossy(&decoded).replace('+', " ");
        let is_error = message_type == FLASH_ERROR;
        let message_type = if is_error {
            MessageType::FlashError
        } else {
            MessageType::FlashMessage
        };
        Ok(Self {
            message_type,
            message,
            is_error,
        })
    }

    /// Judge a response by its status code alone: anything but `200 OK` is an error.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        let is_error = status != StatusCode::OK;
        let message_type = if is_error {
            MessageType::FlashError
        } else {
            MessageType::FlashMessage
        };
        Self {
            message_type,
            message: body,
            is_error,
        }
    }

    pub(crate) fn from_cookie_response(res: &reqwest::Response) -> Result<Self, DominoError> {
        let cookie = res
            .cookies()
            .find(|c| c.name() == FLASH_COOKIE)
            .ok_or(DominoError::MissingFlashCookie)?;
        Self::from_flash_cookie(cookie.value())
    }

    pub(crate) async fn from_status_response(res: reqwest::Response) -> Result<Self, DominoError> {
        let status = res.status();
        let body = res.text().await?;
        Ok(Self::from_status(status, body))
    }

    /// Turn an error disposition into [DominoError::Disposition].
    pub(crate) fn into_result(self) -> Result<Self, DominoError> {
        if self.is_error {
            Err(DominoError::Disposition(self))
        } else {
            Ok(self)
        }
    }
}
