//! Mind-Bloom API collaborator.
//!
//! Every screen talks to the service through [`MindBloomApi`]. The production
//! implementation is [`HttpApi`]; tests substitute their own.

pub mod http;
pub mod token_store;

pub use http::HttpApi;
pub use token_store::TokenStore;

use crate::mood::Mood;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Login form payload.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Registration form payload.
#[derive(Clone, Serialize)]
pub struct RegistrationInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// A journal entry ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalDraft {
    pub content: String,
    pub mood: Mood,
}

/// Response to a successful journal save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JournalSaved {
    #[serde(default)]
    pub affirmation: Option<String>,
}

/// An affirmation shown once after a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affirmation {
    pub content: String,
    pub mood_type: String,
}

/// Failure of a remote call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...).
    #[error("{0}")]
    Transport(String),
    /// Non-2xx response without a structured message.
    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },
    /// Non-2xx response whose body carried a `message` or `error` field.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// 2xx response that could not be parsed.
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("You need to log in before saving a journal entry.")]
    MissingToken,
    #[error("Failed to store session token: {0}")]
    TokenStore(String),
    /// The request task ended without reporting an outcome.
    #[error("Request did not complete")]
    Aborted,
}

impl ApiError {
    /// Build an error from a non-2xx status and its body.
    ///
    /// A JSON body with a string `message` (or `error`) field becomes
    /// [`ApiError::Rejected`]; anything else is kept verbatim.
    pub fn from_status(status: u16, body: String) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                ["message", "error"].iter().find_map(|key| {
                    value
                        .get(key)
                        .and_then(|v| v.as_str())
                        .map(str::to_string)
                })
            });

        match message {
            Some(message) => ApiError::Rejected { status, message },
            None => ApiError::Status { status, body },
        }
    }

    /// The message to show the user, if this error carries one.
    ///
    /// `None` means the form should fall back to its generic message.
    pub fn user_message(&self) -> Option<String> {
        match self {
            ApiError::Status { body, .. } if body.trim().is_empty() => None,
            ApiError::Rejected { message, .. } if message.trim().is_empty() => None,
            ApiError::Transport(message) if message.trim().is_empty() => None,
            ApiError::Aborted => None,
            other => Some(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// The remote calls the screens depend on.
#[async_trait]
pub trait MindBloomApi: Send + Sync {
    /// Sign in. On success the session token is kept for later calls.
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;

    /// Create an account.
    async fn register(&self, input: &RegistrationInput) -> Result<(), ApiError>;

    /// Save a journal entry, possibly receiving an affirmation back.
    async fn save_journal_entry(&self, draft: &JournalDraft) -> Result<JournalSaved, ApiError>;
}
