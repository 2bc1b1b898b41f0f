use super::{
    ApiError, Credentials, JournalDraft, JournalSaved, MindBloomApi, RegistrationInput, TokenStore,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, warn};

const USER_AGENT: &str = concat!("mindbloom/", env!("CARGO_PKG_VERSION"));

const LOGIN_PATH: &str = "auth/login";
const REGISTER_PATH: &str = "auth/register";
const JOURNAL_PATH: &str = "journal";

/// HTTP client for the Mind-Bloom API.
pub struct HttpApi {
    http_client: Client,
    base_url: String,
    tokens: TokenStore,
}

#[derive(Debug, Default, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Serialize)]
struct JournalRequest<'a> {
    content: &'a str,
    mood: &'a str,
}

/// Show only the edges of a token.
fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "***".to_string()
    }
}

impl HttpApi {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration, tokens: TokenStore) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url: base_url.into(),
            tokens,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// POST a JSON body and return the response text of a 2xx response.
    async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<String, ApiError> {
        let url = self.endpoint(path);
        info!("POST {}", url);

        let mut request = self.http_client.post(&url).json(body);
        if let Some(token) = bearer {
            debug!("Authorization: Bearer {}", mask_token(token));
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        info!("Response status: {} {}", status.as_u16(), status);

        let text = response.text().await.unwrap_or_else(|e| {
            warn!("Failed to read response body: {}", e);
            String::new()
        });

        if !status.is_success() {
            error!("Error response body: {}", text);
            return Err(ApiError::from_status(status.as_u16(), text));
        }

        Ok(text)
    }
}

#[async_trait]
impl MindBloomApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let text = self.post_json(LOGIN_PATH, credentials, None).await?;

        // Token file errors never fail a login the server accepted.
        let response: LoginResponse = serde_json::from_str(&text).unwrap_or_default();
        match response.token.filter(|t| !t.trim().is_empty()) {
            Some(token) => {
                debug!("Storing session token {}", mask_token(&token));
                if let Err(e) = self.tokens.save(&token) {
                    warn!("Failed to store session token: {:#}", e);
                }
            }
            None => {
                debug!("Login response carried no token, dropping any stored one");
                if let Err(e) = self.tokens.clear() {
                    warn!("Failed to remove stale session token: {:#}", e);
                }
            }
        }

        Ok(())
    }

    async fn register(&self, input: &RegistrationInput) -> Result<(), ApiError> {
        self.post_json(REGISTER_PATH, input, None).await?;
        Ok(())
    }

    async fn save_journal_entry(&self, draft: &JournalDraft) -> Result<JournalSaved, ApiError> {
        let token = self
            .tokens
            .load()
            .map_err(|e| ApiError::TokenStore(format!("{:#}", e)))?
            .ok_or(ApiError::MissingToken)?;

        let body = JournalRequest {
            content: &draft.content,
            mood: draft.mood.as_str(),
        };
        let text = self.post_json(JOURNAL_PATH, &body, Some(&token)).await?;

        serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse journal response: {}", e);
            ApiError::Decode(e.to_string())
        })
    }
}
