//! HTTP client for the remote game server
//!
//! All game mechanics live server-side; this wraps the seven endpoints the
//! server exposes and nothing more. Rejected operations come back as
//! `Ok(MoveResponse)` with a non-success status so the caller can surface
//! the server's own message; only transport and decode failures are errors.

use crate::types::{Board, BoardState, Direction, GameSettings, GameState, MoveResponse};
use thiserror::Error;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// Server-provided error message, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn start_new_game(&self, settings: &GameSettings) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url("/start_new_game"))
            .json(settings)
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn restart_game(&self) -> Result<(), ApiError> {
        let response = self.http.post(self.url("/restart_game")).send().await?;
        Self::expect_ok(response).await
    }

    pub async fn make_user_move(&self, direction: Direction) -> Result<MoveResponse, ApiError> {
        let body = serde_json::json!({ "direction": direction.as_str() });
        let response = self
            .http
            .post(self.url("/make_user_move"))
            .json(&body)
            .send()
            .await?;
        Ok(response.json().await?)
    }

    pub async fn make_ai_move(&self) -> Result<MoveResponse, ApiError> {
        let response = self.http.post(self.url("/make_ai_move")).send().await?;
        Ok(response.json().await?)
    }

    pub async fn undo(&self) -> Result<MoveResponse, ApiError> {
        let response = self.http.post(self.url("/undo")).send().await?;
        Ok(response.json().await?)
    }

    pub async fn get_board_state(&self) -> Result<Board, ApiError> {
        let response = self
            .http
            .get(self.url("/get_board_state"))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<BoardState>().await?.board)
    }

    pub async fn get_game_state(&self) -> Result<GameState, ApiError> {
        let response = self
            .http
            .get(self.url("/get_game_state"))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// 2xx means done for the bodyless endpoints; anything else becomes a
    /// `Status` error carrying the server's message when one was sent.
    async fn expect_ok(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response
            .json::<MoveResponse>()
            .await
            .ok()
            .and_then(|r| r.message)
            .unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
