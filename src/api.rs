//! HTTP client for the score service.

use reqwest::{Response, StatusCode};

use crate::leaderboard::Leaderboard;
use crate::score::{NewScore, ScoreEntry};

/// Environment variable holding the score endpoint, e.g. `http://host:8000/api/scores/`.
pub const API_URL_VAR: &str = "SNAKE_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/scores/";

#[derive(Debug)]
pub enum ApiError {
    Transport(reqwest::Error),
    Status(StatusCode),
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(error) => Some(error),
            Self::Status(_) => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(error) => write!(f, "failed to reach the score service: {}", error),
            Self::Status(status) => write!(f, "score service answered {}", status),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug)]
pub struct ScoreClient {
    http: reqwest::Client,
    url: String,
}

impl ScoreClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Reads [`API_URL_VAR`] from the environment or a `.env` file,
    /// falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let url = dotenv::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        Self::new(url)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches every score, best first.
    pub async fn list(&self) -> ApiResult<Leaderboard<ScoreEntry>> {
        let response = self.http.get(&self.url).send().await?;
        let scores: Leaderboard<ScoreEntry> = check_status(response)?.json().await?;
        Ok(scores)
    }

    pub async fn submit(&self, new_score: &NewScore) -> ApiResult<ScoreEntry> {
        let response = self.http.post(&self.url).json(new_score).send().await?;
        let entry: ScoreEntry = check_status(response)?.json().await?;
        Ok(entry)
    }
}

fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status))
    }
}
