//! EcoChef API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::RecipeApi;
use super::models::{
    Ack, FeedbackRequest, LikeRequest, LoginRequest, LoginResponse, RawRecipe, RecommendRequest,
    RegisterRequest,
};
use crate::error::{ApiError, Result};

/// Request timeout for every call
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// EcoChef API client
pub struct EcoChefClient {
    http: HttpClient,
    base_url: String,
}

impl EcoChefClient {
    /// Create a client for the API at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body, optionally with a bearer token, and decode the reply
    async fn post<B, T>(&self, path: &str, token: Option<&str>, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned + Send,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let mut request = self.http.post(&url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        debug!("POST {} -> {}", path, status);

        if status.is_success() {
            let data = response.json::<T>().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            })?;
            return Ok(data);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| fallback_message(status));

        // A 401 on an authorized call means the stored token was rejected;
        // on /login it is just bad credentials.
        if status == StatusCode::UNAUTHORIZED && token.is_some() {
            return Err(ApiError::Unauthorized(message).into());
        }

        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        }
        .into())
    }
}

/// Pull the server-supplied message out of an error body.
///
/// Route handlers answer `{"error": ...}`; the token layer answers
/// `{"msg": ...}`.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "msg", "message"]
        .iter()
        .find_map(|key| {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .filter(|message| !message.is_empty())
        })
        .map(str::to_string)
}

fn fallback_message(status: StatusCode) -> String {
    format!("Request failed with status code {}", status.as_u16())
}

#[async_trait]
impl RecipeApi for EcoChefClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.post("/login", None, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Ack> {
        self.post("/register", None, request).await
    }

    async fn recommend(&self, token: &str, request: &RecommendRequest) -> Result<Vec<RawRecipe>> {
        self.post("/recommend", Some(token), request).await
    }

    async fn like(&self, token: &str, request: &LikeRequest) -> Result<Ack> {
        self.post("/like", Some(token), request).await
    }

    async fn feedback(&self, token: &str, request: &FeedbackRequest) -> Result<Ack> {
        self.post("/feedback", Some(token), request).await
    }
}
