//! Mock EcoChef API client for testing
//!
//! Provides an in-memory implementation of [`RecipeApi`] so command handlers
//! can be tested without a server.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::RecipeApi;
use super::models::{
    Ack, FeedbackRequest, LikeRequest, LoginRequest, LoginResponse, RawRecipe, RecommendRequest,
    RegisterRequest,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockEcoChefClient::new()
///     .with_login(LoginResponse { token: "T".into(), user_id: "42".into() })
///     .await;
///
/// let response = mock.login(&request).await?;
/// assert_eq!(response.token, "T");
/// ```
#[derive(Default)]
pub struct MockEcoChefClient {
    /// Response to return from login
    login: Arc<Mutex<Option<LoginResponse>>>,
    /// Recipes to return from recommend
    recipes: Arc<Mutex<Vec<RawRecipe>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub register: usize,
    pub recommend: usize,
    pub like: usize,
    pub feedback: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.login + self.register + self.recommend + self.like + self.feedback
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    /// The API method called (e.g., "login", "like")
    pub method: String,
    /// Bearer token the call carried, if any
    pub token: Option<String>,
    /// JSON body that would have been sent
    pub body: serde_json::Value,
}

impl MockEcoChefClient {
    /// Create a new mock client with default responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the login response.
    pub async fn with_login(self, response: LoginResponse) -> Self {
        *self.login.lock().await = Some(response);
        self
    }

    /// Configure recipes to return from recommend.
    pub async fn with_recipes(self, recipes: Vec<RawRecipe>) -> Self {
        *self.recipes.lock().await = recipes;
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }

    /// Record a captured request for test assertions.
    async fn capture_request<B: serde::Serialize>(
        &self,
        method: &str,
        token: Option<&str>,
        body: &B,
    ) {
        let mut requests = self.captured_requests.lock().await;
        requests.push(CapturedRequest {
            method: method.to_string(),
            token: token.map(|t| t.to_string()),
            body: serde_json::to_value(body).unwrap_or_default(),
        });
    }
}

fn ack(message: &str) -> Ack {
    Ack {
        message: Some(message.to_string()),
    }
}

#[async_trait]
impl RecipeApi for MockEcoChefClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.capture_request("login", None, request).await;
        self.call_count.lock().await.login += 1;
        self.check_error().await?;

        let login = self.login.lock().await;
        Ok(login.clone().unwrap_or_else(|| LoginResponse {
            token: "mock-token".to_string(),
            user_id: "mock-user".to_string(),
        }))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Ack> {
        self.capture_request("register", None, request).await;
        self.call_count.lock().await.register += 1;
        self.check_error().await?;

        Ok(ack("User registered"))
    }

    async fn recommend(&self, token: &str, request: &RecommendRequest) -> Result<Vec<RawRecipe>> {
        self.capture_request("recommend", Some(token), request).await;
        self.call_count.lock().await.recommend += 1;
        self.check_error().await?;

        Ok(self.recipes.lock().await.clone())
    }

    async fn like(&self, token: &str, request: &LikeRequest) -> Result<Ack> {
        self.capture_request("like", Some(token), request).await;
        self.call_count.lock().await.like += 1;
        self.check_error().await?;

        Ok(ack("Preference updated"))
    }

    async fn feedback(&self, token: &str, request: &FeedbackRequest) -> Result<Ack> {
        self.capture_request("feedback", Some(token), request).await;
        self.call_count.lock().await.feedback += 1;
        self.check_error().await?;

        Ok(ack("Feedback submitted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_default_login() {
        let mock = MockEcoChefClient::new();
        let response = mock
            .login(&LoginRequest {
                email: "a@b.com".to_string(),
                password: "x".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.token, "mock-token");
        assert_eq!(mock.call_counts().await.login, 1);
    }

    #[tokio::test]
    async fn test_mock_client_error_is_consumed() {
        let mock = MockEcoChefClient::new()
            .with_error(ApiError::Network("down".to_string()))
            .await;

        let request = RecommendRequest::default();
        assert!(mock.recommend("T", &request).await.is_err());
        assert!(mock.recommend("T", &request).await.is_ok());
        assert_eq!(mock.call_counts().await.recommend, 2);
    }

    #[tokio::test]
    async fn test_mock_client_captures_token() {
        let mock = MockEcoChefClient::new();
        mock.like(
            "T",
            &LikeRequest {
                recipe_title: "Soup".to_string(),
                liked: false,
            },
        )
        .await
        .unwrap();

        let requests = mock.captured_requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "like");
        assert_eq!(requests[0].token.as_deref(), Some("T"));
        assert_eq!(requests[0].body["liked"], false);
    }
}
