//! EcoChef API client

use async_trait::async_trait;

use crate::error::Result;

pub mod ecochef;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use ecochef::EcoChefClient;
#[cfg(test)]
pub use mock::MockEcoChefClient;
use models::{
    Ack, FeedbackRequest, LikeRequest, LoginRequest, LoginResponse, RawRecipe, RecommendRequest,
    RegisterRequest,
};

/// EcoChef API surface.
///
/// Authorized calls take the bearer token explicitly; the client itself holds
/// no session.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Exchange credentials for a token and user id
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;

    /// Create an account
    async fn register(&self, request: &RegisterRequest) -> Result<Ack>;

    /// Fetch recommendations in server order
    async fn recommend(&self, token: &str, request: &RecommendRequest) -> Result<Vec<RawRecipe>>;

    /// Record a like or dislike for a recipe
    async fn like(&self, token: &str, request: &LikeRequest) -> Result<Ack>;

    /// Record a 1-5 rating for a recipe
    async fn feedback(&self, token: &str, request: &FeedbackRequest) -> Result<Ack>;
}
