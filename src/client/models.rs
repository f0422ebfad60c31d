//! EcoChef API request and response models

use serde::{Deserialize, Serialize};

/// `POST /login` body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /login` response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
}

/// `POST /register` body
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub dietary_preferences: Vec<String>,
}

impl RegisterRequest {
    /// Build a registration from the free-text preference field.
    ///
    /// Every comma-separated segment is kept after trimming, including empty
    /// ones, so `""` becomes `[""]`.
    pub fn new(email: String, password: String, name: String, dietary: &str) -> Self {
        Self {
            email,
            password,
            name,
            dietary_preferences: split_preferences(dietary),
        }
    }
}

/// Split a comma-separated preference string into trimmed entries
pub fn split_preferences(input: &str) -> Vec<String> {
    input.split(',').map(|p| p.trim().to_string()).collect()
}

/// `POST /recommend` body. Both fields are passed through verbatim.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecommendRequest {
    pub ingredients: String,
    pub dietary: String,
}

/// A list field as the server sends it: either a real array or the array
/// printed with single quotes, e.g. `"['tomato', 'onion']"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListField {
    List(Vec<String>),
    Encoded(String),
}

/// Recipe record exactly as returned by `/recommend`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecipe {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Image_URL", default)]
    pub image_url: Option<String>,

    #[serde(rename = "Instructions", default)]
    pub instructions: Option<String>,

    #[serde(rename = "Ingredients", default)]
    pub ingredients: Option<ListField>,

    #[serde(rename = "Dietary_Tags", default)]
    pub dietary_tags: Option<ListField>,

    #[serde(rename = "Source", default)]
    pub source: Option<String>,
}

/// `POST /like` body
#[derive(Debug, Clone, Serialize)]
pub struct LikeRequest {
    pub recipe_title: String,
    pub liked: bool,
}

/// Star rating between 1 and 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn value(self) -> u8 {
        self.0
    }

    /// All valid ratings, lowest first
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(format!(
                "rating must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            ))
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `POST /feedback` body
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRequest {
    pub recipe_title: String,
    pub rating: Rating,
}

/// Acknowledgement returned by `/register`, `/like` and `/feedback`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}
