//! Recipe normalization
//!
//! `/recommend` returns list fields in two shapes: a real JSON array, or the
//! array printed with single quotes (`"['tomato', 'onion']"`). The quoted
//! form is rewritten to JSON by swapping quote characters and then parsed.
//! That rewrite breaks on values containing apostrophes; those fail with a
//! [`NormalizeError`] instead of rendering garbage.

use serde::Serialize;

use crate::client::models::{ListField, RawRecipe};
use crate::error::NormalizeError;

/// A recipe ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub image_url: String,
    pub instructions: String,
    pub ingredients: Vec<String>,
    pub dietary_tags: Vec<String>,
    pub source: String,
}

/// Turn a list field into a sequence of strings.
///
/// Returns the parse failure reason on error; callers attach recipe context.
pub fn normalize_list(field: &ListField) -> Result<Vec<String>, String> {
    match field {
        ListField::List(items) => Ok(items.clone()),
        ListField::Encoded(text) => {
            let rewritten = text.replace('\'', "\"");
            serde_json::from_str::<Vec<String>>(&rewritten).map_err(|e| e.to_string())
        }
    }
}

fn normalize_field(
    title: &str,
    field: &'static str,
    value: Option<&ListField>,
) -> Result<Vec<String>, NormalizeError> {
    match value {
        None => Ok(Vec::new()),
        Some(value) => normalize_list(value).map_err(|reason| NormalizeError {
            title: title.to_string(),
            field,
            reason,
        }),
    }
}

impl TryFrom<RawRecipe> for Recipe {
    type Error = NormalizeError;

    fn try_from(raw: RawRecipe) -> Result<Self, Self::Error> {
        let ingredients = normalize_field(&raw.title, "Ingredients", raw.ingredients.as_ref())?;
        let dietary_tags = normalize_field(&raw.title, "Dietary_Tags", raw.dietary_tags.as_ref())?;

        Ok(Self {
            title: raw.title,
            image_url: raw.image_url.unwrap_or_default(),
            instructions: raw.instructions.unwrap_or_default(),
            ingredients,
            dietary_tags,
            source: raw.source.unwrap_or_default(),
        })
    }
}

/// Normalize a whole response, keeping server order.
///
/// The first malformed recipe fails the batch.
pub fn normalize_all(raw: Vec<RawRecipe>) -> Result<Vec<Recipe>, NormalizeError> {
    raw.into_iter().map(Recipe::try_from).collect()
}
