//! Display models for recipe output

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::normalize::Recipe;
use crate::output::{Formattable, json, table};

const NO_RECIPES: &str = "No recipes found.";

/// Recipe row for table output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RecipeRow {
    #[tabled(rename = "#")]
    pub index: usize,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "INGREDIENTS")]
    pub ingredients: String,

    #[tabled(rename = "DIETARY")]
    pub dietary: String,

    #[tabled(rename = "SOURCE")]
    pub source: String,
}

impl RecipeRow {
    fn new(index: usize, recipe: &Recipe) -> Self {
        Self {
            index,
            title: recipe.title.clone(),
            ingredients: join_or_dash(&recipe.ingredients),
            dietary: join_or_dash(&recipe.dietary_tags),
            source: or_dash(&recipe.source),
        }
    }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "--".to_string()
    } else {
        items.join(", ")
    }
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "--".to_string()
    } else {
        value.to_string()
    }
}

/// Render one recipe as a card
fn pretty_card(index: usize, recipe: &Recipe) -> String {
    let mut lines = vec![format!(
        "{} {}",
        format!("{}.", index).dimmed(),
        recipe.title.bold()
    )];

    lines.push(format!(
        "   {} {}",
        "Ingredients:".bold(),
        join_or_dash(&recipe.ingredients)
    ));
    lines.push(format!(
        "   {} {}",
        "Instructions:".bold(),
        or_dash(&recipe.instructions)
    ));
    lines.push(format!(
        "   {} {}",
        "Dietary:".dimmed(),
        join_or_dash(&recipe.dietary_tags)
    ));
    lines.push(format!("   {} {}", "Source:".dimmed(), or_dash(&recipe.source)));
    if !recipe.image_url.is_empty() {
        lines.push(format!("   {} {}", "Image:".dimmed(), recipe.image_url.cyan()));
    }

    lines.join("\n")
}

/// The displayed result list, in the order the server returned it
#[derive(Debug, Clone, Default)]
pub struct RecipeList(pub Vec<Recipe>);

impl Formattable for RecipeList {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(&self.0)?),
            OutputFormat::Table => {
                let rows: Vec<RecipeRow> = self
                    .0
                    .iter()
                    .enumerate()
                    .map(|(i, r)| RecipeRow::new(i + 1, r))
                    .collect();
                Ok(table::format_table(&rows, NO_RECIPES))
            }
            OutputFormat::Pretty => {
                if self.0.is_empty() {
                    return Ok(NO_RECIPES.to_string());
                }
                let cards: Vec<String> = self
                    .0
                    .iter()
                    .enumerate()
                    .map(|(i, r)| pretty_card(i + 1, r))
                    .collect();
                Ok(cards.join("\n\n"))
            }
        }
    }
}
