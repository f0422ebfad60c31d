//! Recipe search, likes and ratings

use std::time::Duration;

use colored::Colorize;
use dialoguer::{Select, theme::ColorfulTheme};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::cli::navigate;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::RecipeApi;
use crate::client::models::{Ack, FeedbackRequest, LikeRequest, Rating, RecommendRequest};
use crate::error::{Error, Result, SessionError};
use crate::guard::Screen;
use crate::models::display::RecipeList;
use crate::normalize::{self, Recipe};
use crate::output::{self, Formattable};
use crate::session::SessionStore;

/// Token for an authorized call, or the login prompt if the guard would not
/// show the search screen. Runs before any request is built.
fn authorize(store: &SessionStore) -> Result<&str> {
    navigate::enter(store, Screen::Search).map_err(|_| SessionError::NotLoggedIn)?;
    Ok(store.require()?.token.as_str())
}

/// Fetch and normalize recommendations, in server order.
pub async fn search_with<C: RecipeApi + ?Sized>(
    client: &C,
    store: &SessionStore,
    request: &RecommendRequest,
) -> Result<Vec<Recipe>> {
    let token = authorize(store)?;

    let raw = client
        .recommend(token, request)
        .await
        .map_err(Error::during("Fetching recommendations"))?;
    debug!("Received {} recipes", raw.len());

    Ok(normalize::normalize_all(raw)?)
}

/// Send a like or dislike. Local recipe state is not touched.
pub async fn like_with<C: RecipeApi + ?Sized>(
    client: &C,
    store: &SessionStore,
    title: &str,
    liked: bool,
) -> Result<Ack> {
    let token = authorize(store)?;
    let request = LikeRequest {
        recipe_title: title.to_string(),
        liked,
    };

    client
        .like(token, &request)
        .await
        .map_err(Error::during("Submitting preference"))
}

/// Send a 1-5 rating. Local recipe state is not touched.
pub async fn feedback_with<C: RecipeApi + ?Sized>(
    client: &C,
    store: &SessionStore,
    title: &str,
    rating: Rating,
) -> Result<Ack> {
    let token = authorize(store)?;
    let request = FeedbackRequest {
        recipe_title: title.to_string(),
        rating,
    };

    client
        .feedback(token, &request)
        .await
        .map_err(Error::during("Submitting feedback"))
}

fn like_notice(liked: bool) -> &'static str {
    if liked { "Recipe liked!" } else { "Recipe disliked!" }
}

fn search_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Searching recipes...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Run the search command
pub async fn search(
    opts: &GlobalOptions,
    ingredients: String,
    dietary: String,
    interactive: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if interactive && ctx.format == OutputFormat::Json {
        return Err(Error::Other(
            "--interactive cannot be combined with --format json".to_string(),
        ));
    }

    let request = RecommendRequest {
        ingredients,
        dietary,
    };

    // Checked up front so the spinner never starts for a logged-out user
    authorize(&ctx.store)?;

    let spinner = (ctx.format != OutputFormat::Json).then(search_spinner);
    let result = search_with(&ctx.client, &ctx.store, &request).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let recipes = RecipeList(result?);
    recipes.print(ctx.format)?;

    if interactive && !recipes.0.is_empty() {
        react_loop(&ctx, &recipes.0).await?;
    }

    Ok(())
}

/// What the user chose to do with a recipe in the interactive list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reaction {
    Like,
    Dislike,
    Rate(Rating),
}

/// Send one reaction and return the notice to show on success
async fn react<C: RecipeApi + ?Sized>(
    client: &C,
    store: &SessionStore,
    title: &str,
    reaction: Reaction,
) -> Result<&'static str> {
    match reaction {
        Reaction::Like => like_with(client, store, title, true)
            .await
            .map(|_| like_notice(true)),
        Reaction::Dislike => like_with(client, store, title, false)
            .await
            .map(|_| like_notice(false)),
        Reaction::Rate(rating) => feedback_with(client, store, title, rating)
            .await
            .map(|_| "Feedback submitted!"),
    }
}

/// Send one reaction and print the outcome. A failure is printed, never
/// returned, so the list stays open. Returns whether the call succeeded.
async fn react_and_report<C: RecipeApi + ?Sized>(
    client: &C,
    store: &SessionStore,
    title: &str,
    reaction: Reaction,
) -> bool {
    match react(client, store, title, reaction).await {
        Ok(notice) => {
            output::success(notice);
            true
        }
        Err(err) => {
            output::failure(&err);
            false
        }
    }
}

/// Ask what to do with `title`. `None` means back to the list.
fn pick_reaction(theme: &ColorfulTheme, title: &str) -> Result<Option<Reaction>> {
    let action = Select::with_theme(theme)
        .with_prompt(format!("{}", title.bold()))
        .items(&["Like", "Dislike", "Rate", "Back"])
        .default(0)
        .interact_opt()?;

    match action {
        Some(0) => Ok(Some(Reaction::Like)),
        Some(1) => Ok(Some(Reaction::Dislike)),
        Some(2) => {
            let ratings: Vec<Rating> = Rating::all().collect();
            let labels: Vec<String> = ratings.iter().map(|r| r.to_string()).collect();
            let picked = Select::with_theme(theme)
                .with_prompt("Rate (1-5)")
                .items(&labels)
                .interact_opt()?;
            Ok(picked.map(|idx| Reaction::Rate(ratings[idx])))
        }
        _ => Ok(None),
    }
}

/// Let the user like, dislike or rate recipes from the result list until
/// they are done.
async fn react_loop(ctx: &CommandContext, recipes: &[Recipe]) -> Result<()> {
    let theme = ColorfulTheme::default();
    let mut choices: Vec<String> = recipes.iter().map(|r| r.title.clone()).collect();
    choices.push("Done".to_string());

    loop {
        println!();
        let picked = Select::with_theme(&theme)
            .with_prompt("Pick a recipe")
            .items(&choices)
            .default(0)
            .interact_opt()?;

        let recipe = match picked {
            Some(idx) if idx < recipes.len() => &recipes[idx],
            _ => return Ok(()),
        };

        if let Some(reaction) = pick_reaction(&theme, &recipe.title)? {
            react_and_report(&ctx.client, &ctx.store, &recipe.title, reaction).await;
        }
    }
}

/// Run the like/dislike command
pub async fn like(opts: &GlobalOptions, title: String, liked: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    like_with(&ctx.client, &ctx.store, &title, liked).await?;
    output::success(like_notice(liked));
    Ok(())
}

/// Run the feedback command
pub async fn feedback(opts: &GlobalOptions, title: String, rating: Rating) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    feedback_with(&ctx.client, &ctx.store, &title, rating).await?;
    output::success("Feedback submitted!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockEcoChefClient;
    use crate::client::models::{ListField, RawRecipe};
    use crate::error::ApiError;
    use crate::session::Session;
    use tempfile::{TempDir, tempdir};

    fn logged_in() -> (TempDir, SessionStore) {
        let temp = tempdir().unwrap();
        let mut store = SessionStore::open(temp.path().join("config.yaml")).unwrap();
        store.set(Session::new("T", "42")).unwrap();
        (temp, store)
    }

    fn logged_out() -> (TempDir, SessionStore) {
        let temp = tempdir().unwrap();
        let store = SessionStore::open(temp.path().join("config.yaml")).unwrap();
        (temp, store)
    }

    fn raw(title: &str, ingredients: &str) -> RawRecipe {
        RawRecipe {
            title: title.to_string(),
            image_url: None,
            instructions: Some("Cook.".to_string()),
            ingredients: Some(ListField::Encoded(ingredients.to_string())),
            dietary_tags: Some(ListField::List(vec!["vegan".to_string()])),
            source: Some("Collaborative".to_string()),
        }
    }

    fn request() -> RecommendRequest {
        RecommendRequest {
            ingredients: "tomato, onion".to_string(),
            dietary: "Vegan".to_string(),
        }
    }

    #[tokio::test]
    async fn test_search_without_session_makes_no_call() {
        let (_temp, store) = logged_out();
        let mock = MockEcoChefClient::new();

        let err = search_with(&mock, &store, &request()).await.unwrap_err();

        assert!(matches!(err, Error::Session(SessionError::NotLoggedIn)));
        assert!(err.to_string().contains("Please login"));
        assert_eq!(mock.call_counts().await.total(), 0);
    }

    #[tokio::test]
    async fn test_search_sends_fields_verbatim_with_token() {
        let (_temp, store) = logged_in();
        let mock = MockEcoChefClient::new();

        search_with(&mock, &store, &request()).await.unwrap();

        let requests = mock.captured_requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].token.as_deref(), Some("T"));
        assert_eq!(requests[0].body["ingredients"], "tomato, onion");
        assert_eq!(requests[0].body["dietary"], "Vegan");
    }

    #[tokio::test]
    async fn test_search_keeps_server_order_and_normalizes() {
        let (_temp, store) = logged_in();
        let mock = MockEcoChefClient::new()
            .with_recipes(vec![
                raw("Zucchini Bake", "['zucchini']"),
                raw("Apple Pie", "['apple', 'flour']"),
            ])
            .await;

        let recipes = search_with(&mock, &store, &request()).await.unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].title, "Zucchini Bake");
        assert_eq!(recipes[1].title, "Apple Pie");
        assert_eq!(recipes[1].ingredients, vec!["apple", "flour"]);
    }

    #[tokio::test]
    async fn test_search_surfaces_malformed_recipe() {
        let (_temp, store) = logged_in();
        let mock = MockEcoChefClient::new()
            .with_recipes(vec![raw("Baker's Bread", "['baker's yeast']")])
            .await;

        let err = search_with(&mock, &store, &request()).await.unwrap_err();
        assert!(matches!(err, Error::Normalize(_)));
    }

    #[tokio::test]
    async fn test_search_failure_uses_server_message() {
        let (_temp, store) = logged_in();
        let mock = MockEcoChefClient::new()
            .with_error(ApiError::Unauthorized("Token has expired".to_string()))
            .await;

        let err = search_with(&mock, &store, &request()).await.unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Fetching recommendations failed: Token has expired")
        );
    }

    #[tokio::test]
    async fn test_like_and_dislike() {
        let (_temp, store) = logged_in();
        let mock = MockEcoChefClient::new();

        like_with(&mock, &store, "Apple Pie", true).await.unwrap();
        like_with(&mock, &store, "Apple Pie", false).await.unwrap();

        let requests = mock.captured_requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].body["recipe_title"], "Apple Pie");
        assert_eq!(requests[0].body["liked"], true);
        assert_eq!(requests[1].body["liked"], false);
    }

    #[tokio::test]
    async fn test_like_without_session_makes_no_call() {
        let (_temp, store) = logged_out();
        let mock = MockEcoChefClient::new();

        assert!(like_with(&mock, &store, "Apple Pie", true).await.is_err());
        let rating = Rating::try_from(3).unwrap();
        assert!(feedback_with(&mock, &store, "Apple Pie", rating).await.is_err());
        assert_eq!(mock.call_counts().await.total(), 0);
    }

    #[tokio::test]
    async fn test_feedback_sends_rating() {
        let (_temp, store) = logged_in();
        let mock = MockEcoChefClient::new();

        let ack = feedback_with(&mock, &store, "Apple Pie", Rating::try_from(5).unwrap())
            .await
            .unwrap();

        assert_eq!(ack.message.as_deref(), Some("Feedback submitted"));
        let requests = mock.captured_requests().await;
        assert_eq!(requests[0].method, "feedback");
        assert_eq!(requests[0].body["rating"], 5);
    }

    #[tokio::test]
    async fn test_feedback_failure_is_reported() {
        let (_temp, store) = logged_in();
        let mock = MockEcoChefClient::new()
            .with_error(ApiError::Server {
                status: 404,
                message: "Recipe not found".to_string(),
            })
            .await;

        let err = feedback_with(&mock, &store, "Ghost", Rating::try_from(2).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Submitting feedback failed: Recipe not found");
    }

    #[tokio::test]
    async fn test_react_dispatches_each_reaction() {
        let (_temp, store) = logged_in();
        let mock = MockEcoChefClient::new();
        let rating = Rating::try_from(4).unwrap();

        assert_eq!(
            react(&mock, &store, "Apple Pie", Reaction::Like).await.unwrap(),
            "Recipe liked!"
        );
        assert_eq!(
            react(&mock, &store, "Apple Pie", Reaction::Dislike).await.unwrap(),
            "Recipe disliked!"
        );
        assert_eq!(
            react(&mock, &store, "Apple Pie", Reaction::Rate(rating)).await.unwrap(),
            "Feedback submitted!"
        );

        let requests = mock.captured_requests().await;
        assert_eq!(requests[0].body["liked"], true);
        assert_eq!(requests[1].body["liked"], false);
        assert_eq!(requests[2].method, "feedback");
        assert_eq!(requests[2].body["rating"], 4);
    }

    #[tokio::test]
    async fn test_failed_reaction_is_reported_and_next_one_runs() {
        let (_temp, store) = logged_in();
        let mock = MockEcoChefClient::new()
            .with_error(ApiError::Server {
                status: 500,
                message: "Database unavailable".to_string(),
            })
            .await;

        assert!(!react_and_report(&mock, &store, "Apple Pie", Reaction::Like).await);
        assert!(react_and_report(&mock, &store, "Apple Pie", Reaction::Like).await);

        let counts = mock.call_counts().await;
        assert_eq!(counts.like, 2);
        assert!(store.is_authenticated());
    }
}
