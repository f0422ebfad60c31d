//! Login, registration and logout

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use log::debug;

use crate::cli::navigate::{self, screen_hint};
use crate::cli::{CommandContext, GlobalOptions};
use crate::client::RecipeApi;
use crate::client::models::{LoginRequest, RegisterRequest};
use crate::error::{ApiError, Error, Result};
use crate::guard::{self, Route, Screen};
use crate::session::{Session, SessionStore};

/// Submit credentials and store the returned session.
///
/// The store is only written on success. Returns the screen the user lands
/// on afterwards.
pub async fn login_with<C: RecipeApi + ?Sized>(
    client: &C,
    store: &mut SessionStore,
    request: LoginRequest,
) -> Result<Screen> {
    let response = client
        .login(&request)
        .await
        .map_err(Error::during("Login"))?;

    // An empty token would be stored but never count as a session
    if response.token.is_empty() {
        return Err(Error::Failed {
            action: "Login",
            source: ApiError::InvalidResponse("server returned an empty token".to_string()),
        });
    }

    store.set(Session::new(response.token, response.user_id))?;

    Ok(guard::land(&Route::Login, store.is_authenticated()))
}

/// Create an account. Returns the screen the user is sent to.
pub async fn register_with<C: RecipeApi + ?Sized>(
    client: &C,
    store: &SessionStore,
    request: RegisterRequest,
) -> Result<Screen> {
    client
        .register(&request)
        .await
        .map_err(Error::during("Registration"))?;

    Ok(guard::land(&Route::Login, store.is_authenticated()))
}

/// Clear the stored session and return where the search route now leads.
pub fn logout_with(store: &mut SessionStore) -> Result<Screen> {
    store.clear()?;
    Ok(guard::land(&Route::Search, store.is_authenticated()))
}

fn prompt_text(prompt: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()?),
    }
}

fn prompt_password(value: Option<String>) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?),
    }
}

/// Print the notice for an auth screen the guard redirected away from
fn already_logged_in(store: &SessionStore) {
    let user = store.get().map(|s| s.user_id.as_str()).unwrap_or("unknown");
    println!("{} Already logged in as user {}.", "✓".green(), user.bold());
    println!("  → Run '{}' to find recipes", screen_hint(Screen::Search));
}

/// Run the login command
pub async fn login(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;

    if navigate::enter(&ctx.store, Screen::Login).is_err() {
        already_logged_in(&ctx.store);
        return Ok(());
    }

    let email = prompt_text("Email", email)?;
    let password = prompt_password(password)?;

    debug!("Logging in as {}", email);
    let screen = login_with(
        &ctx.client,
        &mut ctx.store,
        LoginRequest { email, password },
    )
    .await?;

    println!("{} Logged in.", "✓".green());
    println!(
        "  Session saved to {}",
        ctx.store.path().display().to_string().cyan()
    );
    println!("  → Run '{}' to find recipes", screen_hint(screen));

    Ok(())
}

/// Run the register command
pub async fn register(
    opts: &GlobalOptions,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    dietary: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if navigate::enter(&ctx.store, Screen::Register).is_err() {
        already_logged_in(&ctx.store);
        return Ok(());
    }

    let name = prompt_text("Name", name)?;
    let email = prompt_text("Email", email)?;
    let password = prompt_password(password)?;
    let dietary = match dietary {
        Some(d) => d,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Dietary preferences (e.g., vegan, gluten-free)")
            .allow_empty(true)
            .interact_text()?,
    };

    let request = RegisterRequest::new(email, password, name, &dietary);
    debug!(
        "Registering {} with preferences {:?}",
        request.email, request.dietary_preferences
    );

    let screen = register_with(&ctx.client, &ctx.store, request).await?;

    println!("{} Registration successful!", "✓".green());
    println!("  → Run '{}' to sign in", screen_hint(screen));

    Ok(())
}

/// Run the logout command
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    let was_logged_in = ctx.store.is_authenticated();

    let screen = logout_with(&mut ctx.store)?;

    if was_logged_in {
        println!("{} Logged out.", "✓".green());
    } else {
        println!("{} No session was stored.", "○".dimmed());
    }
    println!("  → Run '{}' to sign in again", screen_hint(screen));

    Ok(())
}
