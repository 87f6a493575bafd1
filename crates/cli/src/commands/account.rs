//! Simulated account commands.

use dripstore_storefront::error::AppError;
use dripstore_storefront::models::{AuthUser, Route};
use dripstore_storefront::state::AppState;

/// Run the simulated login.
///
/// # Errors
///
/// Returns `AppError::Auth` if the attempt is rejected.
pub async fn login(state: &AppState, email: &str, password: &str) -> Result<(), AppError> {
    let outcome = state.auth().login(email, password, &Route::Home).await?;
    print_user(&outcome.user);
    Ok(())
}

/// Run the simulated signup.
///
/// # Errors
///
/// Returns `AppError::Auth` if the attempt is rejected.
pub async fn signup(
    state: &AppState,
    email: &str,
    password: &str,
    name: Option<&str>,
) -> Result<(), AppError> {
    let outcome = state
        .auth()
        .signup(email, password, name, &Route::Home)
        .await?;
    print_user(&outcome.user);
    Ok(())
}

fn print_user(user: &AuthUser) {
    println!("Signed in as {} <{}>", user.display_name, user.email);
    println!("User id: {}", user.id);
}
