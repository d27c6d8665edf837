//! Authentication commands: login, signup, logout, whoami.

use secrecy::SecretString;
use taskdesk_client::NewAdmin;

/// Sign in and persist the session.
pub async fn login(email: &str, password: String) -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api()?;
    let profile = api.login(email, &SecretString::from(password)).await?;
    tracing::info!("Signed in as {}", profile.full_name());
    Ok(())
}

/// Register a new admin account and sign in as it.
pub async fn signup(
    firstname: String,
    lastname: String,
    email: String,
    username: String,
    password: String,
    role: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api()?;
    let new_admin = NewAdmin {
        firstname,
        lastname,
        email,
        username,
        password: SecretString::from(password),
        role,
    };
    let profile = api.signup(&new_admin).await?;
    tracing::info!("Admin created. Signed in as {}", profile.full_name());
    Ok(())
}

/// Sign out; clears the persisted session without calling the server.
pub async fn logout() -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api()?;
    api.logout().await?;
    tracing::info!("Signed out");
    Ok(())
}

/// Report the signed-in identity, if any.
pub async fn whoami() -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api()?;
    match api.session().await {
        Some(session) => {
            let name = session.profile.full_name();
            if name.is_empty() {
                tracing::info!("Signed in");
            } else {
                tracing::info!("Signed in as {name}");
            }
        }
        None => tracing::info!("Not signed in"),
    }
    Ok(())
}
