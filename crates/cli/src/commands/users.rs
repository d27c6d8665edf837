//! User table commands.

use serde_json::Value;

/// List all users.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api()?;
    let users = api.list_users().await?;
    super::print_json(&users)?;
    Ok(())
}

/// Show one user by id.
pub async fn get(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api()?;
    let user = api.get_user(id).await?;
    super::print_json(&user)?;
    Ok(())
}

/// Show the user count.
pub async fn count() -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api()?;
    let count = api.count_users().await?;
    tracing::info!("Total registered users: {count}");
    Ok(())
}

/// Show the most recently created users.
pub async fn recent() -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api()?;
    let users = api.recent_users().await?;
    super::print_json(&users)?;
    Ok(())
}

/// Update a user's display name and/or email.
pub async fn update(
    id: &str,
    full_name: Option<String>,
    email: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut patch = serde_json::Map::new();
    if let Some(full_name) = full_name {
        patch.insert("full_name".to_owned(), full_name.into());
    }
    if let Some(email) = email {
        patch.insert("email".to_owned(), email.into());
    }

    let api = super::api()?;
    api.update_user(id, &Value::Object(patch)).await?;
    tracing::info!("User {id} updated");
    Ok(())
}

/// Delete a user.
pub async fn delete(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api()?;
    api.delete_user(id).await?;
    tracing::info!("User {id} deleted");
    Ok(())
}
