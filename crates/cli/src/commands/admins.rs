//! Admin table commands.

use serde_json::Value;

/// List all admin accounts.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api()?;
    let admins = api.list_admins().await?;
    super::print_json(&admins)?;
    Ok(())
}

/// Show the admin count.
pub async fn count() -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api()?;
    let count = api.count_admins().await?;
    tracing::info!("Total registered admins: {count}");
    Ok(())
}

/// Update an admin account's name, email, and/or role.
pub async fn update(
    id: &str,
    firstname: Option<String>,
    lastname: Option<String>,
    email: Option<String>,
    role: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut patch = serde_json::Map::new();
    if let Some(firstname) = firstname {
        patch.insert("firstname".to_owned(), firstname.into());
    }
    if let Some(lastname) = lastname {
        patch.insert("lastname".to_owned(), lastname.into());
    }
    if let Some(email) = email {
        patch.insert("email".to_owned(), email.into());
    }
    if let Some(role) = role {
        // The service's field name for the role
        patch.insert("adminType".to_owned(), role.into());
    }

    let api = super::api()?;
    api.update_admin(id, &Value::Object(patch)).await?;
    tracing::info!("Admin {id} updated");
    Ok(())
}

/// Delete an admin account.
///
/// The service exposes one delete endpoint for users and admins alike.
pub async fn delete(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api()?;
    api.delete_user(id).await?;
    tracing::info!("Admin {id} deleted");
    Ok(())
}
