//! Todo listing commands.

/// List todos, either across all users or for one user.
pub async fn list(user: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api()?;
    let todos = match user {
        Some(user_id) => api.todos_for_user(user_id).await?,
        None => api.list_todos().await?,
    };
    super::print_json(&todos)?;
    Ok(())
}
