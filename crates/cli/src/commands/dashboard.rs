//! Dashboard summary command.

/// Show the dashboard counts and the recent-users table.
///
/// Legs that fail are logged by the client and show up here as zeros or an
/// empty table; the successful legs are still displayed.
pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let api = super::api()?;
    let summary = api.dashboard_summary().await;

    tracing::info!("Total registered users: {}", summary.total_users);
    tracing::info!("Total todos: {}", summary.total_todos);
    tracing::info!("Total registered admins: {}", summary.total_admins);

    if summary.recent_users.is_empty() {
        tracing::info!("No recent users found");
    } else {
        tracing::info!("Recent users:");
        super::print_json(&summary.recent_users)?;
    }
    Ok(())
}
