//! Dashboard summary: four independent reads joined into one view.

use tracing::{instrument, warn};

use crate::api::AdminApi;
use crate::types::Record;

/// The numbers and lists shown on the dashboard landing view.
#[derive(Debug, Clone, Default)]
pub struct DashboardSummary {
    /// Total registered users.
    pub total_users: u64,
    /// Total todos across all users.
    pub total_todos: u64,
    /// Total admin accounts.
    pub total_admins: u64,
    /// Most recently created users.
    pub recent_users: Vec<Record>,
}

impl AdminApi {
    /// Fetch the dashboard summary.
    ///
    /// The four reads are issued concurrently and each successful result is
    /// applied on its own: a failed leg leaves its field at the zero/empty
    /// default and is logged, without discarding the other legs.
    #[instrument(skip(self))]
    pub async fn dashboard_summary(&self) -> DashboardSummary {
        let (users, todos, recent, admins) = tokio::join!(
            self.count_users(),
            self.list_todos(),
            self.recent_users(),
            self.count_admins(),
        );

        let mut summary = DashboardSummary::default();

        match users {
            Ok(count) => summary.total_users = count,
            Err(error) => warn!(%error, "Failed to fetch user count"),
        }
        match todos {
            Ok(todos) => summary.total_todos = todos.len() as u64,
            Err(error) => warn!(%error, "Failed to fetch todos"),
        }
        match recent {
            Ok(users) => summary.recent_users = users,
            Err(error) => warn!(%error, "Failed to fetch recent users"),
        }
        match admins {
            Ok(count) => summary.total_admins = count,
            Err(error) => warn!(%error, "Failed to fetch admin count"),
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_defaults_to_zero() {
        let summary = DashboardSummary::default();
        assert_eq!(summary.total_users, 0);
        assert_eq!(summary.total_todos, 0);
        assert_eq!(summary.total_admins, 0);
        assert!(summary.recent_users.is_empty());
    }
}
