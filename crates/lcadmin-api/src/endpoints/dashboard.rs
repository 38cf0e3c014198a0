// Dashboard endpoints

use crate::client::CatalogClient;
use crate::error::Error;
use crate::types::DashboardSummary;

impl CatalogClient {
    /// `GET /api/dashboard/summary` -- per-entity record counts for the
    /// admin dashboard.
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, Error> {
        self.get("dashboard/summary").await
    }
}
