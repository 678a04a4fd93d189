// Dashboard endpoints
//
// Read-only aggregates. All grouping and counting happens server-side;
// this façade is pure routing plus default-parameter management.

use serde_json::Value;
use tracing::debug;

use crate::client::GatewayClient;
use crate::error::Error;
use crate::sensors::DEFAULT_LIMIT;

/// Default window for alert trends, in days.
pub const DEFAULT_TREND_DAYS: u32 = 7;

impl GatewayClient {
    /// Fetch the top-level dashboard summary.
    ///
    /// `GET /dashboard/summary`
    pub async fn dashboard_summary(&self) -> Result<Value, Error> {
        self.get("dashboard/summary").await
    }

    /// Fetch alert counts grouped by type.
    ///
    /// `GET /dashboard/alerts-by-type`
    pub async fn alerts_by_type(&self) -> Result<Value, Error> {
        self.get("dashboard/alerts-by-type").await
    }

    /// Fetch alert counts grouped by severity.
    ///
    /// `GET /dashboard/alerts-by-severity`
    pub async fn alerts_by_severity(&self) -> Result<Value, Error> {
        self.get("dashboard/alerts-by-severity").await
    }

    /// Fetch sensor counts grouped by type.
    ///
    /// `GET /dashboard/sensors-by-type`
    pub async fn sensors_by_type(&self) -> Result<Value, Error> {
        self.get("dashboard/sensors-by-type").await
    }

    /// Fetch overall system health.
    ///
    /// `GET /dashboard/system-health`
    pub async fn system_health(&self) -> Result<Value, Error> {
        self.get("dashboard/system-health").await
    }

    /// Fetch recent activity entries.
    ///
    /// `GET /dashboard/recent-activity?limit=N` -- `limit` defaults to 10.
    pub async fn recent_activity(&self, limit: Option<u32>) -> Result<Vec<Value>, Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        debug!(limit, "fetching recent activity");
        self.get_with_query("dashboard/recent-activity", &[("limit", limit)])
            .await
    }

    /// Fetch alert trends over the last `days` days (default 7).
    ///
    /// `GET /dashboard/alert-trends?days=N`
    pub async fn alert_trends(&self, days: Option<u32>) -> Result<Value, Error> {
        let days = days.unwrap_or(DEFAULT_TREND_DAYS);
        debug!(days, "fetching alert trends");
        self.get_with_query("dashboard/alert-trends", &[("days", days)])
            .await
    }
}
