// Alert endpoints
//
// CRUD over /alerts, summary statistics, and batch simulation. Severity
// and type are never enriched or enforced here; see
// [`Severity`](crate::models::Severity) for the display-side enumeration.

use serde_json::{Value, json};
use tracing::debug;

use crate::client::GatewayClient;
use crate::error::Error;
use crate::models::Payload;

impl GatewayClient {
    /// List alerts, optionally narrowed by arbitrary key/value query
    /// filters (e.g. `[("severity", "high")]`). Filters are forwarded
    /// verbatim; an empty slice lists everything.
    ///
    /// `GET /alerts`
    pub async fn list_alerts(&self, filters: &[(&str, &str)]) -> Result<Vec<Value>, Error> {
        if filters.is_empty() {
            self.get("alerts").await
        } else {
            self.get_with_query("alerts", filters).await
        }
    }

    /// Get a single alert by its backend-assigned identifier.
    ///
    /// `GET /alerts/{id}`
    pub async fn get_alert(&self, id: &str) -> Result<Value, Error> {
        self.get(&format!("alerts/{id}")).await
    }

    /// Create an alert. The payload is forwarded as-is.
    ///
    /// `POST /alerts`
    pub async fn create_alert(&self, alert: &Payload) -> Result<Value, Error> {
        self.post("alerts", alert).await
    }

    /// Update an alert. The payload is forwarded as-is.
    ///
    /// `PUT /alerts/{id}`
    pub async fn update_alert(&self, id: &str, alert: &Payload) -> Result<Value, Error> {
        self.put(&format!("alerts/{id}"), alert).await
    }

    /// Delete an alert.
    ///
    /// `DELETE /alerts/{id}`
    pub async fn delete_alert(&self, id: &str) -> Result<Value, Error> {
        self.delete(&format!("alerts/{id}")).await
    }

    /// Fetch alert summary statistics.
    ///
    /// `GET /alerts/stats/summary`
    pub async fn alert_stats(&self) -> Result<Value, Error> {
        self.get("alerts/stats/summary").await
    }

    /// Ask the backend to synthesize `count` alerts (default 1).
    ///
    /// `POST /alerts/simulate` with body `{"count": N}`
    pub async fn simulate_alerts(&self, count: Option<u32>) -> Result<Value, Error> {
        let count = count.unwrap_or(1);
        debug!(count, "requesting simulated alerts");
        self.post("alerts/simulate", &json!({ "count": count })).await
    }
}
