// Sensor endpoints
//
// CRUD over /sensors plus recent readings and backend-side simulation.
// Sensor payloads are loosely-typed JSON -- the backend owns their shape
// and this client forwards them verbatim.

use serde_json::Value;
use tracing::debug;

use crate::client::GatewayClient;
use crate::error::Error;
use crate::models::Payload;

/// Default number of readings/frames returned by the telemetry endpoints.
pub const DEFAULT_LIMIT: u32 = 10;

impl GatewayClient {
    /// List all sensors.
    ///
    /// `GET /sensors`
    pub async fn list_sensors(&self) -> Result<Vec<Value>, Error> {
        self.get("sensors").await
    }

    /// Get a single sensor by its backend-assigned identifier.
    ///
    /// `GET /sensors/{id}`
    pub async fn get_sensor(&self, id: &str) -> Result<Value, Error> {
        self.get(&format!("sensors/{id}")).await
    }

    /// Create a sensor. The payload is forwarded as-is.
    ///
    /// `POST /sensors`
    pub async fn create_sensor(&self, sensor: &Payload) -> Result<Value, Error> {
        self.post("sensors", sensor).await
    }

    /// Update a sensor. The payload is forwarded as-is.
    ///
    /// `PUT /sensors/{id}`
    pub async fn update_sensor(&self, id: &str, sensor: &Payload) -> Result<Value, Error> {
        self.put(&format!("sensors/{id}"), sensor).await
    }

    /// Delete a sensor.
    ///
    /// `DELETE /sensors/{id}`
    pub async fn delete_sensor(&self, id: &str) -> Result<Value, Error> {
        self.delete(&format!("sensors/{id}")).await
    }

    /// Fetch recent readings for a sensor.
    ///
    /// `GET /sensors/{id}/data?limit=N` -- `limit` defaults to 10 and is
    /// forwarded verbatim; the backend is authoritative about bounds.
    pub async fn sensor_readings(&self, id: &str, limit: Option<u32>) -> Result<Vec<Value>, Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        debug!(id, limit, "fetching sensor readings");
        self.get_with_query(&format!("sensors/{id}/data"), &[("limit", limit)])
            .await
    }

    /// Ask the backend to synthesize sensor telemetry for demo/test use.
    ///
    /// `POST /sensors/simulate` (no body)
    pub async fn simulate_sensors(&self) -> Result<Value, Error> {
        debug!("requesting simulated sensor data");
        self.post_empty("sensors/simulate").await
    }
}
