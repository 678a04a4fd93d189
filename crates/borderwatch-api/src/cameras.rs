// Camera endpoints
//
// Mirrors the sensor contract, with frames in place of readings plus a
// latest-frame shortcut.

use serde_json::Value;
use tracing::debug;

use crate::client::GatewayClient;
use crate::error::Error;
use crate::models::Payload;
use crate::sensors::DEFAULT_LIMIT;

impl GatewayClient {
    /// List all cameras.
    ///
    /// `GET /cameras`
    pub async fn list_cameras(&self) -> Result<Vec<Value>, Error> {
        self.get("cameras").await
    }

    /// Get a single camera by its backend-assigned identifier.
    ///
    /// `GET /cameras/{id}`
    pub async fn get_camera(&self, id: &str) -> Result<Value, Error> {
        self.get(&format!("cameras/{id}")).await
    }

    /// Create a camera. The payload is forwarded as-is.
    ///
    /// `POST /cameras`
    pub async fn create_camera(&self, camera: &Payload) -> Result<Value, Error> {
        self.post("cameras", camera).await
    }

    /// Update a camera. The payload is forwarded as-is.
    ///
    /// `PUT /cameras/{id}`
    pub async fn update_camera(&self, id: &str, camera: &Payload) -> Result<Value, Error> {
        self.put(&format!("cameras/{id}"), camera).await
    }

    /// Delete a camera.
    ///
    /// `DELETE /cameras/{id}`
    pub async fn delete_camera(&self, id: &str) -> Result<Value, Error> {
        self.delete(&format!("cameras/{id}")).await
    }

    /// Fetch recent frames for a camera.
    ///
    /// `GET /cameras/{id}/frames?limit=N` -- `limit` defaults to 10 and
    /// is forwarded verbatim.
    pub async fn camera_frames(&self, id: &str, limit: Option<u32>) -> Result<Vec<Value>, Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        debug!(id, limit, "fetching camera frames");
        self.get_with_query(&format!("cameras/{id}/frames"), &[("limit", limit)])
            .await
    }

    /// Fetch the most recent frame for a camera.
    ///
    /// `GET /cameras/{id}/latest-frame`
    pub async fn latest_frame(&self, id: &str) -> Result<Value, Error> {
        self.get(&format!("cameras/{id}/latest-frame")).await
    }

    /// Ask the backend to synthesize camera frames for demo/test use.
    ///
    /// `POST /cameras/simulate` (no body)
    pub async fn simulate_cameras(&self) -> Result<Value, Error> {
        debug!("requesting simulated camera frames");
        self.post_empty("cameras/simulate").await
    }
}
