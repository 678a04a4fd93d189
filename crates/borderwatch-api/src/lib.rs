// borderwatch-api: async client for the BorderWatch surveillance gateway
//
// One session-aware HTTP pipeline shared by five resource façades. The
// façade modules (auth, sensors, cameras, alerts, dashboard) add inherent
// methods to `GatewayClient`; everything routes through the verb helpers
// in `client`, so the bearer interceptor and the centralized 401 recovery
// apply to every call without exception.

pub mod alerts;
pub mod auth;
pub mod cameras;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod models;
pub mod sensors;
pub mod session;
pub mod transport;

pub use client::GatewayClient;
pub use error::Error;
pub use models::{LoginResponse, Payload, Severity, UserProfile};
pub use session::{MemorySessionStore, NoopHook, Session, SessionStore, UnauthorizedHook};
pub use transport::TransportConfig;
