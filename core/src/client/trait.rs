// core/src/client/trait.rs
use async_trait::async_trait;
use serde_json::Value;

use crate::errors::ClientError;

/// One live HTTP exchange against a deployed resource. A non-2xx status is a
/// normal exchange, not a client error; the probe decides what it means.
#[derive(Clone, Debug)]
pub struct HttpExchange {
    pub status: u16,
    pub body: String,
}

/// The cloud control-plane collaborator. Implementations live outside the
/// core; probes only ever see resource values, listings and exchanges.
#[async_trait]
pub trait CloudClient: Send + Sync {
    /// Fetch one resource by control-plane path. A 404 resolves to `None`.
    async fn get_resource(&self, path: &str) -> Result<Option<Value>, ClientError>;

    /// List resources under a control-plane path.
    async fn list_resources(&self, path: &str) -> Result<Vec<Value>, ClientError>;

    /// Exercise a deployed resource over plain HTTP.
    async fn invoke_http(&self, url: &str, method: &str) -> Result<HttpExchange, ClientError>;
}
