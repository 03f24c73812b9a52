//! reqwest-backed control-plane client.
//!
//! Control-plane resources live under `{base}/v1/<path>`. A 404 on a get is
//! `None` (the probe decides what absence means); any other non-success
//! status is a `ClientError`. `invoke_http` is different: it exercises a
//! deployed resource, so every reachable status is returned as an exchange.

use std::time::Duration;

use async_trait::async_trait;
use gatecheck_core::client::{CloudClient, HttpExchange};
use gatecheck_core::errors::ClientError;
use serde_json::Value;

pub struct HttpCloudClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpCloudClient {
    pub fn new(base_url: String, token: Option<String>, timeout_ms: u64) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn fetch(&self, path: &str) -> Result<Option<Value>, ClientError> {
        let url = format!("{}/v1/{}", self.base_url, path);
        let resp = self
            .request(reqwest::Method::GET, &url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.as_u16() == 404 {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ClientError::Status { path: path.to_string(), status: status.as_u16() });
        }
        let value = resp
            .json::<Value>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(Some(value))
    }
}

#[async_trait]
impl CloudClient for HttpCloudClient {
    async fn get_resource(&self, path: &str) -> Result<Option<Value>, ClientError> {
        self.fetch(path).await
    }

    async fn list_resources(&self, path: &str) -> Result<Vec<Value>, ClientError> {
        let value = self
            .fetch(path)
            .await?
            .ok_or_else(|| ClientError::Status { path: path.to_string(), status: 404 })?;

        // Listings come back either as a bare array or as {"items": [...]}.
        match value {
            Value::Array(items) => Ok(items),
            Value::Object(mut obj) => match obj.remove("items") {
                Some(Value::Array(items)) => Ok(items),
                _ => Err(ClientError::Decode(format!("listing at {path} has no items array"))),
            },
            other => Err(ClientError::Decode(format!(
                "listing at {path} is not an array: {other}"
            ))),
        }
    }

    async fn invoke_http(&self, url: &str, method: &str) -> Result<HttpExchange, ClientError> {
        let method = reqwest::Method::from_bytes(method.as_bytes())
            .map_err(|_| ClientError::Transport(format!("unsupported http method: {method}")))?;

        let resp = self
            .request(method, url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(HttpExchange { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn client(server: &mockito::ServerGuard) -> HttpCloudClient {
        HttpCloudClient::new(server.url(), None, 5_000).unwrap()
    }

    #[tokio::test]
    async fn get_resource_decodes_json() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/v1/apis/demo1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("{\"api_id\":\"demo1\",\"protocol_type\":\"HTTP\"}")
            .create_async()
            .await;

        let api = client(&server).get_resource("apis/demo1").await.unwrap().unwrap();
        assert_eq!(api["protocol_type"].as_str().unwrap(), "HTTP");
    }

    #[tokio::test]
    async fn not_found_is_none() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/v1/apis/ghost")
            .with_status(404)
            .create_async()
            .await;

        let res = client(&server).get_resource("apis/ghost").await.unwrap();
        assert!(res.is_none());
    }

    #[tokio::test]
    async fn control_plane_error_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/v1/apis/demo1")
            .with_status(503)
            .create_async()
            .await;

        let err = client(&server).get_resource("apis/demo1").await.unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn listings_accept_bare_and_wrapped_arrays() {
        let mut server = mockito::Server::new_async().await;
        let _bare = server
            .mock("GET", "/v1/apis/demo1/routes")
            .with_status(200)
            .with_body("[{\"route_key\":\"GET /health\"}]")
            .create_async()
            .await;
        let _wrapped = server
            .mock("GET", "/v1/apis/demo1/integrations")
            .with_status(200)
            .with_body("{\"items\":[{\"integration_uri\":\"functions/checkout\"}]}")
            .create_async()
            .await;

        let c = client(&server);
        let routes = c.list_resources("apis/demo1/routes").await.unwrap();
        assert_eq!(routes.len(), 1);
        let integrations = c.list_resources("apis/demo1/integrations").await.unwrap();
        assert_eq!(integrations[0]["integration_uri"].as_str().unwrap(), "functions/checkout");
    }

    #[tokio::test]
    async fn invoke_returns_exchange_for_error_statuses() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/health")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let exchange = client(&server)
            .invoke_http(&format!("{}/health", server.url()), "GET")
            .await
            .unwrap();
        assert_eq!(exchange.status, 500);
        assert_eq!(exchange.body, "internal error");
    }

    #[tokio::test]
    async fn bearer_token_is_sent_when_configured() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/v1/secrets/db-creds")
            .match_header("authorization", "Bearer tok-123")
            .with_status(200)
            .with_body("{\"name\":\"db-creds\"}")
            .create_async()
            .await;

        let c = HttpCloudClient::new(server.url(), Some("tok-123".to_string()), 5_000).unwrap();
        let secret = c.get_resource("secrets/db-creds").await.unwrap();
        assert!(secret.is_some());
    }
}
