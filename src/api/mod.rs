//! REST client adapter for the asset management backend
//!
//! One module per resource, each a thin set of request functions over the
//! shared [`ApiClient`]. Adapters are stateless pass-throughs: no caching,
//! no retry, no timeout. Every call is a single request/response exchange.

pub mod assignments;
pub mod auth;
pub mod data;
pub mod departments;
pub mod employees;
pub mod export;
pub mod hardware;
pub mod software;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::{config::ApiConfig, error::AppError, AppResult};

/// Shared HTTP client bound to the backend base URL resolved at startup.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::from_base_url(config.base_url.clone())
    }

    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &'static str,
    ) -> AppResult<T> {
        tracing::debug!(path, "GET");
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response, context).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        context: &'static str,
    ) -> AppResult<T> {
        tracing::debug!(path, "POST");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response, context).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        context: &'static str,
    ) -> AppResult<T> {
        tracing::debug!(path, "PUT");
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::decode(response, context).await
    }

    pub(crate) async fn delete(&self, path: &str, context: &'static str) -> AppResult<()> {
        tracing::debug!(path, "DELETE");
        let response = self.http.delete(self.url(path)).send().await?;
        if !response.status().is_success() {
            return Err(Self::failure(response, context).await);
        }
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        context: &'static str,
    ) -> AppResult<T> {
        if !response.status().is_success() {
            return Err(Self::failure(response, context).await);
        }
        Ok(response.json().await?)
    }

    /// Collapse any non-2xx response into one generic failure, keeping the
    /// body's `error`/`message` text when present. 400, 404 and 500 are
    /// indistinguishable to callers.
    async fn failure(response: reqwest::Response, context: &'static str) -> AppError {
        let status = response.status();
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error")
                    .or_else(|| body.get("message"))
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| context.to_string());
        tracing::error!(%status, %message, "backend request failed");
        AppError::Api(message)
    }
}
