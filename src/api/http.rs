//! HTTP client for the REST backend
//!
//! Thin JSON wrapper over `reqwest`; on wasm32 requests go through `fetch`.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Join the base URL and a path like `/foods/3`
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ApiResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ApiResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request; any response body is discarded
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let response = Self::check_status(response).await?;
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(ApiError::from)
    }

    async fn check_status(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        match status {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(text)),
            _ => Err(ApiError::Rejected {
                status: status.as_u16(),
                body: text,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = HttpClient::new("http://localhost:3333/");
        assert_eq!(client.url("/foods"), "http://localhost:3333/foods");
        assert_eq!(client.url("foods/3"), "http://localhost:3333/foods/3");
    }
}
