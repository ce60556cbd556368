//! HTTP client abstraction for testability

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::ViewerError;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// True for any 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Request method used by [`fetch_json`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Abstraction over HTTP client for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request to the given URL
    async fn get(&self, url: &str) -> crate::Result<HttpResponse>;

    /// Send a POST request with an empty body
    async fn post(&self, url: &str) -> crate::Result<HttpResponse>;
}

/// Production HTTP client using reqwest
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> crate::Result<HttpResponse> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ViewerError::Http(format!("GET {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ViewerError::Http(format!("Reading response body: {}", e)))?;

        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }

    async fn post(&self, url: &str) -> crate::Result<HttpResponse> {
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .send()
            .await
            .map_err(|e| ViewerError::Http(format!("POST {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ViewerError::Http(format!("Reading response body: {}", e)))?;

        tracing::debug!("POST {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

/// Perform a single request and decode the JSON body.
///
/// Any non-2xx status becomes [`ViewerError::RequestFailed`]; the body of a
/// failed response is not inspected.
pub async fn fetch_json<T: DeserializeOwned>(
    http: &dyn HttpClient,
    method: Method,
    url: &str,
) -> crate::Result<T> {
    let response = match method {
        Method::Get => http.get(url).await?,
        Method::Post => http.post(url).await?,
    };

    if !response.is_success() {
        tracing::debug!("{:?} {} returned status {}", method, url, response.status);
        return Err(ViewerError::RequestFailed(response.status));
    }

    Ok(serde_json::from_str(&response.body)?)
}
