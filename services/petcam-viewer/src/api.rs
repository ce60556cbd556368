//! Typed client for the PetCam REST API

use std::sync::Arc;

use crate::config::Config;
use crate::io::{fetch_json, HttpClient, Method};
use crate::model::{CaptureImage, CaptureSettings, ListResponse};

/// Query parameters for `/list`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub per_page: u32,
    pub page: Option<u32>,
    pub date: Option<String>,
}

impl ListQuery {
    pub fn from_config(config: &Config) -> Self {
        Self {
            per_page: config.per_page,
            page: config.page,
            date: config.date.clone(),
        }
    }

    fn query_string(&self) -> String {
        let mut query = format!("per_page={}", self.per_page);
        if let Some(page) = self.page {
            query.push_str(&format!("&page={}", page));
        }
        if let Some(date) = &self.date {
            query.push_str(&format!("&date={}", date));
        }
        query
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Client for the capture service endpoints
pub struct PetcamApi {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PetcamApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PetcamApi")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl PetcamApi {
    pub fn new(base_url: &str, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        tracing::debug!("Created PetcamApi at {}", base_url);
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Most recent capture; the backend answers 404 when there are none
    pub async fn latest(&self) -> crate::Result<CaptureImage> {
        let url = format!("{}/latest", self.base_url);
        fetch_json(self.http.as_ref(), Method::Get, &url).await
    }

    pub async fn list(&self, query: &ListQuery) -> crate::Result<ListResponse> {
        let url = format!("{}/list?{}", self.base_url, query.query_string());
        fetch_json(self.http.as_ref(), Method::Get, &url).await
    }

    /// Ask the backend to take a picture now. The response payload is ignored.
    pub async fn capture(&self) -> crate::Result<()> {
        let url = format!("{}/capture", self.base_url);
        let _: serde_json::Value = fetch_json(self.http.as_ref(), Method::Post, &url).await?;
        Ok(())
    }

    pub async fn image(&self, id: u64) -> crate::Result<CaptureImage> {
        let url = format!("{}/image/{}", self.base_url, id);
        fetch_json(self.http.as_ref(), Method::Get, &url).await
    }

    pub async fn settings(&self) -> crate::Result<CaptureSettings> {
        let url = format!("{}/settings", self.base_url);
        fetch_json(self.http.as_ref(), Method::Get, &url).await
    }
}
