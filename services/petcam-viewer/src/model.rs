//! Wire types returned by the capture service

use serde::{Deserialize, Deserializer, Serialize};

/// A single capture as returned by `/latest`, `/list` and `/image/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureImage {
    pub id: u64,
    /// ISO-8601 timestamp, with or without an offset
    pub timestamp: String,
    pub filename: String,
    pub filesize: u64,
    pub image_url: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub note: Option<String>,
}

impl CaptureImage {
    /// Size in kilobytes with one decimal, e.g. `"12.3 KB"`
    pub fn filesize_label(&self) -> String {
        format!("{:.1} KB", self.filesize as f64 / 1024.0)
    }

    /// `"1280x720"` when the backend reported both dimensions
    pub fn dimensions_label(&self) -> Option<String> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(format!("{}x{}", w, h)),
            _ => None,
        }
    }
}

/// Response body of `/list`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<CaptureImage>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response body of `GET /settings`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureSettings {
    #[serde(default)]
    pub capture_interval_seconds: Option<u64>,
    #[serde(default)]
    pub image_resolution: Option<String>,
    #[serde(default)]
    pub jpeg_quality: Option<u32>,
    #[serde(default)]
    pub retention_days: Option<u32>,
    #[serde(default)]
    pub max_storage_bytes: Option<u64>,
}

#[cfg(test)]
pub(crate) fn test_image(id: u64, timestamp: &str) -> CaptureImage {
    CaptureImage {
        id,
        timestamp: timestamp.to_string(),
        filename: format!("img_{}.jpg", id),
        filesize: 2048,
        image_url: format!("http://cam/api/images/img_{}.jpg", id),
        thumbnail_url: format!("http://cam/api/thumbnails/img_{}.jpg", id),
        width: None,
        height: None,
        note: None,
    }
}
