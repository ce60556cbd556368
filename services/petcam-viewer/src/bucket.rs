//! Hour bucketing of capture lists
//!
//! Captures arrive already ordered by the backend. Bucketing is a single
//! forward pass that opens a new bucket whenever the calendar hour changes;
//! runs of the same hour that are not adjacent stay in separate buckets.

use std::fmt;

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::model::CaptureImage;

/// Label used for captures whose timestamp cannot be parsed
pub const UNKNOWN_TIME_LABEL: &str = "Unknown time";

/// Time zone used for bucket keys, labels and displayed timestamps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayZone {
    #[default]
    Local,
    Utc,
}

impl DisplayZone {
    /// Format a capture timestamp for display, falling back to the raw string
    pub fn format_timestamp(&self, timestamp: &str) -> String {
        let formatted = match self {
            DisplayZone::Local => localize(timestamp, &Local).map(|dt| format_full(&dt)),
            DisplayZone::Utc => localize(timestamp, &Utc).map(|dt| format_full(&dt)),
        };
        formatted.unwrap_or_else(|| timestamp.to_string())
    }
}

fn format_full<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Calendar hour a capture falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HourKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
}

impl HourKey {
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
        }
    }
}

impl fmt::Display for HourKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}-{}", self.year, self.month, self.day, self.hour)
    }
}

/// A contiguous run of captures sharing the same calendar hour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourBucket {
    /// `None` for a run of captures with unparseable timestamps
    pub key: Option<HourKey>,
    pub label: String,
    pub items: Vec<CaptureImage>,
}

/// Parse a capture timestamp into the given zone.
///
/// Offset-carrying timestamps are converted; naive ones are read as wall-clock
/// time in `tz`.
pub fn localize<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.with_timezone(tz));
    }
    let naive = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
    tz.from_local_datetime(&naive).earliest()
}

/// `2024-01-01 • 10:00-10:59`
pub fn hour_label<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    let hour = dt.hour();
    format!(
        "{} • {:02}:00-{:02}:59",
        dt.format("%Y-%m-%d"),
        hour,
        hour
    )
}

/// Bucket captures by hour in the given display zone
pub fn bucket_by_hour(items: &[CaptureImage], zone: DisplayZone) -> Vec<HourBucket> {
    match zone {
        DisplayZone::Local => bucket_by_hour_in(items, &Local),
        DisplayZone::Utc => bucket_by_hour_in(items, &Utc),
    }
}

/// Bucket captures by hour in an arbitrary time zone
pub fn bucket_by_hour_in<Tz: TimeZone>(items: &[CaptureImage], tz: &Tz) -> Vec<HourBucket>
where
    Tz::Offset: fmt::Display,
{
    let mut buckets: Vec<HourBucket> = Vec::new();

    for image in items {
        let local = localize(&image.timestamp, tz);
        let key = local.as_ref().map(HourKey::from_datetime);

        match buckets.last_mut() {
            Some(last) if last.key == key => last.items.push(image.clone()),
            _ => {
                let label = local
                    .as_ref()
                    .map(hour_label)
                    .unwrap_or_else(|| UNKNOWN_TIME_LABEL.to_string());
                buckets.push(HourBucket {
                    key,
                    label,
                    items: vec![image.clone()],
                });
            }
        }
    }

    buckets
}
