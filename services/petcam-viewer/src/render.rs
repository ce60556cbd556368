//! Plain-text rendering of viewer state

use crate::bucket::DisplayZone;
use crate::model::{CaptureImage, CaptureSettings};
use crate::state::ViewerState;

/// Render a full screen for the given state
pub fn render(state: &ViewerState, api_base: &str) -> String {
    let mut lines = vec![
        "PetCam - latest snapshot and browse history".to_string(),
        format!("Backend: {}", api_base),
    ];

    if state.capturing {
        lines.push("Capturing…".to_string());
    }
    if let Some(error) = &state.error {
        lines.push(format!("Error: {}", error));
    }
    if state.loading {
        lines.push("Loading…".to_string());
        return lines.join("\n");
    }

    lines.push(String::new());
    match &state.latest {
        Some(latest) => {
            lines.push(format!(
                "Latest — {}",
                state.zone.format_timestamp(&latest.timestamp)
            ));
            lines.push(format!("  {}", latest.image_url));
        }
        None => lines.push("No images yet.".to_string()),
    }

    lines.push(String::new());
    match &state.selected {
        Some(image) => render_detail(&mut lines, image, state.zone),
        None => render_grid(&mut lines, state),
    }

    lines.join("\n")
}

fn render_detail(lines: &mut Vec<String>, image: &CaptureImage, zone: DisplayZone) {
    lines.push(zone.format_timestamp(&image.timestamp));
    lines.extend(image_lines(image));
    lines.push("[b] Back to grid".to_string());
}

fn render_grid(lines: &mut Vec<String>, state: &ViewerState) {
    let Some(bucket) = state.current_bucket().filter(|b| !b.items.is_empty()) else {
        lines.push("No images to show.".to_string());
        return;
    };

    let prev = if state.has_prev() { "[p] ← Previous" } else { "    ← Previous" };
    let next = if state.has_next() { "Next → [n]" } else { "Next →    " };
    lines.push(format!(
        "{}  |  {} ({}/{})  |  {}",
        prev,
        bucket.label,
        state.bucket_index + 1,
        state.bucket_count(),
        next
    ));

    for (position, image) in bucket.items.iter().enumerate() {
        lines.push(format!(
            "{:>3}. {}  {}  {}",
            position + 1,
            state.zone.format_timestamp(&image.timestamp),
            image.filename,
            image.filesize_label()
        ));
    }
}

fn image_lines(image: &CaptureImage) -> Vec<String> {
    let mut lines = vec![format!("  {}", image.filename)];
    match image.dimensions_label() {
        Some(dimensions) => lines.push(format!("  {}  {}", dimensions, image.filesize_label())),
        None => lines.push(format!("  {}", image.filesize_label())),
    }
    if let Some(note) = &image.note {
        lines.push(format!("  Note: {}", note));
    }
    lines.push(format!("  {}", image.image_url));
    lines
}

/// Metadata block for a single capture, used by the `image` command
pub fn render_image(image: &CaptureImage, zone: DisplayZone) -> String {
    let mut lines = vec![format!(
        "#{} — {}",
        image.id,
        zone.format_timestamp(&image.timestamp)
    )];
    lines.extend(image_lines(image));
    lines.push(format!("  Thumbnail: {}", image.thumbnail_url));
    lines.join("\n")
}

pub fn render_settings(settings: &CaptureSettings) -> String {
    fn field<T: ToString>(value: &Option<T>) -> String {
        value
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string())
    }

    [
        format!(
            "Capture interval: {} s",
            field(&settings.capture_interval_seconds)
        ),
        format!("Resolution:       {}", field(&settings.image_resolution)),
        format!("JPEG quality:     {}", field(&settings.jpeg_quality)),
        format!("Retention:        {} days", field(&settings.retention_days)),
        format!("Max storage:      {} bytes", field(&settings.max_storage_bytes)),
    ]
    .join("\n")
}
