//! Viewer state and the transitions that update it
//!
//! Every change to [`ViewerState`] goes through [`ViewerState::apply`], which
//! consumes the previous state and an event and returns the next state. The
//! controller in [`crate::viewer`] is the only caller in production code.

use crate::bucket::{bucket_by_hour, DisplayZone, HourBucket};
use crate::model::CaptureImage;

/// Named transitions of the viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    /// A `load` call with sequence number `seq` has been issued
    LoadStarted { seq: u64 },
    /// Both fetches of load `seq` settled. `list` carries the surfaced error
    /// message on failure.
    LoadFinished {
        seq: u64,
        latest: Option<CaptureImage>,
        list: Result<Vec<CaptureImage>, String>,
    },
    CaptureStarted,
    CaptureFinished { error: Option<String> },
    Select(CaptureImage),
    Back,
    PrevHour,
    NextHour,
}

/// Everything the presentation layer needs to draw the viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerState {
    pub latest: Option<CaptureImage>,
    pub list: Vec<CaptureImage>,
    pub buckets: Vec<HourBucket>,
    /// Index into `buckets`; 0 when there are none
    pub bucket_index: usize,
    pub selected: Option<CaptureImage>,
    pub loading: bool,
    pub error: Option<String>,
    pub capturing: bool,
    /// Sequence number of the most recently issued load
    pub load_seq: u64,
    pub zone: DisplayZone,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(DisplayZone::default())
    }
}

impl ViewerState {
    /// Initial state; `loading` is set because the first load starts right away
    pub fn new(zone: DisplayZone) -> Self {
        Self {
            latest: None,
            list: Vec::new(),
            buckets: Vec::new(),
            bucket_index: 0,
            selected: None,
            loading: true,
            error: None,
            capturing: false,
            load_seq: 0,
            zone,
        }
    }

    /// Apply one event and return the resulting state
    pub fn apply(mut self, event: ViewerEvent) -> Self {
        match event {
            ViewerEvent::LoadStarted { seq } => {
                // Sequence numbers only move forward
                if seq <= self.load_seq {
                    tracing::debug!(
                        "Ignoring start of load {} after load {}",
                        seq,
                        self.load_seq
                    );
                    return self;
                }
                self.load_seq = seq;
                self.loading = true;
                self.error = None;
                self.selected = None;
            }
            ViewerEvent::LoadFinished { seq, latest, list } => {
                if seq != self.load_seq {
                    tracing::debug!(
                        "Discarding result of superseded load {} (current {})",
                        seq,
                        self.load_seq
                    );
                    return self;
                }
                self.loading = false;
                self.latest = latest;
                match list {
                    Ok(items) => self.replace_list(items),
                    Err(message) => {
                        self.replace_list(Vec::new());
                        self.error = Some(message);
                    }
                }
            }
            ViewerEvent::CaptureStarted => {
                if self.capturing {
                    return self;
                }
                self.capturing = true;
                self.error = None;
            }
            ViewerEvent::CaptureFinished { error } => {
                self.capturing = false;
                if error.is_some() {
                    self.error = error;
                }
            }
            ViewerEvent::Select(image) => {
                self.selected = Some(image);
            }
            ViewerEvent::Back => {
                self.selected = None;
            }
            ViewerEvent::PrevHour => {
                self.bucket_index = self.bucket_index.saturating_sub(1);
                self.selected = None;
            }
            ViewerEvent::NextHour => {
                if let Some(last) = self.buckets.len().checked_sub(1) {
                    self.bucket_index = (self.bucket_index + 1).min(last);
                }
                self.selected = None;
            }
        }
        self
    }

    fn replace_list(&mut self, items: Vec<CaptureImage>) {
        self.buckets = bucket_by_hour(&items, self.zone);
        self.list = items;
        self.bucket_index = 0;
        self.selected = None;
    }

    pub fn current_bucket(&self) -> Option<&HourBucket> {
        self.buckets.get(self.bucket_index)
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn has_prev(&self) -> bool {
        self.bucket_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.bucket_index + 1 < self.buckets.len()
    }

    /// True while a single capture replaces the grid
    pub fn is_detail_view(&self) -> bool {
        self.selected.is_some()
    }
}
