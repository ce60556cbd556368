//! Viewer controller: runs the named actions and publishes state changes

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::api::{ListQuery, PetcamApi};
use crate::config::Config;
use crate::io::HttpClient;
use crate::model::CaptureImage;
use crate::state::{ViewerEvent, ViewerState};

/// Owns the [`ViewerState`] and drives it from the capture service.
///
/// Presentation code reads snapshots with [`Viewer::state`] and is notified
/// of every transition through [`Viewer::subscribe`].
pub struct Viewer {
    api: PetcamApi,
    query: ListQuery,
    state: watch::Sender<ViewerState>,
    next_seq: AtomicU64,
}

impl std::fmt::Debug for Viewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewer")
            .field("api", &self.api)
            .field("query", &self.query)
            .finish()
    }
}

impl Viewer {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        Self {
            api: PetcamApi::new(&config.api_base, http),
            query: ListQuery::from_config(config),
            state: watch::Sender::new(ViewerState::new(config.display_zone)),
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn api(&self) -> &PetcamApi {
        &self.api
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ViewerState {
        self.state.borrow().clone()
    }

    /// Receiver that is marked changed after every transition
    pub fn subscribe(&self) -> watch::Receiver<ViewerState> {
        self.state.subscribe()
    }

    /// Apply a transition and notify subscribers
    pub fn dispatch(&self, event: ViewerEvent) {
        tracing::trace!("Dispatching {:?}", event);
        self.state.send_modify(|state| {
            let previous = std::mem::take(state);
            *state = previous.apply(event);
        });
    }

    /// Fetch the latest capture and the list concurrently and reconcile both.
    ///
    /// A failing `/latest` only clears the latest capture. A failing `/list`
    /// empties the list and becomes the visible error.
    pub async fn load(&self) {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.dispatch(ViewerEvent::LoadStarted { seq });
        tracing::debug!("Load {} started", seq);

        let (latest, list) = tokio::join!(self.api.latest(), self.api.list(&self.query));

        let latest = match latest {
            Ok(image) => Some(image),
            Err(e) => {
                tracing::debug!("No latest capture: {}", e);
                None
            }
        };

        let list = match list {
            Ok(response) => {
                tracing::debug!("Load {} received {} captures", seq, response.items.len());
                Ok(response.items)
            }
            Err(e) => {
                tracing::warn!("Failed to load capture list: {}", e);
                Err(e.to_string())
            }
        };

        self.dispatch(ViewerEvent::LoadFinished { seq, latest, list });
    }

    /// Ask the backend for a new capture, then reload.
    ///
    /// Returns `false` without touching the network or the state when a
    /// capture is already in flight.
    pub async fn trigger_capture(&self) -> bool {
        let started = self.state.send_if_modified(|state| {
            if state.capturing {
                return false;
            }
            let previous = std::mem::take(state);
            *state = previous.apply(ViewerEvent::CaptureStarted);
            true
        });

        if !started {
            tracing::debug!("Capture already in progress, ignoring request");
            return false;
        }

        tracing::info!("Triggering capture via {}", self.api.base_url());
        let error = match self.api.capture().await {
            Ok(()) => {
                self.load().await;
                None
            }
            Err(e) => {
                tracing::warn!("Capture failed: {}", e);
                Some(e.to_string())
            }
        };

        self.dispatch(ViewerEvent::CaptureFinished { error });
        true
    }

    pub fn go_prev_hour(&self) {
        self.dispatch(ViewerEvent::PrevHour);
    }

    pub fn go_next_hour(&self) {
        self.dispatch(ViewerEvent::NextHour);
    }

    pub fn select(&self, image: CaptureImage) {
        self.dispatch(ViewerEvent::Select(image));
    }

    pub fn back(&self) {
        self.dispatch(ViewerEvent::Back);
    }
}
