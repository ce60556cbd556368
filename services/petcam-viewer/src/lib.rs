//! PetCam viewer - browse captures from a PetCam capture service
//!
//! Shows the most recent snapshot, pages through history one calendar hour at
//! a time, and triggers new captures.

pub mod api;
pub mod bucket;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod render;
pub mod state;
pub mod terminal;
pub mod viewer;

pub use config::{load_config, Config};
pub use error::{Result, ViewerError};
pub use state::{ViewerEvent, ViewerState};
pub use viewer::Viewer;

use std::sync::Arc;

use crate::io::ReqwestHttpClient;

/// What the binary was asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Interactive browser on stdin/stdout
    Browse,
    /// Load once and print the view
    Show,
    /// Trigger a capture and print the refreshed view
    Capture,
    /// Print metadata of a single capture
    Image(u64),
    /// Print the backend's capture settings
    Settings,
}

/// Run the viewer with the given configuration
pub async fn run(config: Config, action: Action) -> Result<()> {
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::default());
    let viewer = Arc::new(Viewer::new(&config, http));
    tracing::debug!("Running {:?} against {}", action, viewer.api().base_url());

    match action {
        Action::Browse => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            terminal::run_interactive(viewer, stdin).await?;
        }
        Action::Show => {
            viewer.load().await;
            let state = viewer.state();
            println!("{}", render::render(&state, viewer.api().base_url()));
            if let Some(error) = state.error {
                return Err(ViewerError::Load(error));
            }
        }
        Action::Capture => {
            viewer.trigger_capture().await;
            let state = viewer.state();
            println!("{}", render::render(&state, viewer.api().base_url()));
            if let Some(error) = state.error {
                return Err(ViewerError::Capture(error));
            }
        }
        Action::Image(id) => {
            let image = viewer.api().image(id).await?;
            println!("{}", render::render_image(&image, config.display_zone));
        }
        Action::Settings => {
            let settings = viewer.api().settings().await?;
            println!("{}", render::render_settings(&settings));
        }
    }

    Ok(())
}
