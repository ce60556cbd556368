//! BDD step definitions for the capture trigger

use cucumber::{given, then, when};

use petcam_viewer::ViewerEvent;

use crate::world::ViewerWorld;

#[given("a capture is already in progress")]
fn capture_in_progress(world: &mut ViewerWorld) {
    world.viewer().dispatch(ViewerEvent::CaptureStarted);
}

#[when("the user triggers a capture")]
async fn trigger_capture(world: &mut ViewerWorld) {
    world.state_before = Some(world.state());
    let started = world.viewer().trigger_capture().await;
    world.capture_started = Some(started);
}

#[then("the capture was started")]
fn capture_was_started(world: &mut ViewerWorld) {
    assert_eq!(world.capture_started, Some(true));
}

#[then("the capture was not started")]
fn capture_not_started(world: &mut ViewerWorld) {
    assert_eq!(world.capture_started, Some(false));
}

#[then("the viewer is not capturing")]
fn not_capturing(world: &mut ViewerWorld) {
    assert!(!world.state().capturing);
}

#[then("the viewer state is unchanged")]
fn state_unchanged(world: &mut ViewerWorld) {
    let before = world.state_before.clone().expect("state recorded before capture");
    assert_eq!(world.state(), before);
}
