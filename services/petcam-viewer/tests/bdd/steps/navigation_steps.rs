//! BDD step definitions for hour navigation and selection

use cucumber::{then, when};

use crate::world::ViewerWorld;

#[when("the user goes to the previous hour")]
fn prev_hour(world: &mut ViewerWorld) {
    world.viewer().go_prev_hour();
}

#[when("the user goes to the next hour")]
fn next_hour(world: &mut ViewerWorld) {
    world.viewer().go_next_hour();
}

#[when(expr = "the user goes to the next hour {int} times")]
fn next_hour_times(world: &mut ViewerWorld, times: usize) {
    for _ in 0..times {
        world.viewer().go_next_hour();
    }
}

#[when(expr = "the user selects capture {int} of the current hour")]
fn select_capture(world: &mut ViewerWorld, position: usize) {
    let state = world.state();
    let image = state
        .current_bucket()
        .and_then(|b| b.items.get(position - 1))
        .cloned()
        .expect("capture at position");
    world.viewer().select(image);
}

#[when("the user goes back")]
fn go_back(world: &mut ViewerWorld) {
    world.viewer().back();
}

#[then(expr = "the current bucket index is {int}")]
fn bucket_index_is(world: &mut ViewerWorld, index: usize) {
    assert_eq!(world.state().bucket_index, index);
}

#[then(expr = "capture {int} is selected")]
fn capture_selected(world: &mut ViewerWorld, id: u64) {
    assert_eq!(world.state().selected.map(|s| s.id), Some(id));
}

#[then("no capture is selected")]
fn none_selected(world: &mut ViewerWorld) {
    assert_eq!(world.state().selected, None);
}

#[then("there is no previous hour")]
fn no_prev(world: &mut ViewerWorld) {
    assert!(!world.state().has_prev());
}

#[then("there is no next hour")]
fn no_next(world: &mut ViewerWorld) {
    assert!(!world.state().has_next());
}
