//! BDD step definitions for loading captures

use std::sync::Arc;

use cucumber::gherkin::Step;
use cucumber::{given, then, when};

use petcam_viewer::bucket::DisplayZone;
use petcam_viewer::model::{CaptureImage, ListResponse};
use petcam_viewer::{Config, Viewer};

use crate::world::ViewerWorld;

fn capture(id: u64, timestamp: &str) -> CaptureImage {
    CaptureImage {
        id,
        timestamp: timestamp.to_string(),
        filename: format!("{}.jpg", id),
        filesize: 4096,
        image_url: format!("http://cam/api/images/{}.jpg", id),
        thumbnail_url: format!("http://cam/api/thumbnails/{}.jpg", id),
        width: Some(1280),
        height: Some(720),
        note: None,
    }
}

#[given("a capture service with captures")]
fn service_with_captures(world: &mut ViewerWorld, step: &Step) {
    let table = step.table.as_ref().expect("captures table");
    world.captures = table
        .rows
        .iter()
        .skip(1)
        .map(|row| {
            let id = row[0].parse().expect("numeric id");
            capture(id, &row[1])
        })
        .collect();

    let list = ListResponse {
        items: world.captures.clone(),
        ..ListResponse::default()
    };
    world.http.respond(
        "GET",
        "/list?",
        200,
        serde_json::to_string(&list).unwrap(),
    );

    match world.captures.first() {
        Some(latest) => world
            .http
            .respond("GET", "/latest", 200, serde_json::to_string(latest).unwrap()),
        None => world.http.respond(
            "GET",
            "/latest",
            404,
            r#"{"message": "no_images"}"#.to_string(),
        ),
    }
}

#[given("a viewer showing times in UTC")]
fn viewer_in_utc(world: &mut ViewerWorld) {
    let config = Config {
        api_base: "http://cam/api".to_string(),
        display_zone: DisplayZone::Utc,
        ..Config::default()
    };
    let http = Arc::clone(&world.http);
    world.viewer = Some(Arc::new(Viewer::new(&config, http)));
}

#[given(expr = "the {word} endpoint responds with status {int}")]
fn endpoint_status(world: &mut ViewerWorld, endpoint: String, status: u16) {
    match endpoint.as_str() {
        "latest" => world
            .http
            .respond("GET", "/latest", status, "{}".to_string()),
        "list" => world
            .http
            .respond("GET", "/list?", status, "{}".to_string()),
        "capture" => world
            .http
            .respond("POST", "/capture", status, "{}".to_string()),
        other => panic!("unknown endpoint: {}", other),
    }
}

#[given("the capture service is unreachable")]
fn service_unreachable(world: &mut ViewerWorld) {
    for (method, fragment) in [("GET", "/latest"), ("GET", "/list?"), ("POST", "/capture")] {
        world.http.fail(method, fragment, "connection refused");
    }
}

#[given("the viewer has loaded")]
async fn viewer_has_loaded(world: &mut ViewerWorld) {
    world.viewer().load().await;
}

#[when("the viewer loads")]
async fn viewer_loads(world: &mut ViewerWorld) {
    world.viewer().load().await;
}

#[then(expr = "the latest capture shown is {int}")]
fn latest_is(world: &mut ViewerWorld, id: u64) {
    let state = world.state();
    assert_eq!(state.latest.map(|l| l.id), Some(id));
}

#[then("no latest capture is shown")]
fn no_latest(world: &mut ViewerWorld) {
    assert_eq!(world.state().latest, None);
}

#[then(expr = "there are {int} hour buckets")]
fn bucket_count(world: &mut ViewerWorld, count: usize) {
    assert_eq!(world.state().bucket_count(), count);
}

#[then(expr = "the current hour holds captures {string}")]
fn current_hour_holds(world: &mut ViewerWorld, ids: String) {
    let expected: Vec<u64> = ids
        .split(',')
        .map(|id| id.trim().parse().expect("numeric id"))
        .collect();
    let state = world.state();
    let actual: Vec<u64> = state
        .current_bucket()
        .map(|b| b.items.iter().map(|i| i.id).collect())
        .unwrap_or_default();
    assert_eq!(actual, expected);
}

#[then(expr = "the current hour is labelled {string}")]
fn current_label(world: &mut ViewerWorld, label: String) {
    let state = world.state();
    assert_eq!(state.current_bucket().map(|b| b.label.as_str()), Some(label.as_str()));
}

#[then("no error is shown")]
fn no_error(world: &mut ViewerWorld) {
    assert_eq!(world.state().error, None);
}

#[then(expr = "the error is {string}")]
fn error_is(world: &mut ViewerWorld, message: String) {
    assert_eq!(world.state().error, Some(message));
}

#[then(expr = "an error mentioning {string} is shown")]
fn error_mentions(world: &mut ViewerWorld, fragment: String) {
    let error = world.state().error.expect("an error");
    assert!(error.contains(&fragment), "{error}");
}

#[then("the viewer is not loading")]
fn not_loading(world: &mut ViewerWorld) {
    assert!(!world.state().loading);
}

#[then(expr = "the service received {int} request(s)")]
fn request_count(world: &mut ViewerWorld, count: usize) {
    assert_eq!(world.http.requests().len(), count, "{:?}", world.http.requests());
}

#[then(expr = "the service received {string}")]
fn request_received(world: &mut ViewerWorld, request: String) {
    let requests = world.http.requests();
    assert!(requests.contains(&request), "{:?}", requests);
}
