//! HTTP client double that answers from a route table and records requests

use std::sync::Mutex;

use async_trait::async_trait;
use petcam_viewer::io::{HttpClient, HttpResponse};
use petcam_viewer::ViewerError;

#[derive(Debug, Clone)]
struct Route {
    method: &'static str,
    fragment: String,
    reply: Result<HttpResponse, String>,
}

#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedHttpClient {
    /// Answer requests whose URL contains `fragment` with a fixed response.
    /// A later call for the same method and fragment replaces the earlier one.
    pub fn respond(&self, method: &'static str, fragment: &str, status: u16, body: String) {
        self.set_route(method, fragment, Ok(HttpResponse { status, body }));
    }

    /// Fail matching requests at the transport level
    pub fn fail(&self, method: &'static str, fragment: &str, message: &str) {
        self.set_route(method, fragment, Err(message.to_string()));
    }

    fn set_route(&self, method: &'static str, fragment: &str, reply: Result<HttpResponse, String>) {
        let mut routes = self.routes.lock().unwrap();
        routes.retain(|r| !(r.method == method && r.fragment == fragment));
        routes.push(Route {
            method,
            fragment: fragment.to_string(),
            reply,
        });
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn answer(&self, method: &'static str, url: &str) -> petcam_viewer::Result<HttpResponse> {
        self.requests
            .lock()
            .unwrap()
            .push(format!("{} {}", method, url));

        let routes = self.routes.lock().unwrap();
        let route = routes
            .iter()
            .find(|r| r.method == method && url.contains(&r.fragment))
            .ok_or_else(|| ViewerError::Http(format!("no route for {} {}", method, url)))?;

        route.reply.clone().map_err(ViewerError::Http)
    }
}

#[async_trait]
impl HttpClient for ScriptedHttpClient {
    async fn get(&self, url: &str) -> petcam_viewer::Result<HttpResponse> {
        self.answer("GET", url)
    }

    async fn post(&self, url: &str) -> petcam_viewer::Result<HttpResponse> {
        self.answer("POST", url)
    }
}
