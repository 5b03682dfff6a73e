#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use specdock::{Fetch, FetchFailure, LifecycleEvent, Notify};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory fetch capability: URL to canned body, 404 for anything else.
#[derive(Default)]
pub struct MemoryFetcher {
    responses: HashMap<String, String>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), body.to_string());
        self
    }
}

#[async_trait]
impl Fetch for MemoryFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchFailure> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| FetchFailure::new(Some(404), format!("GET {} returned 404", url)))
    }
}

/// Records lifecycle events in arrival order.
#[derive(Default)]
pub struct RecordingNotifier {
    pub events: Mutex<Vec<LifecycleEvent>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Notify for RecordingNotifier {
    fn notify(&self, event: LifecycleEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Smallest document the built-in 2.0 ruleset accepts.
pub fn minimal_doc() -> Value {
    json!({
        "swagger": "2.0",
        "info": {"title": "Petstore", "version": "1.0.0"},
        "paths": {}
    })
}

/// A document with tagged and untagged operations across several routes.
pub fn tagged_doc() -> Value {
    json!({
        "swagger": "2.0",
        "info": {"title": "Petstore", "version": "1.0.0"},
        "paths": {
            "/pets": {
                "get": {"tags": ["pets"], "operationId": "list_pets"},
                "post": {"tags": ["pets", "admin"], "operationId": "add_pet"}
            },
            "/health": {
                "get": {"operationId": "health"}
            }
        }
    })
}
