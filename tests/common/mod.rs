//! Shared harness: starts the real router on an ephemeral port, backed by a
//! data file in a temporary directory.

#![allow(dead_code)]

use movie_watchlist::{transport, JsonFileStore, MovieStore, WatchlistService};
use serde_json::{json, Value as JsonValue};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub data_file: PathBuf,
    _dir: TempDir,
    server: tokio::task::JoinHandle<()>,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server.abort();
    }
}

impl TestApp {
    pub async fn spawn() -> TestApp {
        Self::spawn_with(None).await
    }

    pub async fn spawn_with(frontend_dir: Option<&Path>) -> TestApp {
        let dir = tempfile::tempdir().expect("temp dir");
        let data_file = dir.path().join("movies.json");

        let store: Arc<dyn MovieStore> = Arc::new(JsonFileStore::new(&data_file));
        let app_state = transport::http::AppState {
            service: Arc::new(WatchlistService::new(store)),
        };
        let router = transport::http::create_router(app_state, frontend_dir);

        // Bind to an ephemeral port to avoid conflicts between tests.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let port = listener.local_addr().expect("local addr").port();
        let server = tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        TestApp {
            base_url: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
            data_file,
            _dir: dir,
            server,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn create(&self, body: JsonValue) -> reqwest::Response {
        self.client
            .post(self.url("/movies"))
            .json(&body)
            .send()
            .await
            .expect("POST /movies")
    }

    /// Creates a valid movie and returns its JSON.
    pub async fn create_ok(&self, title: &str, genre: &str) -> JsonValue {
        let resp = self
            .create(json!({ "title": title, "genre": genre, "year": 2000 }))
            .await;
        assert_eq!(resp.status(), 201, "create {title}");
        resp.json().await.expect("movie json")
    }

    pub async fn get_json(&self, path: &str) -> (u16, JsonValue) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("GET");
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap_or(JsonValue::Null))
    }

    /// The data file as currently persisted.
    pub fn stored(&self) -> Vec<JsonValue> {
        let raw = std::fs::read_to_string(&self.data_file).expect("data file");
        serde_json::from_str(&raw).expect("data file json")
    }
}
