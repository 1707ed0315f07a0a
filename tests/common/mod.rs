use std::net::SocketAddr;
use std::path::PathBuf;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;

use contact_intake::config::{Config, ValidationPolicy};

/// A running test server writing to its own temporary store file.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub data_file: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit a JSON payload, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/submit"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit form-urlencoded data, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/submit"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Make a GET request, return (body, status).
    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Records currently on disk, read without going through the server.
    pub fn stored(&self) -> Vec<Value> {
        let content = std::fs::read_to_string(&self.data_file).expect("store file missing");
        serde_json::from_str(&content).expect("store file is not a JSON array")
    }
}

/// Spawn a test app with the debug listing enabled and standard validation.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Spawn a test app after letting the caller adjust its configuration.
pub async fn spawn_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let data_file = dir.path().join("submissions.json");

    let mut config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        data_file: data_file.clone(),
        max_body_size: 64 * 1024,
        log_level: "warn".to_string(),
        validation: ValidationPolicy::Standard,
        expose_submissions: true,
        static_dir: None,
    };
    configure(&mut config);

    let (app, state) = contact_intake::build_app(config);
    state
        .store
        .ensure_exists()
        .await
        .expect("Failed to create store file");

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        data_file,
        _dir: dir,
    }
}
