use anyhow::{Context, Result};
use axum::{Json, Router, routing::get};
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub const GREETING_MESSAGE: &str = "Hello from Simple Python App!";
pub const APP_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
    pub hostname: String,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProbeStatus {
    pub status: &'static str,
}

/// Host name of the machine at request time. Non UTF-8 names are converted lossily.
fn local_hostname() -> String {
    gethostname::gethostname().to_string_lossy().into_owned()
}

pub async fn greeting() -> Json<Greeting> {
    Json(Greeting {
        message: GREETING_MESSAGE,
        hostname: local_hostname(),
        version: APP_VERSION,
    })
}

pub async fn liveness_probe() -> Json<ProbeStatus> {
    Json(ProbeStatus { status: "healthy" })
}

pub async fn readiness_probe() -> Json<ProbeStatus> {
    Json(ProbeStatus { status: "ready" })
}

pub fn create_app() -> Router {
    Router::new()
        .route("/", get(greeting))
        .route("/health", get(liveness_probe))
        .route("/ready", get(readiness_probe))
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind webserver to {}", addr))
}
