use anyhow::Result;

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{debug, info};

use crate::delegate::AnalystChain;
use crate::engine;

use super::state::{ServerState, SharedChain};
use super::ServerConfig;

/// Served on GET / when no frontend directory is configured.
const EMBEDDED_PAGE: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Conductor</title></head>
<body>
<h1>Conductor</h1>
<textarea id="data" rows="4" cols="60" placeholder="C E G, allegro, pp, trumpet..."></textarea>
<br><button onclick="solve()">Analyze</button>
<pre id="output"></pre>
<script>
async function solve() {
  const r = await fetch('/solve', {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify({data: document.getElementById('data').value}),
  });
  document.getElementById('output').textContent = (await r.json()).output;
}
</script>
</body>
</html>
"#;

#[derive(Deserialize)]
struct SolveRequest {
    #[serde(default)]
    data: String,
}

#[derive(Serialize)]
struct SolveResponse {
    output: String,
}

async fn solve(State(chain): State<SharedChain>, Json(request): Json<SolveRequest>) -> Json<SolveResponse> {
    debug!(bytes = request.data.len(), "solve request");

    let output = if chain.is_empty() {
        engine::analyze(&request.data)
    } else {
        match chain.analyze(&request.data).await {
            Some(remote) => remote,
            None => engine::analyze(&request.data),
        }
    };

    Json(SolveResponse { output })
}

async fn home(State(config): State<ServerConfig>) -> Html<String> {
    if let Some(dir) = &config.frontend_dir_path {
        match tokio::fs::read_to_string(format!("{}/index.html", dir)).await {
            Ok(page) => return Html(page),
            Err(err) => debug!(dir = dir.as_str(), error = %err, "frontend page unreadable"),
        }
    }
    Html(EMBEDDED_PAGE.to_string())
}

fn make_app(config: ServerConfig, chain: AnalystChain) -> Router {
    let state = ServerState::new(config, chain);
    Router::new()
        .route("/", get(home))
        .route("/solve", post(solve))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

pub async fn run_server(config: ServerConfig, chain: AnalystChain) -> Result<()> {
    let port = config.port;
    let app = make_app(config, chain);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Listening on port {}", port);
    Ok(axum::serve(listener, app).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use std::time::Duration;
    use tower::ServiceExt;

    fn app() -> Router {
        make_app(
            ServerConfig::default(),
            AnalystChain::new(vec![], Duration::from_secs(1)),
        )
    }

    async fn solve_output(body: &str) -> String {
        let request = Request::builder()
            .method("POST")
            .uri("/solve")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value["output"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn solve_empty_data_returns_the_welcome_message() {
        assert_eq!(solve_output(r#"{"data": ""}"#).await, engine::WELCOME_MESSAGE);
    }

    #[tokio::test]
    async fn solve_defaults_a_missing_data_field() {
        assert_eq!(solve_output("{}").await, engine::WELCOME_MESSAGE);
    }

    #[tokio::test]
    async fn solve_uses_the_local_engine_without_providers() {
        let output = solve_output(r#"{"data": "C E G"}"#).await;
        assert!(output.contains("Chord: C major"));
    }

    #[tokio::test]
    async fn home_serves_html() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("<html"));
    }
}
