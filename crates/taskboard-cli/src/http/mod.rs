//! REST API server.
//!
//! Serves the JSON API under `/api` and, when a static directory is
//! configured, the browser front end for every other path. Each request
//! goes through [`Tracker`], which opens its own database handle.

use std::{path::Path, sync::Arc, time::Instant};

use anyhow::{Context, Result};
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post},
    Router,
};
use log::{info, warn};
use taskboard_core::Tracker;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::config::ServerConfig;

pub mod errors;
pub mod extract;
pub mod handlers;

/// Shared state accessible from the handlers.
#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Tracker>,
}

/// Builds the router with all API routes and the optional static fallback.
pub fn router(tracker: Tracker, static_dir: Option<&Path>) -> Router {
    let state = AppState {
        tracker: Arc::new(tracker),
    };

    let app = Router::new()
        .route("/api/projects", get(handlers::list_projects))
        .route("/api/project", post(handlers::create_project))
        .route(
            "/api/project/{id}",
            get(handlers::get_project)
                .put(handlers::update_project)
                .delete(handlers::delete_project),
        )
        .route("/api/project/{id}/tasks", get(handlers::project_tasks))
        .route("/api/task", post(handlers::create_task))
        .route(
            "/api/task/{id}",
            get(handlers::get_task)
                .put(handlers::update_task)
                .delete(handlers::delete_task),
        )
        .route("/api/task/{id}/start", post(handlers::start_task))
        .route("/api/task/{id}/finish", post(handlers::finish_task))
        .route(
            "/api/task/{id}/resources",
            get(handlers::task_resources).post(handlers::link_resource),
        )
        .route(
            "/api/task/{id}/resource/{resource_id}",
            delete(handlers::unlink_resource),
        )
        .route(
            "/api/resources",
            get(handlers::list_resources).post(handlers::create_resource),
        )
        .route("/api/resource/{id}", delete(handlers::delete_resource))
        .route("/api/jobs", get(handlers::job_board))
        .with_state(state);

    let app = match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app,
    };

    app.layer(middleware::from_fn(log_request))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "{method} {path} {} {:?}",
        response.status().as_u16(),
        started.elapsed()
    );
    response
}

/// Binds the configured address and serves until Ctrl-C or SIGTERM.
pub async fn serve(tracker: Tracker, config: &ServerConfig) -> Result<()> {
    if let Some(dir) = &config.static_dir {
        if !dir.is_dir() {
            warn!("Static directory {} does not exist", dir.display());
        }
    }

    let app = router(tracker, config.static_dir.as_deref());
    let address = config.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(
        "Listening on http://{}",
        listener.local_addr().context("Failed to read local address")?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, StatusCode},
    };
    use serde_json::{json, Value};
    use taskboard_core::TrackerBuilder;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use super::*;

    async fn make_app(static_dir: Option<&Path>) -> (TempDir, Router) {
        let temp_dir = TempDir::new().unwrap();
        let tracker = TrackerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("api.db")))
            .build()
            .await
            .unwrap();
        (temp_dir, router(tracker, static_dir))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = axum::http::Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1_000_000)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_empty_overview() {
        let (_dir, app) = make_app(None).await;
        let (status, body) = send(&app, Method::GET, "/api/projects", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_create_project_returns_created() {
        let (_dir, app) = make_app(None).await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/project",
            Some(json!({"Description": "Kitchen", "Bucket": "House", "Notes": null})),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["ProjectID"], 1);
        assert_eq!(body["Bucket"], "House");
        assert_eq!(body["tasks"], json!([]));

        let (status, body) = send(&app, Method::GET, "/api/projects", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["possible_date"], "All tasks completed");
    }

    #[tokio::test]
    async fn test_missing_project_is_404() {
        let (_dir, app) = make_app(None).await;
        let (status, body) = send(&app, Method::GET, "/api/project/99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn test_duplicate_resource_is_409() {
        let (_dir, app) = make_app(None).await;
        let payload = json!({"Description": "Saw"});

        let (status, body) = send(&app, Method::POST, "/api/resources", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ResourceID"], 1);

        let (status, body) = send(&app, Method::POST, "/api/resources", Some(payload)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "Resource already exists");
    }

    #[tokio::test]
    async fn test_task_creation_failure_is_500_and_rolled_back() {
        let (_dir, app) = make_app(None).await;
        send(&app, Method::POST, "/api/project", Some(json!({"Description": "Deck"}))).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/task",
            Some(json!({"ProjectID": 1, "Description": "Frame", "Duration": 2, "ResourceIDs": [42]})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
        let message = body["message"].as_str().unwrap();
        assert!(message.contains("Failed to link resource 42"));
        assert!(message.contains("FOREIGN KEY constraint failed"));

        let (_, tasks) = send(&app, Method::GET, "/api/project/1/tasks", None).await;
        assert_eq!(tasks, json!([]));
    }

    #[tokio::test]
    async fn test_undecodable_requests_are_json_400() {
        let (_dir, app) = make_app(None).await;
        send(&app, Method::POST, "/api/project", Some(json!({"Description": "Deck"}))).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/task",
            Some(json!({"ProjectID": 1, "Description": "Cut", "Duration": 1.5})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert!(body["message"].as_str().unwrap().contains("Duration"));

        let (status, body) = send(&app, Method::GET, "/api/task/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");

        let (_, tasks) = send(&app, Method::GET, "/api/project/1/tasks", None).await;
        assert_eq!(tasks, json!([]));
    }

    #[tokio::test]
    async fn test_invalid_task_is_400() {
        let (_dir, app) = make_app(None).await;
        send(&app, Method::POST, "/api/project", Some(json!({"Description": "Deck"}))).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/task",
            Some(json!({"ProjectID": 1, "Description": "", "Duration": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("Description"));
    }

    #[tokio::test]
    async fn test_task_lifecycle_and_job_board() {
        let (_dir, app) = make_app(None).await;
        send(&app, Method::POST, "/api/project", Some(json!({"Description": "Deck"}))).await;
        send(&app, Method::POST, "/api/resources", Some(json!({"Description": "Saw"}))).await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/task",
            Some(json!({"ProjectID": 1, "Description": "Cut", "Duration": 1, "ResourceIDs": [1]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "success", "TaskID": 1}));

        let (_, body) = send(&app, Method::GET, "/api/jobs", None).await;
        assert_eq!(body[0]["Description"], "Saw");
        assert_eq!(body[0]["tasks"][0]["status"], "Waiting");
        assert_eq!(body[0]["tasks"][0]["ProjectDescription"], "Deck");

        let (status, body) = send(&app, Method::POST, "/api/task/1/start", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["started_date"].is_string());

        let (_, body) = send(&app, Method::GET, "/api/projects", None).await;
        assert_eq!(body[0]["tasks"][0]["status"], "Active");

        let (_, body) = send(&app, Method::POST, "/api/task/1/finish", None).await;
        assert!(body["completed_date"].is_string());

        let (_, body) = send(&app, Method::GET, "/api/jobs", None).await;
        assert_eq!(body[0]["tasks"], json!([]));

        let (_, body) = send(&app, Method::GET, "/api/task/1", None).await;
        assert!(body["Completed"].is_string());
    }

    #[tokio::test]
    async fn test_link_and_unlink_resource() {
        let (_dir, app) = make_app(None).await;
        send(&app, Method::POST, "/api/project", Some(json!({"Description": "Deck"}))).await;
        send(&app, Method::POST, "/api/resources", Some(json!({"Description": "Saw"}))).await;
        send(
            &app,
            Method::POST,
            "/api/task",
            Some(json!({"ProjectID": 1, "Description": "Cut"})),
        )
        .await;

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/task/1/resources",
            Some(json!({"ResourceID": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/task/1/resources",
            Some(json!({"ResourceID": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (_, body) = send(&app, Method::GET, "/api/task/1/resources", None).await;
        assert_eq!(body, json!([{"ResourceID": 1, "Description": "Saw"}]));

        let (status, _) = send(&app, Method::DELETE, "/api/task/1/resource/1", None).await;
        assert_eq!(status, StatusCode::OK);
        let (_, body) = send(&app, Method::GET, "/api/task/1/resources", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_static_fallback_serves_index() {
        let web = TempDir::new().unwrap();
        std::fs::write(web.path().join("index.html"), "<h1>Board</h1>").unwrap();
        let (_dir, app) = make_app(Some(web.path())).await;

        let request = axum::http::Request::builder()
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 10_000)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"<h1>Board</h1>");
    }

    #[tokio::test]
    async fn test_unknown_path_without_static_dir_is_404() {
        let (_dir, app) = make_app(None).await;
        let (status, _) = send(&app, Method::GET, "/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
