//! Grillage mesh HTTP server

use axum::{
    extract::Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use grillage_mesh::prelude::*;

const DEFAULT_PORT: u16 = 8086;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct MeshResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<MeshSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mesh: Option<GrillageMesh>,
}

#[derive(Debug, Deserialize)]
struct ScriptRequest {
    #[serde(flatten)]
    project: ProjectFile,
    #[serde(default)]
    strict: bool,
}

#[derive(Debug, Serialize)]
struct ScriptResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    script: Option<String>,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn mesh(Json(config): Json<MeshConfig>) -> impl IntoResponse {
    match GrillageMesh::generate(&config) {
        Ok(mesh) => (
            StatusCode::OK,
            Json(MeshResponse {
                success: true,
                error: None,
                summary: Some(mesh.summary()),
                mesh: Some(mesh),
            }),
        ),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(MeshResponse {
                success: false,
                error: Some(e.to_string()),
                summary: None,
                mesh: None,
            }),
        ),
    }
}

async fn script(Json(request): Json<ScriptRequest>) -> impl IntoResponse {
    match render_script(&request) {
        Ok(script) => (
            StatusCode::OK,
            Json(ScriptResponse {
                success: true,
                error: None,
                script: Some(script),
            }),
        ),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ScriptResponse {
                success: false,
                error: Some(e.to_string()),
                script: None,
            }),
        ),
    }
}

fn render_script(request: &ScriptRequest) -> MeshResult<String> {
    let project = &request.project;
    let mesh = GrillageMesh::generate(&project.mesh)?;
    let mut script = OpenSeesScript::new(&mesh, &project.sections);
    if let Some(name) = &project.name {
        script = script.with_name(name.clone());
    }
    if request.strict {
        script = script.strict();
    }
    script.render()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/mesh", post(mesh))
        .route("/script", post(script))
        .layer(cors);

    let port = match std::env::var("GRILLAGE_PORT") {
        Ok(value) => value.parse()?,
        Err(_) => DEFAULT_PORT,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("Grillage mesh server listening on http://{}", addr);
    println!("  Health check: GET  /health");
    println!("  Mesh:         POST /mesh");
    println!("  Script:       POST /script");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
