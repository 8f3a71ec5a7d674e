//! Axum-based HTTP gateway: thin transport around the responder core.

use axum::{
    extract::{Json, State},
    routing::{get, post},
    Router,
};
use foreman_core::{CoreConfig, KnowledgeBase, Responder};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[foreman-gateway] .env not loaded: {} (using system environment)", e);
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(CoreConfig::load().expect("load CoreConfig"));
    // Table invariants are checked once here; a malformed table is a startup
    // failure, never a per-request error.
    let knowledge = KnowledgeBase::builtin().expect("validate knowledge tables");
    let responder = Arc::new(Responder::new(knowledge));

    let app = build_app(AppState {
        config: Arc::clone(&config),
        responder,
    });

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("{} listening on {}", config.app_name, addr);
    axum::serve(
        tokio::net::TcpListener::bind(addr).await.unwrap(),
        app,
    )
    .await
    .unwrap();
}

fn build_app(state: AppState) -> Router {
    // The gateway is called from arbitrary frontend origins; the API carries
    // no credentials, so the policy is fully permissive.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/v1/status", get(status))
        .route("/chat", post(chat))
        .with_state(state)
        .layer(cors)
}

#[derive(Clone)]
struct AppState {
    config: Arc<CoreConfig>,
    responder: Arc<Responder>,
}

/// GET / – liveness check for the frontend and scripts.
async fn root() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "message": "Construction assistant backend running ✅" }))
}

/// GET /v1/status – app identity and knowledge table sizes.
async fn status(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    let knowledge = state.responder.knowledge();
    axum::Json(serde_json::json!({
        "app_name": state.config.app_name,
        "port": state.config.port,
        "topics": knowledge.entry_count(),
        "synonym_groups": knowledge.synonym_group_count(),
    }))
}

#[derive(serde::Deserialize)]
struct ChatRequest {
    query: String,
}

/// POST /chat – the single query endpoint: free text in, one answer out.
async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> axum::Json<serde_json::Value> {
    tracing::info!("Chat request received: {} chars", req.query.len());
    let answer = state.responder.answer(&req.query);
    axum::Json(serde_json::json!({ "answer": answer }))
}
