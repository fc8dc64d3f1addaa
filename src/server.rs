use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::error::ValidatorError;
use crate::types::{ValidationReport, ValidationRequest};
use crate::validator::Validator;

pub type AppState = Arc<Validator>;

pub async fn validate_startup(
    State(validator): State<AppState>,
    Json(req): Json<ValidationRequest>,
) -> Result<Json<ValidationReport>, ValidatorError> {
    validator.validate_request(&req).await.map(Json)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn app_router(validator: Validator) -> Router {
    Router::new()
        .route("/validate-startup", post(validate_startup))
        .route("/health", get(health))
        .with_state(Arc::new(validator))
}

/// CORS for the listed origins; unparseable entries are skipped.
///
/// Credentials are allowed for an explicit origin list. A `*` entry opens the
/// layer to any origin, which the CORS rules only permit without credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    if origins.iter().any(|o| o.trim() == "*") {
        if origins.len() > 1 {
            warn!("wildcard CORS origin given, other origins are redundant");
        }
        return base.allow_origin(AllowOrigin::any());
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o.trim()) {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(allowed)).allow_credentials(true)
}

pub async fn run_server(validator: Validator, addr: std::net::SocketAddr, origins: &[String]) -> anyhow::Result<()> {
    let app = app_router(validator).layer(cors_layer(origins));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, "startup validator listening");
    axum::serve(listener, app).await?;
    Ok(())
}
