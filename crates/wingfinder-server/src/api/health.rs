//! GET /api/v1/health — liveness plus a count of configured providers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    version: &'static str,
    configured_providers: usize,
}

pub(in crate::api) async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let data = HealthData {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        configured_providers: state.config.credentials.configured_count(),
    };
    (
        StatusCode::OK,
        Json(ApiResponse {
            data,
            meta: ResponseMeta::new(req_id.0),
        }),
    )
}
