//! Implementation of REST endpoints.

use crate::sim::courier::CourierSnapshot;
use crate::sim::fleet::Fleet;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// JSON body returned alongside non-2xx statuses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// human readable reason for the failure
    pub detail: String,
}

/// Errors the REST handlers surface to clients
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ApiError {
    /// No courier with the requested id
    CourierNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::CourierNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    detail: String::from("Courier not found"),
                }),
            )
                .into_response(),
        }
    }
}

/// Returns a snapshot of every courier in the fleet, in ID order.
pub async fn list_couriers(State(fleet): State<Arc<Fleet>>) -> Json<Vec<CourierSnapshot>> {
    rest_debug!("(list_couriers) entry.");
    Json(fleet.snapshots().await)
}

/// Returns the snapshot of a single courier, or 404 when the ID does
/// not match any courier in the fleet.
pub async fn get_courier(
    State(fleet): State<Arc<Fleet>>,
    Path(id): Path<u32>,
) -> Result<Json<CourierSnapshot>, ApiError> {
    rest_debug!("(get_courier) entry [{}].", id);
    match fleet.snapshot(id).await {
        Some(snapshot) => Ok(Json(snapshot)),
        None => {
            rest_warn!("(get_courier) no courier with id [{}].", id);
            Err(ApiError::CourierNotFound)
        }
    }
}
