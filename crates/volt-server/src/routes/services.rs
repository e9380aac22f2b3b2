//! Service-provider directory endpoints.
//!
//! Reads are public; mutations require an admin bearer token.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use volt_commerce::services::{ServicePatch, ServiceProvider};
use volt_store::Updated;

use crate::error::ApiError;
use crate::extract::AdminUser;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(delete))
}

/// GET /api/services
async fn list(State(state): State<AppState>) -> Result<Json<Vec<ServiceProvider>>, ApiError> {
    let services = state
        .store
        .collection::<ServiceProvider>()
        .find_all()
        .await
        .map_err(|e| ApiError::internal("Server error", e))?;
    Ok(Json(services))
}

/// GET /api/services/{id}
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ServiceProvider>, ApiError> {
    state
        .store
        .collection::<ServiceProvider>()
        .find_by_id(&id)
        .await
        .map_err(|e| ApiError::internal("Server error", e))?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Service not found".to_string()))
}

/// Creation payload. Accepts the admin form's legacy `specialty`/`contact`
/// field names alongside the canonical ones.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewService {
    name: Option<String>,
    #[serde(alias = "specialty")]
    expertise: Option<String>,
    description: Option<String>,
    location: Option<String>,
    #[serde(alias = "contact")]
    contact_email: Option<String>,
    phone: Option<String>,
    image_url: Option<String>,
    available: Option<bool>,
}

/// POST /api/services (admin)
async fn create(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Json(body): Json<NewService>,
) -> Result<(StatusCode, Json<ServiceProvider>), ApiError> {
    let (Some(name), Some(expertise), Some(contact_email)) = (
        body.name.filter(|s| !s.is_empty()),
        body.expertise.filter(|s| !s.is_empty()),
        body.contact_email.filter(|s| !s.is_empty()),
    ) else {
        return Err(ApiError::BadRequest("Failed to create service".to_string()));
    };

    let mut service = ServiceProvider::new(name, expertise, contact_email);
    if let Some(description) = body.description {
        service = service.with_description(description);
    }
    if let Some(location) = body.location {
        service = service.with_location(location);
    }
    if let Some(phone) = body.phone {
        service = service.with_phone(phone);
    }
    if let Some(image_url) = body.image_url {
        service = service.with_image_url(image_url);
    }
    if let Some(available) = body.available {
        service = service.with_available(available);
    }

    state
        .store
        .collection::<ServiceProvider>()
        .save(&service)
        .await
        .map_err(|e| ApiError::internal("Failed to create service", e))?;

    Ok((StatusCode::CREATED, Json(service)))
}

/// PUT /api/services/{id} (admin)
async fn update(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<String>,
    Json(patch): Json<ServicePatch>,
) -> Result<Json<ServiceProvider>, ApiError> {
    let outcome = state
        .store
        .collection::<ServiceProvider>()
        .update(&id, |service| {
            patch.apply(service);
            true
        })
        .await
        .map_err(|e| ApiError::internal("Failed to update service", e))?;

    match outcome {
        Updated::Applied(service) => Ok(Json(service)),
        Updated::Rejected(_) | Updated::Missing => {
            Err(ApiError::NotFound("Service not found".to_string()))
        }
    }
}

/// DELETE /api/services/{id} (admin)
async fn delete(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let removed = state
        .store
        .collection::<ServiceProvider>()
        .delete(&id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete service", e))?;

    if !removed {
        return Err(ApiError::NotFound("Service not found".to_string()));
    }

    Ok(Json(json!({ "message": "Service deleted successfully" })))
}
