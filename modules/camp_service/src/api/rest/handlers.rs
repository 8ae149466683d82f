//! HTTP request handlers - thin layer that delegates to domain service
//!
//! Extractor rejections are folded into the route's own error body: a bad
//! JSON body is a validation error, a non-integer id is a missing resource.

use crate::domain::service::{ACTIVITY_RESOURCE, CAMPER_RESOURCE};
use crate::domain::Service;
use super::{
    dto::*,
    error::{map_domain_error, ApiError},
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

pub const WELCOME_MESSAGE: &str = "Welcome to the MOCK CHALLENGE!!!";

fn reject_body(rejection: JsonRejection) -> ApiError {
    tracing::debug!(reason = %rejection.body_text(), "request body rejected");
    ApiError::validation()
}

fn reject_id(resource: &str, rejection: PathRejection) -> ApiError {
    tracing::debug!(reason = %rejection.body_text(), "path id rejected");
    ApiError::not_found(resource)
}

pub async fn home() -> &'static str {
    WELCOME_MESSAGE
}

// ===== Camper Handlers =====

/// List all campers
pub async fn list_campers(service: Arc<Service>) -> Result<Json<Vec<CamperDto>>, ApiError> {
    let campers = service.list_campers().await.map_err(map_domain_error)?;

    Ok(Json(campers.into_iter().map(Into::into).collect()))
}

/// Create a camper
pub async fn create_camper(
    service: Arc<Service>,
    payload: Result<Json<CreateCamperRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperDto>), ApiError> {
    let Json(req) = payload.map_err(reject_body)?;

    let camper = service
        .create_camper(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(camper.into())))
}

/// Get a camper with the activities it signed up for
pub async fn get_camper(
    service: Arc<Service>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<CamperDetailDto>, ApiError> {
    let Path(id) = path.map_err(|r| reject_id(CAMPER_RESOURCE, r))?;

    let detail = service
        .get_camper_with_activities(id)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(detail.into()))
}

// ===== Activity Handlers =====

/// List all activities
pub async fn list_activities(service: Arc<Service>) -> Result<Json<Vec<ActivityDto>>, ApiError> {
    let activities = service.list_activities().await.map_err(map_domain_error)?;

    Ok(Json(activities.into_iter().map(Into::into).collect()))
}

/// Delete an activity and its signups
///
/// Responds 204 with an empty body.
pub async fn delete_activity(
    service: Arc<Service>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path.map_err(|r| reject_id(ACTIVITY_RESOURCE, r))?;

    service.delete_activity(id).await.map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ===== Signup Handlers =====

/// List all signups
pub async fn list_signups(service: Arc<Service>) -> Result<Json<Vec<SignupDto>>, ApiError> {
    let signups = service.list_signups().await.map_err(map_domain_error)?;

    Ok(Json(signups.into_iter().map(Into::into).collect()))
}

/// Create a signup; responds with the activity it was made for
pub async fn create_signup(
    service: Arc<Service>,
    payload: Result<Json<CreateSignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ActivityDto>), ApiError> {
    let Json(req) = payload.map_err(reject_body)?;

    let (_signup, activity) = service
        .create_signup(req.into())
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(activity.into())))
}
