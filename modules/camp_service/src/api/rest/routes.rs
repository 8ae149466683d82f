//! Route registration and OpenAPI document

use crate::domain::Service;
use super::{dto::*, error::{ApiError, ErrorBody}, handlers};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// OpenAPI schemas for the camp service DTOs
#[derive(OpenApi)]
#[openapi(
    info(title = "Camp Service", description = "Campers, activities and their signups"),
    components(schemas(
        ActivityDto,
        CamperDto,
        CamperDetailDto,
        CreateCamperRequest,
        SignupDto,
        CreateSignupRequest,
        ErrorBody
    ))
)]
pub struct ApiDoc;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route("/", get(handlers::home))
        // Camper endpoints
        .route("/campers", get(list_campers_handler).post(create_camper_handler))
        .route("/campers/{id}", get(get_camper_handler))
        // Activity endpoints
        .route("/activities", get(list_activities_handler))
        .route("/activities/{id}", delete(delete_activity_handler))
        // Signup endpoints
        .route("/signups", get(list_signups_handler).post(create_signup_handler))
        .route("/openapi.json", get(openapi_handler))
        // Add service as extension for handlers
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn list_campers_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<CamperDto>>, ApiError> {
    handlers::list_campers(service).await
}

async fn create_camper_handler(
    Extension(service): Extension<Arc<Service>>,
    payload: Result<Json<CreateCamperRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CamperDto>), ApiError> {
    handlers::create_camper(service, payload).await
}

async fn get_camper_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<CamperDetailDto>, ApiError> {
    handlers::get_camper(service, path).await
}

async fn list_activities_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<ActivityDto>>, ApiError> {
    handlers::list_activities(service).await
}

async fn delete_activity_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    handlers::delete_activity(service, path).await
}

async fn list_signups_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<SignupDto>>, ApiError> {
    handlers::list_signups(service).await
}

async fn create_signup_handler(
    Extension(service): Extension<Arc<Service>>,
    payload: Result<Json<CreateSignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ActivityDto>), ApiError> {
    handlers::create_signup(service, payload).await
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
