//! REST DTOs with serde derives for HTTP API
//!
//! Each response DTO is the projection of one entity; a field that is not
//! declared here is never serialized.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Activity DTOs =====

/// Activity projection: id, name, difficulty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActivityDto {
    pub id: i32,

    #[schema(example = "Archery")]
    pub name: String,

    #[schema(example = 2)]
    pub difficulty: i32,
}

// ===== Camper DTOs =====

/// Default camper projection: id, name, age
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CamperDto {
    pub id: i32,

    #[schema(example = "Caitlin")]
    pub name: String,

    #[schema(example = 12)]
    pub age: i32,
}

/// Camper projection used by the single-camper fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CamperDetailDto {
    pub id: i32,
    pub name: String,
    pub age: i32,

    /// Distinct activities reached through this camper's signups
    pub activities: Vec<ActivityDto>,
}

/// Create camper request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCamperRequest {
    #[schema(example = "Caitlin")]
    pub name: String,

    #[schema(example = 12, minimum = 8, maximum = 18)]
    pub age: i32,
}

// ===== Signup DTOs =====

/// Signup projection; nested camper and activity never expand their signups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SignupDto {
    pub id: i32,

    /// Hour of the day
    #[schema(example = 9)]
    pub time: i32,

    pub camper_id: i32,
    pub activity_id: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub camper: Option<CamperDto>,
    pub activity: Option<ActivityDto>,
}

/// Create signup request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSignupRequest {
    #[schema(example = 9, minimum = 0, maximum = 23)]
    pub time: i32,

    pub camper_id: i32,
    pub activity_id: i32,
}
