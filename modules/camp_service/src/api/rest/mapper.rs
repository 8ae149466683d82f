//! Mapper implementations for converting between DTOs and contract models
//!
//! These are the serialization projections: pure data-in/data-out mappings
//! that pick the exposed fields of each entity.

use super::dto::*;
use crate::contract;

// ===== Activity conversions =====

impl From<contract::Activity> for ActivityDto {
    fn from(activity: contract::Activity) -> Self {
        Self {
            id: activity.id,
            name: activity.name,
            difficulty: activity.difficulty,
        }
    }
}

// ===== Camper conversions =====

impl From<contract::Camper> for CamperDto {
    fn from(camper: contract::Camper) -> Self {
        Self {
            id: camper.id,
            name: camper.name,
            age: camper.age,
        }
    }
}

impl From<contract::CamperWithActivities> for CamperDetailDto {
    fn from(detail: contract::CamperWithActivities) -> Self {
        Self {
            id: detail.camper.id,
            name: detail.camper.name,
            age: detail.camper.age,
            activities: detail.activities.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CreateCamperRequest> for contract::NewCamper {
    fn from(req: CreateCamperRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
        }
    }
}

// ===== Signup conversions =====

impl From<contract::SignupDetail> for SignupDto {
    fn from(detail: contract::SignupDetail) -> Self {
        let signup = detail.signup;
        Self {
            id: signup.id,
            time: signup.time,
            camper_id: signup.camper_id,
            activity_id: signup.activity_id,
            created_at: signup.created_at,
            updated_at: signup.updated_at,
            camper: detail.camper.map(Into::into),
            activity: detail.activity.map(Into::into),
        }
    }
}

impl From<CreateSignupRequest> for contract::NewSignup {
    fn from(req: CreateSignupRequest) -> Self {
        Self {
            time: req.time,
            camper_id: req.camper_id,
            activity_id: req.activity_id,
        }
    }
}
