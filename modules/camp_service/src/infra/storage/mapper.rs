//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models, and from
//! database errors to repository errors.

use crate::contract::{Activity, Camper, NewActivity, NewCamper, NewSignup, Signup};
use crate::domain::RepoError;
use sea_orm::{DbErr, SqlErr};

use super::entity::{activity, camper, signup, REJECTED_PREFIX};

// ===== Activity Conversions =====

impl From<activity::Model> for Activity {
    fn from(entity: activity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            difficulty: entity.difficulty,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&NewActivity> for activity::ActiveModel {
    fn from(model: &NewActivity) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            name: Set(model.name.clone()),
            difficulty: Set(model.difficulty),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

// ===== Camper Conversions =====

impl From<camper::Model> for Camper {
    fn from(entity: camper::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&NewCamper> for camper::ActiveModel {
    fn from(model: &NewCamper) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            name: Set(model.name.clone()),
            age: Set(model.age),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

// ===== Signup Conversions =====

impl From<signup::Model> for Signup {
    fn from(entity: signup::Model) -> Self {
        Self {
            id: entity.id,
            time: entity.time,
            camper_id: entity.camper_id,
            activity_id: entity.activity_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&NewSignup> for signup::ActiveModel {
    fn from(model: &NewSignup) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            time: Set(model.time),
            camper_id: Set(model.camper_id),
            activity_id: Set(model.activity_id),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

// ===== Error Conversions =====

impl From<DbErr> for RepoError {
    fn from(error: DbErr) -> Self {
        if let Some(SqlErr::ForeignKeyConstraintViolation(message)) = error.sql_err() {
            return RepoError::Integrity(message);
        }
        match error {
            DbErr::Custom(message) => match message.strip_prefix(REJECTED_PREFIX) {
                Some(reason) => RepoError::Validation(reason.to_string()),
                None => RepoError::Other(DbErr::Custom(message).into()),
            },
            other => RepoError::Other(other.into()),
        }
    }
}
