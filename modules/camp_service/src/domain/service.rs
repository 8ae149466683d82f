//! Domain service - business logic orchestration

use crate::contract::{
    Activity, CampError, Camper, CamperWithActivities, NewActivity, NewCamper, NewSignup, Signup,
    SignupDetail,
};
use super::repository::{ActivityRepository, CamperRepository, RepoError, SignupRepository};
use super::validation;
use std::sync::Arc;

pub const CAMPER_RESOURCE: &str = "Camper";
pub const ACTIVITY_RESOURCE: &str = "Activity";

/// Domain service for campers, activities and signups
pub struct Service {
    activity_repo: Arc<dyn ActivityRepository>,
    camper_repo: Arc<dyn CamperRepository>,
    signup_repo: Arc<dyn SignupRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        activity_repo: Arc<dyn ActivityRepository>,
        camper_repo: Arc<dyn CamperRepository>,
        signup_repo: Arc<dyn SignupRepository>,
    ) -> Self {
        Self {
            activity_repo,
            camper_repo,
            signup_repo,
        }
    }

    // ===== Camper Operations =====

    pub async fn list_campers(&self) -> Result<Vec<Camper>, CampError> {
        self.camper_repo.list_all().await.map_err(map_repo_error)
    }

    /// Validate and persist a new camper
    pub async fn create_camper(&self, camper: NewCamper) -> Result<Camper, CampError> {
        let camper = validation::validate_new_camper(camper)?;

        let created = self
            .camper_repo
            .create(&camper)
            .await
            .map_err(map_repo_error)?;

        tracing::info!(camper_id = created.id, "camper created");
        Ok(created)
    }

    /// Fetch a camper and the distinct activities it signed up for
    pub async fn get_camper_with_activities(
        &self,
        id: i32,
    ) -> Result<CamperWithActivities, CampError> {
        let camper = self
            .camper_repo
            .find_by_id(id)
            .await
            .map_err(map_repo_error)?
            .ok_or_else(|| CampError::not_found(CAMPER_RESOURCE, id))?;

        let activities = self
            .activity_repo
            .find_by_camper(id)
            .await
            .map_err(map_repo_error)?;

        Ok(CamperWithActivities { camper, activities })
    }

    // ===== Activity Operations =====

    pub async fn list_activities(&self) -> Result<Vec<Activity>, CampError> {
        self.activity_repo.list_all().await.map_err(map_repo_error)
    }

    /// Persist a new activity. There is no REST route for this; it backs seeding.
    pub async fn create_activity(&self, activity: NewActivity) -> Result<Activity, CampError> {
        let created = self
            .activity_repo
            .create(&activity)
            .await
            .map_err(map_repo_error)?;

        tracing::info!(activity_id = created.id, "activity created");
        Ok(created)
    }

    /// Delete an activity after explicitly deleting every signup that references it
    pub async fn delete_activity(&self, id: i32) -> Result<(), CampError> {
        let deleted = self
            .activity_repo
            .delete_with_signups(id)
            .await
            .map_err(map_repo_error)?;

        if !deleted {
            return Err(CampError::not_found(ACTIVITY_RESOURCE, id));
        }

        tracing::info!(activity_id = id, "activity deleted with its signups");
        Ok(())
    }

    // ===== Signup Operations =====

    pub async fn list_signups(&self) -> Result<Vec<SignupDetail>, CampError> {
        self.signup_repo.list_all().await.map_err(map_repo_error)
    }

    /// Validate and persist a new signup, returning it with its activity
    pub async fn create_signup(&self, signup: NewSignup) -> Result<(Signup, Activity), CampError> {
        let signup = validation::validate_new_signup(signup)?;

        let created = self
            .signup_repo
            .create(&signup)
            .await
            .map_err(map_repo_error)?;

        // The insert already proved the activity exists.
        let activity = self
            .activity_repo
            .find_by_id(created.activity_id)
            .await
            .map_err(map_repo_error)?
            .ok_or_else(|| CampError::not_found(ACTIVITY_RESOURCE, created.activity_id))?;

        tracing::info!(
            signup_id = created.id,
            camper_id = created.camper_id,
            activity_id = created.activity_id,
            "signup created"
        );
        Ok((created, activity))
    }
}

fn map_repo_error(error: RepoError) -> CampError {
    match error {
        RepoError::Validation(message) | RepoError::Integrity(message) => {
            tracing::debug!(%message, "write rejected by store");
            CampError::Validation { message }
        }
        RepoError::Other(error) => {
            tracing::error!(error = ?error, "storage failure");
            CampError::Internal
        }
    }
}
