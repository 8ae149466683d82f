//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{
    Activity, Camper, NewActivity, NewCamper, NewSignup, Signup, SignupDetail,
};
use async_trait::async_trait;
use thiserror::Error;

/// Store-level failure
#[derive(Debug, Error)]
pub enum RepoError {
    /// The store's save hook rejected the row
    #[error("row rejected by store validation: {0}")]
    Validation(String),
    /// A foreign key points at a row that does not exist
    #[error("referential integrity violation: {0}")]
    Integrity(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository for activities
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Create a new activity
    async fn create(&self, activity: &NewActivity) -> RepoResult<Activity>;

    /// Find an activity by id
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Activity>>;

    /// List all activities ordered by id
    async fn list_all(&self) -> RepoResult<Vec<Activity>>;

    /// Distinct activities reached through a camper's signups, ordered by id
    async fn find_by_camper(&self, camper_id: i32) -> RepoResult<Vec<Activity>>;

    /// Delete the signups referencing an activity, then the activity itself,
    /// in one transaction. Returns `false` when the activity does not exist.
    async fn delete_with_signups(&self, id: i32) -> RepoResult<bool>;
}

/// Repository for campers
#[async_trait]
pub trait CamperRepository: Send + Sync {
    /// Create a new camper
    async fn create(&self, camper: &NewCamper) -> RepoResult<Camper>;

    /// Find a camper by id
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Camper>>;

    /// List all campers ordered by id
    async fn list_all(&self) -> RepoResult<Vec<Camper>>;
}

/// Repository for signups
#[async_trait]
pub trait SignupRepository: Send + Sync {
    /// Create a new signup. Fails with [`RepoError::Integrity`] when the
    /// camper or activity does not exist.
    async fn create(&self, signup: &NewSignup) -> RepoResult<Signup>;

    /// List all signups with the camper and activity they reference
    async fn list_all(&self) -> RepoResult<Vec<SignupDetail>>;
}
