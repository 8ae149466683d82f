//! Domain layer - business logic and services

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::{ActivityRepository, CamperRepository, RepoError, SignupRepository};
pub use service::Service;
