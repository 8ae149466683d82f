//! Camp Service Module
//!
//! REST service over campers, activities and the signups joining them.
//! Campers and signups are validated on every write; activities are deleted
//! together with their signups.

// Public exports
pub mod contract;
pub use contract::{
    Activity, CampError, Camper, CamperWithActivities, NewActivity, NewCamper, NewSignup, Signup,
    SignupDetail,
};

pub mod module;
pub use module::CampServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
