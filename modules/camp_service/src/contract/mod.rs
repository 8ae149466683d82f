//! Contract layer - models and errors shared across layers
//!
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::CampError;
pub use model::{
    Activity, Camper, CamperWithActivities, NewActivity, NewCamper, NewSignup, Signup,
    SignupDetail,
};
