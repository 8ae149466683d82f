//! Contract models for camp service
//!
//! These models are transport-agnostic and shared by the domain, storage and
//! REST layers. NO serde derives - projections live in the REST DTOs.

use chrono::{DateTime, Utc};

/// Camp activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Generated identifier
    pub id: i32,
    /// Display name
    pub name: String,
    /// Difficulty rating
    pub difficulty: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, unset until the row is first updated
    pub updated_at: Option<DateTime<Utc>>,
}

/// Camper attending the camp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camper {
    /// Generated identifier
    pub id: i32,
    /// Camper name, never empty
    pub name: String,
    /// Age in years, within `CAMPER_MIN_AGE..=CAMPER_MAX_AGE`
    pub age: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

/// Signup of a camper to an activity at a given hour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signup {
    /// Generated identifier
    pub id: i32,
    /// Hour of the day, within `SIGNUP_MIN_HOUR..=SIGNUP_MAX_HOUR`
    pub time: i32,
    /// Camper this signup belongs to
    pub camper_id: i32,
    /// Activity this signup belongs to
    pub activity_id: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

/// Signup together with the rows it references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupDetail {
    pub signup: Signup,
    pub camper: Option<Camper>,
    pub activity: Option<Activity>,
}

/// Camper together with the distinct activities reached through its signups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CamperWithActivities {
    pub camper: Camper,
    pub activities: Vec<Activity>,
}

/// Fields accepted when creating an activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub name: String,
    pub difficulty: i32,
}

/// Fields accepted when creating a camper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCamper {
    pub name: String,
    pub age: i32,
}

/// Fields accepted when creating a signup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewSignup {
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
}
