//! Field validation for camper and signup writes

use crate::contract::{CampError, NewCamper, NewSignup};

/// Youngest accepted camper age
pub const CAMPER_MIN_AGE: i32 = 8;
/// Oldest accepted camper age
pub const CAMPER_MAX_AGE: i32 = 18;
/// First bookable hour of the day
pub const SIGNUP_MIN_HOUR: i32 = 0;
/// Last bookable hour of the day
pub const SIGNUP_MAX_HOUR: i32 = 23;

/// Camper name must be present and non-empty
pub fn validate_camper_name(name: &str) -> Result<(), CampError> {
    if name.is_empty() {
        return Err(CampError::validation("Camper name must not be empty"));
    }
    Ok(())
}

pub fn validate_camper_age(age: i32) -> Result<(), CampError> {
    if !(CAMPER_MIN_AGE..=CAMPER_MAX_AGE).contains(&age) {
        return Err(CampError::validation(format!(
            "Camper age {} must be between {} and {}",
            age, CAMPER_MIN_AGE, CAMPER_MAX_AGE
        )));
    }
    Ok(())
}

pub fn validate_signup_time(time: i32) -> Result<(), CampError> {
    if !(SIGNUP_MIN_HOUR..=SIGNUP_MAX_HOUR).contains(&time) {
        return Err(CampError::validation(format!(
            "Signup time {} must be between {} and {} hrs",
            time, SIGNUP_MIN_HOUR, SIGNUP_MAX_HOUR
        )));
    }
    Ok(())
}

/// Validate a camper before it enters a pending write
pub fn validate_new_camper(camper: NewCamper) -> Result<NewCamper, CampError> {
    validate_camper_name(&camper.name)?;
    validate_camper_age(camper.age)?;
    Ok(camper)
}

/// Validate a signup before it enters a pending write
///
/// Only the hour is checked here. Camper and activity references are
/// enforced by the store.
pub fn validate_new_signup(signup: NewSignup) -> Result<NewSignup, CampError> {
    validate_signup_time(signup.time)?;
    Ok(signup)
}
