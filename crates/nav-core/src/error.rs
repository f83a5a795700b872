//! Shared error type and parameter validation.
//!
//! Sub-crates define their own error enums and wrap `NavError` as one
//! `#[from]` variant, so degenerate-input checks live in one place.

use thiserror::Error;

/// Errors for degenerate input shared by every `nav-*` crate.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("clearance radius must be finite and non-negative (got {0})")]
    NegativeRadius(f32),

    #[error("{what} must be finite and non-negative (got {value})")]
    InvalidParameter { what: &'static str, value: f32 },
}

/// Shorthand result type for `nav-core`.
pub type NavResult<T> = Result<T, NavError>;

/// Validate a clearance radius.
pub fn check_radius(radius: f32) -> NavResult<f32> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(radius)
    } else {
        Err(NavError::NegativeRadius(radius))
    }
}

/// Validate a scalar parameter such as a speed or stopping distance.
pub fn check_non_negative(what: &'static str, value: f32) -> NavResult<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(NavError::InvalidParameter { what, value })
    }
}
