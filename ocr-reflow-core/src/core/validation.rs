//! Input validation utilities.
//!
//! Small checks used when raw detections are converted into region
//! descriptors, so malformed geometry is rejected before it reaches the
//! algorithm instead of producing NaN comparisons downstream.

use crate::core::errors::ReflowError;

/// Validates that a float value is finite (not NaN or infinite).
#[inline]
pub fn validate_finite(value: f32, param_name: &str) -> Result<(), ReflowError> {
    if !value.is_finite() {
        return Err(ReflowError::invalid_geometry(format!(
            "Parameter '{}' must be finite, got: {}",
            param_name, value
        )));
    }
    Ok(())
}

/// Validates that a collection holds at least `min_len` items.
#[inline]
pub fn validate_min_len<T>(items: &[T], min_len: usize, param_name: &str) -> Result<(), ReflowError> {
    if items.len() < min_len {
        return Err(ReflowError::invalid_geometry(format!(
            "Parameter '{}' needs at least {} items, got: {}",
            param_name,
            min_len,
            items.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite(1.0, "x").is_ok());
        assert!(validate_finite(f32::NAN, "x").is_err());
        assert!(validate_finite(f32::INFINITY, "x").is_err());
    }

    #[test]
    fn test_validate_min_len() {
        assert!(validate_min_len(&[1, 2], 2, "points").is_ok());
        let err = validate_min_len(&[1], 2, "points").unwrap_err();
        assert!(err.to_string().contains("at least 2"));
    }
}
