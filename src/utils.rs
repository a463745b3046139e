use crate::errors::CartError;

// Validation
pub fn validate_min_usize_parameter(value: usize, min: usize, parameter: &str) -> Result<(), CartError> {
    if value < min {
        let ex_msg = format!("integer value of at least {}", min);
        Err(CartError::InvalidParameter(
            parameter.to_string(),
            ex_msg,
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}
