use super::ApiError;
use crate::domain::EntityKind;

pub fn validate_id(kind: EntityKind, id: i32) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid {} ID: {id}. ID must be a positive integer",
            kind.as_str().to_lowercase()
        )));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert_eq!(validate_id(EntityKind::Planet, 1).unwrap(), 1);
        assert!(validate_id(EntityKind::People, 12345).is_ok());
        assert!(validate_id(EntityKind::Film, 0).is_err());
        assert!(validate_id(EntityKind::Film, -1).is_err());
    }
}
