use thiserror::Error;

/// Failure category, independent of any transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    ValidationFailed,
    Unauthenticated,
    Internal,
}

impl ErrorKind {
    /// Name reported in the `error` field of response bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NotFoundError",
            ErrorKind::ValidationFailed => "ValidationError",
            ErrorKind::Unauthenticated => "AuthenticationError",
            ErrorKind::Internal => "InternalServerError",
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Validation(_) | ServiceError::Model(_) => ErrorKind::ValidationFailed,
            ServiceError::NotFound(_) => ErrorKind::NotFound,
        }
    }

    /// Individual rule violations, when the failure came from payload validation.
    pub fn details(&self) -> Option<&[String]> {
        match self {
            ServiceError::Model(e) => Some(e.violations()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(ServiceError::not_found("Product").kind(), ErrorKind::NotFound);
        assert_eq!(ServiceError::Validation("x".into()).kind(), ErrorKind::ValidationFailed);
        let model = ServiceError::from(ModelError::Validation(vec!["a".into(), "b".into()]));
        assert_eq!(model.kind(), ErrorKind::ValidationFailed);
        assert_eq!(model.to_string(), "a, b");
        assert_eq!(model.details().map(<[String]>::len), Some(2));
    }

    #[test]
    fn not_found_message() {
        assert_eq!(ServiceError::not_found("Product").to_string(), "Product not found");
    }
}
