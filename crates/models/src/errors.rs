use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// Every violated rule, in rule order.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),
}

impl ModelError {
    pub fn violations(&self) -> &[String] {
        match self {
            ModelError::Validation(v) => v,
        }
    }
}
