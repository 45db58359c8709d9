use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid parameter '{name}': {value} ({constraint})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },

    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Unknown tumor subtype: '{0}'")]
    UnknownSubtype(String),

    #[error("Unknown drug: '{0}'")]
    UnknownDrug(String),

    #[error("Unknown protein: '{0}'")]
    UnknownProtein(String),

    #[error("Invariant violated: {0}")]
    DomainViolation(String),
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, value: f64, constraint: &'static str) -> Self {
        SimError::InvalidParameter {
            name,
            value,
            constraint,
        }
    }
}
