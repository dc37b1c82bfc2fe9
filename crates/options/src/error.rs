use random_streams_value::Value;
use thiserror::Error;

use crate::field::{Constraint, Field};

/// A type or constraint violation found while validating options.
///
/// Both shapes are type errors: either the options argument is not an
/// object, or one recognized option holds a value its constraint rejects.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid argument. Options argument must be an object. Value: `{0}`.")]
    NotAnObject(Value),
    #[error("invalid option. `{field}` option must be {constraint}. Option: `{value}`.")]
    InvalidOption {
        field: Field,
        constraint: Constraint,
        value: Value,
    },
}

impl ValidationError {
    pub(crate) fn invalid(field: Field, value: &Value) -> Self {
        Self::InvalidOption {
            field,
            constraint: field.constraint(),
            value: value.clone(),
        }
    }

    /// The offending option, or `None` when the options argument itself
    /// was rejected.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::NotAnObject(_) => None,
            Self::InvalidOption { field, .. } => Some(*field),
        }
    }

    pub fn constraint(&self) -> Constraint {
        match self {
            Self::NotAnObject(_) => Constraint::Object,
            Self::InvalidOption { constraint, .. } => *constraint,
        }
    }

    pub fn value(&self) -> &Value {
        match self {
            Self::NotAnObject(value) | Self::InvalidOption { value, .. } => value,
        }
    }
}
