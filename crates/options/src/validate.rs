//! Options validator.

use random_streams_value::{Record, Value};

use crate::error::ValidationError;
use crate::field::{Constraint, Field};

/// Validates `candidate` and copies its recognized options into
/// `destination`.
///
/// `None` means no options were supplied and succeeds without touching
/// `destination`. Any `Some` value must be a plain record; `undefined`,
/// `null`, arrays, functions and primitives are rejected.
///
/// Fields are checked in [`Field::ALL`] order and the first violation is
/// returned. Nothing is written until every present field has passed, so
/// `destination` is left as it was on error. Accepted values are copied
/// verbatim; unrecognized keys are ignored.
pub fn validate(destination: &mut Record, candidate: Option<&Value>) -> Result<(), ValidationError> {
    let Some(candidate) = candidate else {
        return Ok(());
    };
    let options = candidate.as_object().ok_or_else(|| {
        log::debug!(
            "rejected options argument: expected {}, got {}",
            Constraint::Object,
            candidate.type_name()
        );
        ValidationError::NotAnObject(candidate.clone())
    })?;

    let mut accepted = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        let Some(value) = options.get(field.key()) else {
            continue;
        };
        check(field, value)?;
        accepted.push((field, value));
    }

    log::trace!("accepted {} of {} option keys", accepted.len(), options.len());
    for (field, value) in accepted {
        destination.set(field.key(), value.clone());
    }
    Ok(())
}

fn check(field: Field, value: &Value) -> Result<(), ValidationError> {
    let constraint = field.constraint();
    if constraint.check(value) {
        return Ok(());
    }
    log::debug!(
        "rejected option `{field}`: expected {constraint}, got {}",
        value.type_name()
    );
    Err(ValidationError::invalid(field, value))
}
