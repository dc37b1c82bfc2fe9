//! Typed view of a validated options record.

use random_streams_value::{Record, Value};

use crate::defaults::{defaults, DEFAULT_COPY, DEFAULT_OBJECT_MODE, DEFAULT_SEP, DEFAULT_SITER};
use crate::error::ValidationError;
use crate::field::Field;
use crate::validate::validate;

/// Options as a random stream consumes them.
///
/// `iter`, `state`, `seed` and `prng` stay opaque: their shapes are
/// defined by the PRNG that receives them.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamOptions {
    pub object_mode: bool,
    pub high_water_mark: Option<f64>,
    /// `None` means raw output with no character encoding.
    pub encoding: Option<String>,
    pub sep: String,
    pub siter: f64,
    pub iter: Option<Value>,
    pub state: Option<Value>,
    pub seed: Option<Value>,
    pub prng: Option<Value>,
    pub copy: bool,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            object_mode: DEFAULT_OBJECT_MODE,
            high_water_mark: None,
            encoding: None,
            sep: DEFAULT_SEP.to_string(),
            siter: DEFAULT_SITER,
            iter: None,
            state: None,
            seed: None,
            prng: None,
            copy: DEFAULT_COPY,
        }
    }
}

impl StreamOptions {
    /// Merges `candidate` over [`defaults`] and returns the typed result.
    pub fn resolve(candidate: Option<&Value>) -> Result<Self, ValidationError> {
        let mut opts = defaults();
        validate(&mut opts, candidate)?;
        Self::from_record(&opts)
    }

    /// Reads a record that may not have gone through [`validate`]. Missing
    /// fields fall back to defaults; invalid ones are reported.
    pub fn from_record(record: &Record) -> Result<Self, ValidationError> {
        let fallback = Self::default();
        Ok(Self {
            object_mode: typed(record, Field::ObjectMode, Value::as_bool)?
                .unwrap_or(fallback.object_mode),
            high_water_mark: typed(record, Field::HighWaterMark, Value::as_f64)?,
            encoding: typed(record, Field::Encoding, |v| Some(v.as_str().map(str::to_owned)))?
                .flatten(),
            sep: typed(record, Field::Sep, |v| v.as_str().map(str::to_owned))?
                .unwrap_or(fallback.sep),
            siter: typed(record, Field::Siter, Value::as_f64)?.unwrap_or(fallback.siter),
            iter: record.get(Field::Iter.key()).cloned(),
            state: record.get(Field::State.key()).cloned(),
            seed: record.get(Field::Seed.key()).cloned(),
            prng: record.get(Field::Prng.key()).cloned(),
            copy: typed(record, Field::Copy, Value::as_bool)?.unwrap_or(fallback.copy),
        })
    }
}

fn typed<T>(
    record: &Record,
    field: Field,
    extract: impl Fn(&Value) -> Option<T>,
) -> Result<Option<T>, ValidationError> {
    match record.get(field.key()) {
        None => Ok(None),
        Some(value) if field.constraint().check(value) => Ok(extract(value)),
        Some(value) => Err(ValidationError::invalid(field, value)),
    }
}
