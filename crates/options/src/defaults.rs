use random_streams_value::{Record, Value};

use crate::field::Field;

pub const DEFAULT_OBJECT_MODE: bool = false;
pub const DEFAULT_SEP: &str = "\n";
/// Effectively unbounded.
pub const DEFAULT_SITER: f64 = 1e308;
pub const DEFAULT_COPY: bool = true;

/// Options a stream starts from before user options are merged in.
///
/// `highWaterMark`, `iter`, `state`, `seed` and `prng` have no entry;
/// their absence means "let the stream or PRNG decide".
pub fn defaults() -> Record {
    [
        (Field::ObjectMode, Value::from(DEFAULT_OBJECT_MODE)),
        (Field::Encoding, Value::Null),
        (Field::Sep, Value::from(DEFAULT_SEP)),
        (Field::Siter, Value::from(DEFAULT_SITER)),
        (Field::Copy, Value::from(DEFAULT_COPY)),
    ]
    .into_iter()
    .map(|(field, value)| (field.key(), value))
    .collect()
}
