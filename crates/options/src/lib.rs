//! random-streams-options - validates and merges user options for a
//! pseudo-random number stream.
//!
//! The stream constructor receives an untyped options value. [`validate`]
//! checks every recognized field against its [`Constraint`], copies the
//! accepted fields into a destination [`Record`], and reports the first
//! violation as a [`ValidationError`]. Unrecognized keys are ignored.
//!
//! ```
//! use random_streams_options::{validate, Record, Value};
//!
//! let candidate: Value = Record::from_iter([("sep", Value::from(",")), ("beep", Value::from(true))]).into();
//! let mut opts = Record::new();
//! validate(&mut opts, Some(&candidate)).unwrap();
//! assert_eq!(opts.len(), 1);
//! assert_eq!(opts.get("sep").and_then(Value::as_str), Some(","));
//! ```

mod defaults;
mod error;
mod field;
mod stream_options;
mod validate;

pub use defaults::{defaults, DEFAULT_COPY, DEFAULT_OBJECT_MODE, DEFAULT_SEP, DEFAULT_SITER};
pub use error::ValidationError;
pub use field::{Constraint, Field};
pub use stream_options::StreamOptions;
pub use validate::validate;

pub use random_streams_value::{PrngFn, Record, Value};
