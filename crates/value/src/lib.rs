//! random-streams-value - dynamically typed option values.
//!
//! A random stream accepts its options as an untyped record, so the
//! validator has to be able to look at anything a caller may hand it:
//! `undefined`, `NaN`, arrays, functions, typed arrays holding PRNG
//! state. [`Value`] covers all of those, [`Record`] is the keyed
//! container used both for candidates and for destination records, and
//! [`deep_equal`] compares them structurally.

mod deep_equal;
mod prng_fn;
mod record;
mod value;

pub use deep_equal::deep_equal;
pub use prng_fn::PrngFn;
pub use record::Record;
pub use value::Value;
