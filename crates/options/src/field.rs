//! Recognized option fields and the constraint each one enforces.

use std::fmt;

use random_streams_value::Value;

/// A type or range constraint on an option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// A plain keyed record. Applies to the options argument itself.
    Object,
    Boolean,
    /// Finite and `>= 0`.
    NonNegativeNumber,
    StringOrNull,
    String,
    /// Finite, integral and `> 0`.
    PositiveInteger,
    /// Accepted verbatim.
    Any,
}

impl Constraint {
    pub fn check(self, value: &Value) -> bool {
        match self {
            Self::Object => value.is_plain_object(),
            Self::Boolean => value.is_boolean(),
            Self::NonNegativeNumber => value
                .as_f64()
                .is_some_and(|n| n.is_finite() && n >= 0.0),
            Self::StringOrNull => value.is_string() || value.is_null(),
            Self::String => value.is_string(),
            Self::PositiveInteger => value
                .as_f64()
                .is_some_and(|n| n.is_finite() && n.fract() == 0.0 && n > 0.0),
            Self::Any => true,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Object => "an object",
            Self::Boolean => "a boolean",
            Self::NonNegativeNumber => "a nonnegative number",
            Self::StringOrNull => "a string or null",
            Self::String => "a string",
            Self::PositiveInteger => "a positive integer",
            Self::Any => "any value",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// An option the validator understands. Anything else on a candidate is
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ObjectMode,
    HighWaterMark,
    Encoding,
    Sep,
    Siter,
    Iter,
    State,
    Seed,
    Prng,
    Copy,
}

impl Field {
    /// Every recognized field, in checking order.
    pub const ALL: [Field; 10] = [
        Field::ObjectMode,
        Field::HighWaterMark,
        Field::Encoding,
        Field::Sep,
        Field::Siter,
        Field::Iter,
        Field::State,
        Field::Seed,
        Field::Prng,
        Field::Copy,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::ObjectMode => "objectMode",
            Self::HighWaterMark => "highWaterMark",
            Self::Encoding => "encoding",
            Self::Sep => "sep",
            Self::Siter => "siter",
            Self::Iter => "iter",
            Self::State => "state",
            Self::Seed => "seed",
            Self::Prng => "prng",
            Self::Copy => "copy",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    pub fn constraint(self) -> Constraint {
        match self {
            Self::ObjectMode | Self::Copy => Constraint::Boolean,
            Self::HighWaterMark => Constraint::NonNegativeNumber,
            Self::Encoding => Constraint::StringOrNull,
            Self::Sep => Constraint::String,
            Self::Siter => Constraint::PositiveInteger,
            // Shapes owned by the PRNG, not checked here.
            Self::Iter | Self::State | Self::Seed | Self::Prng => Constraint::Any,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use random_streams_value::Record;

    #[test]
    fn keys_round_trip_through_from_key() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(field));
        }
        assert_eq!(Field::from_key("beep"), None);
        assert_eq!(Field::from_key("objectmode"), None);
    }

    #[test]
    fn nonnegative_number_edges() {
        let c = Constraint::NonNegativeNumber;
        assert!(c.check(&Value::from(0)));
        assert!(c.check(&Value::from(-0.0)));
        assert!(c.check(&Value::from(0.5)));
        assert!(!c.check(&Value::from(-5)));
        assert!(!c.check(&Value::from(f64::NAN)));
        assert!(!c.check(&Value::from(f64::INFINITY)));
        assert!(!c.check(&Value::from("5")));
    }

    #[test]
    fn positive_integer_edges() {
        let c = Constraint::PositiveInteger;
        assert!(c.check(&Value::from(1)));
        assert!(c.check(&Value::from(1e308)));
        assert!(!c.check(&Value::from(0)));
        assert!(!c.check(&Value::from(-5)));
        assert!(!c.check(&Value::from(3.5)));
        assert!(!c.check(&Value::from(f64::INFINITY)));
        assert!(!c.check(&Value::from(f64::NAN)));
        assert!(!c.check(&Value::from(true)));
    }

    #[test]
    fn string_or_null_rejects_undefined() {
        let c = Constraint::StringOrNull;
        assert!(c.check(&Value::Null));
        assert!(c.check(&Value::from("")));
        assert!(!c.check(&Value::Undefined));
    }

    #[test]
    fn object_constraint_accepts_only_records() {
        assert!(Constraint::Object.check(&Value::Object(Record::new())));
        assert!(!Constraint::Object.check(&Value::Array(vec![])));
        assert!(!Constraint::Object.check(&Value::Null));
    }
}
