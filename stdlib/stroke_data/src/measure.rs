//! Slider-bounded numeric attributes

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! bounded {
    (
        $(#[$meta:meta])*
        $name:ident($repr:ty), field = $field:literal, range = $min:literal ..= $max:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name($repr);

        impl $name {
            pub const FIELD: &'static str = $field;
            pub const MIN: $repr = $min;
            pub const MAX: $repr = $max;

            pub fn new(value: i64) -> Result<Self, ValidationError> {
                if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
                    return Err(ValidationError::new(
                        Self::FIELD,
                        format!("{value} is outside {}..={}", Self::MIN, Self::MAX),
                    ));
                }
                // In range, so the narrowing below is lossless.
                Ok(Self(value as $repr))
            }

            /// Parse a form value; surrounding whitespace is ignored.
            pub fn parse(raw: &str) -> Result<Self, ValidationError> {
                let trimmed = raw.trim();
                let value: i64 = trimmed.parse().map_err(|_| {
                    ValidationError::new(Self::FIELD, format!("'{trimmed}' is not a whole number"))
                })?;
                Self::new(value)
            }

            pub fn get(self) -> $repr {
                self.0
            }

            pub fn as_f64(self) -> f64 {
                f64::from(self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Self::MIN)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = ValidationError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                i64::from(value.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

bounded! {
    /// Age in years
    Age(u8), field = "age", range = 1 ..= 120
}

bounded! {
    /// Average glucose level in mg/dL
    GlucoseLevel(u16), field = "avg_glucose_level", range = 1 ..= 350
}

bounded! {
    /// Body-mass index
    Bmi(u8), field = "bmi", range = 5 ..= 100
}
