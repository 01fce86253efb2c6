//! Closed option sets of the patient form
//!
//! Every categorical control offers a fixed list of labels. Each list is a Rust
//! enum, so an unknown option cannot reach the encoder: it is rejected when the
//! label is parsed.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ValidationError;

/// Common surface of the categorical form options.
pub trait Category: Copy + Eq + fmt::Debug + 'static {
    /// Field name used in error messages and form keys.
    const FIELD: &'static str;
    /// Every option, in the order the form offers them.
    const ALL: &'static [Self];

    /// Label shown to the user.
    fn label(self) -> &'static str;

    /// Position of this option in [`Category::ALL`].
    fn index(self) -> usize;

    /// Parse a label as submitted by the form.
    fn from_label(label: &str) -> Result<Self, ValidationError> {
        let trimmed = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label() == trimmed)
            .ok_or_else(|| {
                let options = Self::ALL
                    .iter()
                    .map(|c| c.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                ValidationError::new(
                    Self::FIELD,
                    format!("unknown option '{trimmed}' (expected one of: {options})"),
                )
            })
    }
}

macro_rules! category {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl Category for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            fn index(self) -> usize {
                self as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as Category>::from_label(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(|e: ValidationError| de::Error::custom(e.message))
            }
        }
    };
}

category! {
    /// Gender selection
    Gender, field = "gender" {
        Male => "Male",
        Female => "Female",
        Other => "Other",
    }
}

category! {
    /// Yes/No toggle shared by hypertension, heart disease and ever married
    YesNo, field = "yes_no" {
        Yes => "Yes",
        No => "No",
    }
}

category! {
    /// Kind of employment
    WorkType, field = "work_type" {
        GovernmentJob => "Government Job",
        NeverWorked => "Never Worked",
        Private => "Private",
        SelfEmployed => "Self-employed",
        Children => "Children",
    }
}

category! {
    ResidenceType, field = "residence_type" {
        Rural => "Rural",
        Urban => "Urban",
    }
}

category! {
    SmokingStatus, field = "smoking_status" {
        FormerlySmoked => "Formerly Smoked",
        NeverSmoked => "Never Smoked",
        Smokes => "Smokes",
        Unknown => "Unknown",
    }
}

impl YesNo {
    pub fn as_bool(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Parse a yes/no toggle, reporting errors under `field`.
pub fn parse_yes_no(field: &'static str, label: &str) -> Result<YesNo, ValidationError> {
    YesNo::from_label(label).map_err(|e| ValidationError::new(field, e.message))
}
