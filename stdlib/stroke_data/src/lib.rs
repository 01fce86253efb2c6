//! Patient risk-factor records for the stroke risk predictor
//!
//! Holds the human-readable side of a submission: the closed option sets of
//! the form, the slider-bounded measurements, the assembled [`PatientRecord`]
//! and validation of raw form posts.

pub mod categories;
pub mod error;
pub mod form;
pub mod measure;
pub mod record;

pub use categories::{Category, Gender, ResidenceType, SmokingStatus, WorkType, YesNo};
pub use error::{ValidationError, ValidationErrors};
pub use form::PatientForm;
pub use measure::{Age, Bmi, GlucoseLevel};
pub use record::{PatientRecord, DISPLAY_COLUMNS};
