//! Web front end of the stroke risk predictor
//!
//! Serves the prediction form at `/`, a JSON API under `/api` and a health
//! check. The model is loaded once at start-up and shared by every request.

pub mod app;
pub mod config;
pub mod error;
pub mod view;

pub use app::{router, AppState};
pub use config::{Cli, ServerConfig};
pub use error::{ApiError, ServerError};
