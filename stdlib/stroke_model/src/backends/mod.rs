//! Backend implementations for different model families

pub mod logistic;

pub use logistic::{LogisticBackend, LogisticParams};
