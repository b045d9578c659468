//! Reusable UI components

pub mod alert;

pub use alert::{Alert, AlertKind};
