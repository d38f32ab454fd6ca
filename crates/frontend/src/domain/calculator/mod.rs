pub mod constraints;
pub mod ui;

pub use constraints::{validate, FieldConstraint, ValidationResult, ValidationStatus};
