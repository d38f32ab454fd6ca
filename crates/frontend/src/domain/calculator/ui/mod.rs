pub mod form;
pub mod number_field;

pub use form::CalculatorPage;
pub use number_field::NumberField;
