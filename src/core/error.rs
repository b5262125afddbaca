/// Rejected user input. Raised before any calculation runs; the calculators
/// themselves never fail.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid input for {field}: '{value}' is not a numerical value")]
    InvalidNumber { field: &'static str, value: String },
    #[error("invalid input for {field}: '{value}' must not be negative")]
    NegativeAmount { field: &'static str, value: String },
}
