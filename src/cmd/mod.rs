pub mod breakdown;
pub mod prompt;
pub mod rates;
