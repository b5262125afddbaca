pub mod brackets;
pub mod breakdown;
pub mod error;
pub mod levy;
pub mod money;
pub mod repayment;
pub mod salary;
pub mod tax;

// Flat public surface for domain types and functions.
pub use brackets::{TaxBracket, INCOME_TAX_BRACKETS};
pub use breakdown::{estimate, PayBreakdown, PeriodPay};
pub use levy::{LEVY_LOWER_THRESHOLD, LEVY_PHASE_IN_RATE, LEVY_RATE, LEVY_UPPER_THRESHOLD};
pub use money::{format_aud, format_pct, round_cents};
pub use repayment::{RepaymentBand, REPAYMENT_BANDS};
pub use salary::{
    parse_amount, super_rate_from_percent, SalaryPackage, SuperTreatment,
    DEFAULT_SUPER_RATE_PERCENT,
};
pub use tax::TotalRounding;
#[allow(unused_imports)]
pub use {
    breakdown::PayPeriod,
    error::InputError,
    tax::{calculate_annual_tax, TaxResult},
};
