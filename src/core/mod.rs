pub mod errors;
pub mod numeric;
pub mod types;

pub use errors::{Error, Result, ResultExt};
pub use numeric::{finite_or_zero, guard_denominator, safe_div, sanitize_series};
pub use types::{FuelGrade, FuelLine, PeriodRecord, Severity};
