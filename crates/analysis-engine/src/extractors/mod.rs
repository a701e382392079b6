pub mod dates;
pub mod numeric;

pub use dates::{document_age_days, extract_first_date};
pub use numeric::{extract_days_near, extract_money_near, extract_months_near};
