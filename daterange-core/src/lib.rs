pub mod config;
pub mod date_input;
pub mod dates;
pub mod errors;
pub mod keywords;
pub mod parse_input;
pub mod render;

pub use config::Config;
pub use date_input::IntoDateString;
pub use dates::{DateRange, DayRange, daterange, days_in_range, format_date, parse_date};
pub use errors::DateError;
