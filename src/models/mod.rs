pub mod currency;
pub mod day_record;
pub mod scope;

pub use currency::Currency;
pub use day_record::DayRecord;
pub use scope::Scope;
