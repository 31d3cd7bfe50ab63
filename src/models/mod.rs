pub mod conflict;
pub mod period;
pub mod raw_entry;
pub mod report;
pub mod time_entry;
pub mod validation;
