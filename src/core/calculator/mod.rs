pub mod aggregate;
pub mod conflicts;
pub mod duration;
pub mod pay;
