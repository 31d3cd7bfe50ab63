pub mod add;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod del;
pub mod edit;
pub mod import;
pub mod lifecycle;
pub mod log;
pub mod logic;
pub mod punch;
pub mod report;
pub mod validate;
