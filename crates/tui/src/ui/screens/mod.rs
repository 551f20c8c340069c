pub mod bank;
pub mod calculator;
pub mod registration;
