pub mod calculator;
pub mod dashboard;
