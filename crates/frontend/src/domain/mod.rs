pub mod calculator;
pub mod cities;
