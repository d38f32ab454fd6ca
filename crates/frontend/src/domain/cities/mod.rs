pub mod directory;
pub mod ui;

pub use directory::{CityDirectory, CityEntry, MAX_MATCHES, MIN_QUERY_LEN};
