pub mod search;

pub use search::CitySearch;
