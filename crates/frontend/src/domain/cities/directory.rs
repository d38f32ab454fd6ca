//! Static city → latitude lookup backing the autocomplete search.
//!
//! The dataset ships inside the wasm binary (`cities.json`) and is parsed
//! once on first access. The directory is handed to components via context,
//! so tests can build one from any dataset.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::sync::Arc;

/// Queries shorter than this never match anything.
pub const MIN_QUERY_LEN: usize = 2;

/// Upper bound on rendered matches.
pub const MAX_MATCHES: usize = 8;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityEntry {
    pub name: String,
    pub latitude: f64,
    pub country: String,
}

static BUNDLED: Lazy<Arc<Vec<CityEntry>>> = Lazy::new(|| {
    let entries: Vec<CityEntry> = serde_json::from_str(include_str!("cities.json"))
        .expect("bundled cities.json must be valid");
    Arc::new(entries)
});

/// Immutable, ordered collection of known cities.
#[derive(Clone)]
pub struct CityDirectory {
    entries: Arc<Vec<CityEntry>>,
}

impl CityDirectory {
    /// Directory over the dataset bundled with the binary.
    pub fn bundled() -> Self {
        Self {
            entries: BUNDLED.clone(),
        }
    }

    pub fn new(entries: Vec<CityEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring search over city names, preserving dataset
    /// order, truncated to [`MAX_MATCHES`]. Queries shorter than
    /// [`MIN_QUERY_LEN`] yield nothing.
    pub fn search(&self, query: &str) -> Vec<CityEntry> {
        if query.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .take(MAX_MATCHES)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_loads_and_stays_within_latitude_range() {
        let directory = CityDirectory::bundled();
        assert!(directory.len() >= 70);
        for entry in directory.entries.iter() {
            assert!(
                (-90.0..=90.0).contains(&entry.latitude),
                "{} has latitude {}",
                entry.name,
                entry.latitude
            );
        }
    }

    #[test]
    fn short_queries_match_nothing() {
        let directory = CityDirectory::bundled();
        assert!(directory.search("").is_empty());
        assert!(directory.search("a").is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let directory = CityDirectory::bundled();
        for query in ["madrid", "MADRID", "MaDrId"] {
            let matches = directory.search(query);
            assert_eq!(matches.len(), 1, "query {:?}", query);
            assert_eq!(matches[0].name, "Madrid");
            assert_eq!(matches[0].latitude, 40.416);
            assert_eq!(matches[0].country, "España");
        }
    }

    #[test]
    fn search_matches_substrings_in_order() {
        let directory = CityDirectory::bundled();
        let matches = directory.search("san");
        let names: Vec<&str> = matches.iter().map(|e| e.name.as_str()).collect();
        // Dataset order: San Francisco comes before Santiago
        let sf = names.iter().position(|n| *n == "San Francisco").unwrap();
        let santiago = names.iter().position(|n| *n == "Santiago").unwrap();
        assert!(sf < santiago);
    }

    #[test]
    fn search_handles_non_ascii_names() {
        let directory = CityDirectory::bundled();
        let matches = directory.search("málaga");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Málaga");

        let matches = directory.search("MÁLAGA");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Málaga");
    }

    #[test]
    fn search_never_exceeds_the_match_cap() {
        let entries: Vec<CityEntry> = (0..20)
            .map(|i| CityEntry {
                name: format!("Testville {}", i),
                latitude: 10.0,
                country: "Testland".to_string(),
            })
            .collect();
        let directory = CityDirectory::new(entries);
        assert_eq!(directory.search("testville").len(), MAX_MATCHES);
    }

    #[test]
    fn unknown_query_matches_nothing() {
        let directory = CityDirectory::bundled();
        assert!(directory.search("xyzzy").is_empty());
    }
}
