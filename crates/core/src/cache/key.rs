//! Cache key generation for search requests.

/// Compute the cache key for a search.
///
/// The query is case-folded and the requested count is part of the key, so
/// `("Hotel", 5)` and `("hotel", 5)` share an entry while `("hotel", 10)`
/// does not. Country is deliberately not part of the key.
pub fn cache_key(query: &str, num_results: usize) -> String {
    format!("serp::{}::{}", query.to_lowercase(), num_results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_stability() {
        assert_eq!(cache_key("wifi review", 3), cache_key("wifi review", 3));
    }

    #[test]
    fn test_key_case_folded() {
        assert_eq!(cache_key("WiFi Review", 3), cache_key("wifi review", 3));
    }

    #[test]
    fn test_key_different_count() {
        assert_ne!(cache_key("wifi review", 3), cache_key("wifi review", 10));
    }

    #[test]
    fn test_key_format() {
        assert_eq!(cache_key("Hotel Wifi", 10), "serp::hotel wifi::10");
    }
}
