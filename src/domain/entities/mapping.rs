//! Mapping entity representing a shortened URL.

/// Number of characters in a generated short identifier.
pub const SHORT_URL_ID_LENGTH: usize = 8;

/// Association between a short identifier and its redirect target.
///
/// Mappings are written once by the creation service and never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub short_url_id: String,
    pub long_url: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(short_url_id: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            short_url_id: short_url_id.into(),
            long_url: long_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_creation() {
        let mapping = Mapping::new("ab12cd34", "https://example.com/article");

        assert_eq!(mapping.short_url_id, "ab12cd34");
        assert_eq!(mapping.long_url, "https://example.com/article");
    }
}
