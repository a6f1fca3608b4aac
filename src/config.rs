//! Seeding run configuration.

/// Inclusive size bounds for a sampled foreign-id subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubsetBounds {
    pub min: usize,
    pub max: usize,
}

impl SubsetBounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }
}

/// Configuration for a seeding run.
///
/// Collection identifiers and generation parameters are passed in
/// explicitly; the seeder never reads process-wide state.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Collection holding generated properties. Cleared at run start.
    pub properties_collection: String,
    /// Collection of pre-existing agents (read-only).
    pub agents_collection: String,
    /// Collection of pre-existing reviews (read-only).
    pub reviews_collection: String,
    /// Collection of pre-existing gallery images (read-only).
    pub galleries_collection: String,
    /// Number of properties generated per run.
    pub property_count: u64,
    /// Reviews assigned to each property.
    pub review_bounds: SubsetBounds,
    /// Gallery images assigned to each property.
    pub gallery_bounds: SubsetBounds,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            properties_collection: "properties".to_string(),
            agents_collection: "agents".to_string(),
            reviews_collection: "reviews".to_string(),
            galleries_collection: "galleries".to_string(),
            property_count: 20,
            review_bounds: SubsetBounds::new(5, 7),
            gallery_bounds: SubsetBounds::new(3, 8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SeedConfig::default();
        assert_eq!(config.property_count, 20);
        assert_eq!(config.review_bounds, SubsetBounds::new(5, 7));
        assert_eq!(config.gallery_bounds, SubsetBounds::new(3, 8));
        assert_eq!(config.properties_collection, "properties");
    }
}
