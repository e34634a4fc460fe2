//! Configuration for the dispatch directory.

/// Configuration for the directory and its aggregate views
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Age at which a resident stops classifying as a child.
    ///
    /// A resident is a child iff their whole-year age is strictly below this
    /// value; a resident exactly this old classifies as an adult. Every view
    /// applies this single convention.
    pub majority_age: i32,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self { majority_age: 18 }
    }
}
