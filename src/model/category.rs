//! Category metadata and the read-only stores that serve it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifier shared by annotations, categories and filter options.
pub type CategoryId = u32;

/// An annotation category with a name and color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier for the category
    pub id: CategoryId,
    /// Display name of the category
    pub name: String,
    /// CSS color string, e.g. `#e6194b`
    pub color: String,
}

impl Category {
    /// Create a new category with the given ID, name, and color.
    pub fn new(id: CategoryId, name: &str, color: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

/// One option of the active category filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFilterOption {
    pub id: CategoryId,
    pub color: String,
}

impl CategoryFilterOption {
    pub fn new(id: CategoryId, color: &str) -> Self {
        Self {
            id,
            color: color.to_string(),
        }
    }
}

/// Read-only lookup of categories by id.
pub trait CategoryStore {
    /// Find the category with the given id.
    fn category(&self, id: CategoryId) -> Option<&Category>;
}

/// Read-only lookup of the active filter options by category id.
pub trait CategoryFilter {
    /// Find the filter option for the given category id.
    fn option(&self, id: CategoryId) -> Option<&CategoryFilterOption>;
}

impl CategoryStore for HashMap<CategoryId, Category> {
    fn category(&self, id: CategoryId) -> Option<&Category> {
        self.get(&id)
    }
}

impl CategoryStore for [Category] {
    fn category(&self, id: CategoryId) -> Option<&Category> {
        self.iter().find(|c| c.id == id)
    }
}

impl CategoryStore for Vec<Category> {
    fn category(&self, id: CategoryId) -> Option<&Category> {
        self.as_slice().category(id)
    }
}

impl CategoryFilter for [CategoryFilterOption] {
    fn option(&self, id: CategoryId) -> Option<&CategoryFilterOption> {
        self.iter().find(|o| o.id == id)
    }
}

impl CategoryFilter for Vec<CategoryFilterOption> {
    fn option(&self, id: CategoryId) -> Option<&CategoryFilterOption> {
        self.as_slice().option(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashmap_store_lookup() {
        let mut store: HashMap<CategoryId, Category> = HashMap::new();
        store.insert(1, Category::new(1, "person", "#ff0000"));

        assert_eq!(store.category(1).map(|c| c.name.as_str()), Some("person"));
        assert!(store.category(2).is_none());
    }

    #[test]
    fn test_slice_store_lookup_by_id_not_index() {
        let store = vec![
            Category::new(5, "car", "#00ff00"),
            Category::new(0, "bike", "#0000ff"),
        ];

        assert_eq!(store.category(0).map(|c| c.name.as_str()), Some("bike"));
        assert_eq!(store.category(5).map(|c| c.name.as_str()), Some("car"));
    }

    #[test]
    fn test_filter_first_match_wins() {
        let filter = vec![
            CategoryFilterOption::new(1, "#111111"),
            CategoryFilterOption::new(1, "#222222"),
        ];

        assert_eq!(filter.option(1).map(|o| o.color.as_str()), Some("#111111"));
        assert!(filter.option(9).is_none());
    }
}
