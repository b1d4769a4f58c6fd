//! Resource catalog loading and validation.
//!
//! The catalog is bundled JSON (`assets/data/resources.json`), parsed once
//! on first access and immutable afterwards. Validation enforces the two
//! referential rules the rest of the code relies on: ids are unique and
//! every category is drawn from the closed set in
//! [`crate::config::RESOURCE_CATEGORIES`].

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config::{RESOURCE_CATEGORIES, RESOURCE_DATA};
use crate::core::error::CatalogError;
use crate::models::Resource;

static CATALOG: LazyLock<Vec<Resource>> =
    LazyLock::new(|| load(RESOURCE_DATA).expect("Bundled resource catalog must be valid"));

/// All resources, in catalog order.
pub fn resources() -> &'static [Resource] {
    &CATALOG
}

/// Parse and validate a resource catalog from JSON.
pub fn load(json: &str) -> Result<Vec<Resource>, CatalogError> {
    let resources: Vec<Resource> =
        serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;

    let mut seen_ids = HashSet::new();
    for resource in &resources {
        if !seen_ids.insert(resource.id.as_str()) {
            return Err(CatalogError::DuplicateId(resource.id.clone()));
        }
        if !is_known_category(&resource.category) {
            return Err(CatalogError::UnknownCategory {
                id: resource.id.clone(),
                category: resource.category.clone(),
            });
        }
    }

    Ok(resources)
}

/// Whether `category` is a valid record tag ("all" is a filter value only).
fn is_known_category(category: &str) -> bool {
    category != "all" && RESOURCE_CATEGORIES.iter().any(|c| c.value == category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourceKind;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = load(RESOURCE_DATA).expect("bundled catalog is valid");
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog[0].title, "Complete Guide to UK Student Visa");
        assert_eq!(catalog[0].kind, ResourceKind::Document);
        assert_eq!(catalog[3].kind, ResourceKind::Video);
        assert!(catalog[3].download_url.is_none());
    }

    #[test]
    fn test_resources_accessor_matches_load() {
        assert_eq!(resources(), load(RESOURCE_DATA).unwrap().as_slice());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
            {"id": "1", "title": "A", "description": "a", "type": "guide", "category": "visa"},
            {"id": "1", "title": "B", "description": "b", "type": "guide", "category": "visa"}
        ]"#;
        match load(json) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "1"),
            other => panic!("Expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"[
            {"id": "1", "title": "A", "description": "a", "type": "guide", "category": "housing"}
        ]"#;
        match load(json) {
            Err(CatalogError::UnknownCategory { id, category }) => {
                assert_eq!(id, "1");
                assert_eq!(category, "housing");
            }
            other => panic!("Expected UnknownCategory, got {:?}", other),
        }
    }

    #[test]
    fn test_all_is_not_a_record_category() {
        let json = r#"[
            {"id": "1", "title": "A", "description": "a", "type": "guide", "category": "all"}
        ]"#;
        assert!(matches!(
            load(json),
            Err(CatalogError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(load("not json"), Err(CatalogError::Parse(_))));
    }
}
