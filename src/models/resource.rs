//! Static resource records for the downloads/guides listing.
//!
//! Resources are immutable: the catalog is bundled into the binary and
//! deserialized once at startup (see [`crate::core::catalog`]). Nothing
//! creates, mutates, or removes records at runtime.

use serde::Deserialize;

/// Kind of resource, which drives the card icon and badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Document,
    Video,
    Guide,
    Checklist,
}

impl ResourceKind {
    /// Uppercase badge label shown on resource cards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Document => "DOCUMENT",
            Self::Video => "VIDEO",
            Self::Guide => "GUIDE",
            Self::Checklist => "CHECKLIST",
        }
    }
}

/// A downloadable or viewable study-abroad guidance item.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// One of the closed category set in [`crate::config::RESOURCE_CATEGORIES`].
    pub category: String,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub external_url: Option<String>,
    /// Human-readable file size (e.g. "2.5 MB"); absent for external links.
    #[serde(default)]
    pub size: Option<String>,
}

impl Resource {
    /// Case-insensitive substring match against title or description.
    ///
    /// An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Resource {
        Resource {
            id: "1".to_string(),
            title: "IELTS Preparation Checklist".to_string(),
            description: "Essential checklist for IELTS exam preparation".to_string(),
            kind: ResourceKind::Checklist,
            category: "test-prep".to_string(),
            download_url: Some("#".to_string()),
            external_url: None,
            size: Some("1.2 MB".to_string()),
        }
    }

    #[test]
    fn test_matches_query_case_insensitive() {
        let resource = sample();
        assert!(resource.matches_query("ielts"));
        assert!(resource.matches_query("IELTS"));
        assert!(resource.matches_query("Exam"));
        assert!(!resource.matches_query("visa"));
    }

    #[test]
    fn test_empty_query_matches() {
        assert!(sample().matches_query(""));
    }

    #[test]
    fn test_deserialize_kind_and_optionals() {
        let json = r##"{
            "id": "9",
            "title": "T",
            "description": "D",
            "type": "video",
            "category": "scholarship",
            "externalUrl": "#"
        }"##;
        let resource: Resource = serde_json::from_str(json).expect("valid resource JSON");
        assert_eq!(resource.kind, ResourceKind::Video);
        assert_eq!(resource.external_url.as_deref(), Some("#"));
        assert_eq!(resource.download_url, None);
        assert_eq!(resource.size, None);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ResourceKind::Document.label(), "DOCUMENT");
        assert_eq!(ResourceKind::Checklist.label(), "CHECKLIST");
    }
}
