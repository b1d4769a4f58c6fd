//! Resource search/filter logic.
//!
//! The one real piece of client logic on the site: given the immutable
//! catalog and the two live inputs (free-text query, selected category),
//! produce the subset of records to display.

use crate::models::Resource;

/// Filter `resources` by search term and category.
///
/// A resource is included iff:
/// - `category` is `"all"` or equals the resource's category, AND
/// - `search_term` is empty or appears (case-insensitively) in the
///   resource's title or description.
///
/// Pure and deterministic; preserves catalog order. An empty result is a
/// valid outcome, rendered as the empty state by the caller.
pub fn filter_resources<'a>(
    resources: &'a [Resource],
    search_term: &str,
    category: &str,
) -> Vec<&'a Resource> {
    resources
        .iter()
        .filter(|resource| category == "all" || resource.category == category)
        .filter(|resource| resource.matches_query(search_term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;

    #[test]
    fn test_no_filter_returns_all_in_order() {
        let all = catalog::resources();
        let filtered = filter_resources(all, "", "all");
        assert_eq!(filtered.len(), all.len());
        for (original, kept) in all.iter().zip(&filtered) {
            assert_eq!(original, *kept);
        }
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let all = catalog::resources();
        let filtered = filter_resources(all, "a", "all");
        let mut last_index = None;
        for kept in filtered {
            let index = all.iter().position(|r| r.id == kept.id).expect("from catalog");
            if let Some(last) = last_index {
                assert!(index > last, "order not preserved");
            }
            last_index = Some(index);
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let all = catalog::resources();
        assert_eq!(
            filter_resources(all, "ielts", "all"),
            filter_resources(all, "IELTS", "all")
        );
        assert_eq!(filter_resources(all, "ielts", "all").len(), 1);
    }

    #[test]
    fn test_category_filter() {
        let all = catalog::resources();
        let filtered = filter_resources(all, "", "visa");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Complete Guide to UK Student Visa");
    }

    #[test]
    fn test_search_and_category_combine() {
        let all = catalog::resources();
        // "checklist" appears in the IELTS and pre-departure records
        let checklists = filter_resources(all, "checklist", "all");
        let titles: Vec<&str> = checklists.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["IELTS Preparation Checklist", "Pre-Departure Checklist"]
        );

        // Narrowing by category keeps only one of them
        let narrowed = filter_resources(all, "checklist", "test-prep");
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].id, "2");
    }

    #[test]
    fn test_description_is_searched_too() {
        let all = catalog::resources();
        // "intake" only occurs in the application-timeline description
        let filtered = filter_resources(all, "intake", "all");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "University Application Timeline");
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let all = catalog::resources();
        assert!(filter_resources(all, "zzz", "all").is_empty());
        assert!(filter_resources(all, "", "visa")
            .iter()
            .all(|r| r.category == "visa"));
    }
}
