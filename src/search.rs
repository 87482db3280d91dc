//! Substring match engine.
//!
//! One pass over a catalog snapshot: case-insensitive containment against
//! title, genre, cast and description, in catalog order. No scoring and no
//! reordering; a title hit and a description hit are equivalent. Display
//! truncation happens at render time via [`ResultSet::capped`], never here.

use crate::catalog::{Catalog, CatalogItem};

/// A query in raw and match-normalized form.
///
/// Normalization is trim + lowercase; it happens once here so the pass
/// compares against a single needle instead of re-folding per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    normalized: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = raw.trim().to_lowercase();
        Self { raw, normalized }
    }

    /// The text as typed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Trimmed, lowercased form used for matching.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// True when nothing would be matched (empty or whitespace-only input).
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

fn matches(item: &CatalogItem, needle: &str) -> bool {
    item.title.to_lowercase().contains(needle)
        || item.genre.to_lowercase().contains(needle)
        || item
            .cast
            .as_deref()
            .is_some_and(|cast| cast.to_lowercase().contains(needle))
        || item
            .description
            .as_deref()
            .is_some_and(|desc| desc.to_lowercase().contains(needle))
}

/// Run a match pass over the catalog.
///
/// The query must be non-empty in normalized form; empty input routes to
/// the recent-searches path in the session and never reaches the engine.
pub fn search(catalog: &Catalog, query: &SearchQuery) -> ResultSet {
    debug_assert!(!query.is_empty(), "empty query reached the match engine");

    let needle = query.normalized();
    let items: Vec<CatalogItem> = catalog
        .items()
        .iter()
        .filter(|item| matches(item, needle))
        .cloned()
        .collect();

    tracing::debug!("'{}' matched {} of {} items", query.raw(), items.len(), catalog.len());

    ResultSet {
        query: query.clone(),
        items,
    }
}

/// All matches for one query, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    query: SearchQuery,
    items: Vec<CatalogItem>,
}

impl ResultSet {
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Total match count, before any display cap.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Matches in catalog order, uncapped.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// The display slice: at most `cap` leading matches.
    pub fn capped(&self, cap: usize) -> &[CatalogItem] {
        &self.items[..self.items.len().min(cap)]
    }

    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Catalog {
        Catalog::new(vec![
            CatalogItem::new(1, "Stranger Things", "Sci-Fi & Horror")
                .with_description("A small town uncovers a mystery involving secret experiments."),
            CatalogItem::new(2, "The Witcher", "Fantasy")
                .with_cast("Henry Cavill, Anya Chalotra"),
            CatalogItem::new(3, "Breaking Bad", "Crime Drama")
                .with_description("A chemistry teacher turns to a life of crime."),
            CatalogItem::new(4, "Dark", "Sci-Fi & Thriller"),
        ])
    }

    fn titles(results: &ResultSet) -> Vec<&str> {
        results.items().iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_title_match_case_insensitive() {
        let results = search(&fixture(), &SearchQuery::new("WITCHER"));
        assert_eq!(titles(&results), ["The Witcher"]);
    }

    #[test]
    fn test_substring_matches_mid_word() {
        // "range" sits inside "Stranger"
        let results = search(&fixture(), &SearchQuery::new("range"));
        assert_eq!(titles(&results), ["Stranger Things"]);
    }

    #[test]
    fn test_genre_match() {
        let results = search(&fixture(), &SearchQuery::new("sci-fi"));
        assert_eq!(titles(&results), ["Stranger Things", "Dark"]);
    }

    #[test]
    fn test_cast_match() {
        let results = search(&fixture(), &SearchQuery::new("cavill"));
        assert_eq!(titles(&results), ["The Witcher"]);
    }

    #[test]
    fn test_description_match() {
        let results = search(&fixture(), &SearchQuery::new("chemistry"));
        assert_eq!(titles(&results), ["Breaking Bad"]);
    }

    #[test]
    fn test_absent_optional_fields_never_match() {
        // "Dark" has no cast and no description; a needle found only in
        // other items' optional fields must not pull it in.
        let results = search(&fixture(), &SearchQuery::new("mystery"));
        assert_eq!(titles(&results), ["Stranger Things"]);
    }

    #[test]
    fn test_catalog_order_preserved() {
        // "a" appears in every item somewhere; order must stay catalog order
        let results = search(&fixture(), &SearchQuery::new("a"));
        assert_eq!(
            titles(&results),
            ["Stranger Things", "The Witcher", "Breaking Bad", "Dark"]
        );
    }

    #[test]
    fn test_same_inputs_same_results() {
        let query = SearchQuery::new("sci-fi");
        let first = search(&fixture(), &query);
        let second = search(&fixture(), &query);
        assert_eq!(titles(&first), titles(&second));
        assert_eq!(first.total(), second.total());
    }

    #[test]
    fn test_no_matches() {
        let results = search(&fixture(), &SearchQuery::new("zzz"));
        assert!(results.is_empty());
        assert_eq!(results.total(), 0);
    }

    #[test]
    fn test_query_normalization() {
        let query = SearchQuery::new("  DaRk \t");
        assert_eq!(query.raw(), "  DaRk \t");
        assert_eq!(query.normalized(), "dark");
        assert!(!query.is_empty());

        assert!(SearchQuery::new("   ").is_empty());
        assert!(SearchQuery::new("").is_empty());
    }

    #[test]
    fn test_capped_slice_and_total() {
        let items = (0..25)
            .map(|i| CatalogItem::new(i, format!("Item {i}"), "Drama"))
            .collect();
        let results = search(&Catalog::new(items), &SearchQuery::new("item"));

        assert_eq!(results.total(), 25);
        assert_eq!(results.capped(10).len(), 10);
        assert_eq!(results.capped(10)[0].title, "Item 0");
        // A cap beyond the total is not an error
        assert_eq!(results.capped(100).len(), 25);
    }
}
