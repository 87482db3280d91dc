//! Catalog data model and provider seam.
//!
//! The catalog is an ordered, immutable snapshot of items. Updates replace
//! the whole snapshot; a match pass holds one snapshot for its entire run
//! and never observes a partial update.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A single title in the catalog.
///
/// `title` and `genre` are always present; `cast` and `description` are
/// optional and simply never match when absent. The remaining fields are
/// presentation metadata carried through to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub title: String,
    pub genre: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Single text field, not a list.
    #[serde(default)]
    pub cast: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Watch progress percentage for continue-watching rows.
    #[serde(default)]
    pub progress: Option<u8>,
}

impl CatalogItem {
    pub fn new(id: u32, title: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            genre: genre.into(),
            description: None,
            cast: None,
            year: None,
            rating: None,
            image: None,
            progress: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_cast(mut self, cast: impl Into<String>) -> Self {
        self.cast = Some(cast.into());
        self
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_progress(mut self, progress: u8) -> Self {
        self.progress = Some(progress);
        self
    }
}

/// An immutable, ordered catalog snapshot.
///
/// Cloning shares the underlying slice, so handing a snapshot to a match
/// pass is cheap and a concurrent-feeling "swap" is just replacing the
/// session's `Catalog` value.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Arc<[CatalogItem]>,
}

impl Catalog {
    /// Build a snapshot from an item list, keeping the given order.
    ///
    /// Duplicate ids are tolerated (lookups return the first occurrence)
    /// but logged, since they usually indicate a bad upstream merge.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                tracing::warn!("duplicate catalog id {} ('{}')", item.id, item.title);
            }
        }
        Self {
            items: items.into(),
        }
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item with the given id, if any.
    pub fn by_id(&self, id: u32) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

/// Source of catalog snapshots.
///
/// The session pulls one full snapshot at construction; later changes
/// arrive as wholesale replacements, never as incremental edits.
pub trait CatalogProvider {
    fn all_items(&self) -> Vec<CatalogItem>;
}

/// A fixed in-memory catalog source.
pub struct StaticCatalog {
    items: Vec<CatalogItem>,
}

impl StaticCatalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }
}

impl CatalogProvider for StaticCatalog {
    fn all_items(&self) -> Vec<CatalogItem> {
        self.items.clone()
    }
}
