//! Renderer seam.
//!
//! The session decides *what* is shown: which rows, which highlight,
//! whether the panel is visible. Everything about *how* (markup, styling,
//! truncation hints) lives behind this trait.

use crate::catalog::CatalogItem;

/// Rendering surface for the search panel.
///
/// Rendering any list (results, empty state, recents) shows the panel and
/// clears any previous highlight.
pub trait SearchView {
    /// Show matching rows for `query`.
    ///
    /// `shown` is the display slice after the render cap; `total` is the
    /// true match count so the surface can hint at truncation.
    fn render_results(&mut self, shown: &[CatalogItem], total: usize, query: &str);

    /// Show the empty state for `query`.
    fn render_no_results(&mut self, query: &str);

    /// Show the recent-search list, most recent first. An empty `terms`
    /// renders the "no recent searches" placeholder, panel still shown.
    fn render_recent(&mut self, terms: &[String]);

    /// Move the highlight to `index` within the currently rendered list.
    fn set_highlight(&mut self, index: Option<usize>);

    /// Hide the panel. Rendered content may be retained for a later show.
    fn hide(&mut self);
}

/// A view that renders nothing. Useful in tests and benches.
pub struct NullView;

impl SearchView for NullView {
    fn render_results(&mut self, _shown: &[CatalogItem], _total: usize, _query: &str) {}

    fn render_no_results(&mut self, _query: &str) {}

    fn render_recent(&mut self, _terms: &[String]) {}

    fn set_highlight(&mut self, _index: Option<usize>) {}

    fn hide(&mut self) {}
}
