//! Search session controller.
//!
//! Owns every state machine in the subsystem and exposes the host-facing
//! surface: query edits, timer ticks, navigation, confirm and dismiss,
//! focus changes, catalog swaps. Everything runs on the host's single
//! thread; methods never block and never raise. Failures inside (storage,
//! bad persisted data) degrade and log instead of surfacing.

use std::time::{Duration, Instant};

use crate::catalog::{Catalog, CatalogItem, CatalogProvider};
use crate::config::Config;
use crate::debounce::{DelayTimer, QueryDebouncer};
use crate::nav::{Direction, SelectionCursor};
use crate::recent::RecentSearches;
use crate::search::{self, ResultSet, SearchQuery};
use crate::store::KeyValueStore;
use crate::view::SearchView;

/// What the view is currently showing.
#[derive(Debug, Clone, Default)]
pub enum Displayed {
    /// Nothing rendered yet, or content dropped after a selection.
    #[default]
    Nothing,
    /// Match rows for the contained result set.
    Results(ResultSet),
    /// The empty state for a query with no matches.
    NoResults(String),
    /// The recent-search list.
    Recent,
}

/// The search session: one input box, one results panel, one catalog.
pub struct SearchSession {
    config: Config,
    catalog: Catalog,
    debouncer: QueryDebouncer,
    blur_timer: DelayTimer,
    cursor: SelectionCursor,
    recent: RecentSearches,
    store: Box<dyn KeyValueStore>,
    view: Box<dyn SearchView>,
    query: String,
    displayed: Displayed,
    visible: bool,
}

impl SearchSession {
    /// Build a session: pull the initial catalog snapshot, load persisted
    /// history, and leave the panel hidden until input arrives.
    pub fn new(
        config: Config,
        provider: &dyn CatalogProvider,
        store: Box<dyn KeyValueStore>,
        view: Box<dyn SearchView>,
    ) -> Self {
        let catalog = Catalog::new(provider.all_items());
        let recent = RecentSearches::load(store.as_ref(), config.history.max_entries as usize);
        let debouncer = QueryDebouncer::new(Duration::from_millis(config.search.debounce_ms));

        tracing::debug!(
            "session start: {} catalog items, {} recent searches",
            catalog.len(),
            recent.len()
        );

        Self {
            config,
            catalog,
            debouncer,
            blur_timer: DelayTimer::new(),
            cursor: SelectionCursor::new(),
            recent,
            store,
            view,
            query: String::new(),
            displayed: Displayed::Nothing,
            visible: false,
        }
    }

    /// Record an input edit. Evaluation is deferred by the debounce delay;
    /// whatever is on screen stays until the new pass completes.
    pub fn on_query_changed(&mut self, text: &str, now: Instant) {
        self.query = text.to_string();
        self.debouncer.submit(text, now);
    }

    /// Drive the delayed tasks from the host's event loop. One call can
    /// settle a query and fire the focus-loss grace in the same turn.
    pub fn tick(&mut self, now: Instant) {
        if let Some(settled) = self.debouncer.poll(now) {
            self.evaluate(&settled);
        }

        if self.blur_timer.fire(now) {
            tracing::debug!("focus-loss grace elapsed, hiding");
            self.dismiss();
        }
    }

    /// Move the highlight over whatever list is displayed. Hidden panels
    /// and empty lists ignore navigation.
    pub fn on_navigate(&mut self, direction: Direction) {
        let len = self.displayed_len();
        if len == 0 {
            return;
        }

        self.cursor.advance(direction, len);
        self.view.set_highlight(self.cursor.index());
    }

    /// Activate the highlighted row.
    ///
    /// A highlighted catalog item is returned to the host, with its title
    /// recorded in the recent list, the input cleared and the panel hidden.
    /// A highlighted recent term is resubmitted as an immediate search.
    /// With nothing highlighted this is a no-op.
    pub fn on_confirm(&mut self) -> Option<CatalogItem> {
        let index = self.cursor.confirm()?;
        self.activate(index)
    }

    /// Activate a rendered row directly (mouse click).
    pub fn on_row_clicked(&mut self, index: usize) -> Option<CatalogItem> {
        if index >= self.displayed_len() {
            return None;
        }
        self.cursor.reset();
        self.activate(index)
    }

    /// Dismiss the panel (escape, outside click). The query text survives;
    /// any pending delayed work is cancelled.
    pub fn on_dismiss(&mut self) {
        self.debouncer.cancel();
        self.blur_timer.cancel();
        self.hide();
    }

    /// Focus returned to the input: cancel any pending grace-hide, re-show
    /// what was on screen, or the recent list when the query is empty.
    pub fn on_focus_gained(&mut self) {
        self.blur_timer.cancel();

        if self.query.trim().is_empty() {
            self.show_recent();
        } else {
            self.redisplay();
        }
    }

    /// Focus left the input: hide after a short grace so a click on a
    /// result row can land first.
    pub fn on_focus_lost(&mut self, now: Instant) {
        self.blur_timer
            .arm(now, Duration::from_millis(self.config.search.blur_grace_ms));
    }

    /// Run a recent term immediately, bypassing the debounce.
    pub fn submit_recent(&mut self, term: &str) {
        tracing::debug!("resubmitting recent search '{}'", term);
        self.query = term.to_string();
        self.debouncer.cancel();
        self.evaluate(term);
    }

    /// Clear stored history. A recents panel on screen re-renders to its
    /// placeholder state; a hidden panel stays hidden.
    pub fn clear_recent(&mut self) {
        self.recent.clear(self.store.as_mut());
        if self.visible && matches!(self.displayed, Displayed::Recent) {
            self.show_recent();
        }
    }

    /// Swap in a new catalog snapshot. Takes effect on the next match pass;
    /// whatever is on screen stays as rendered.
    pub fn on_catalog_updated(&mut self, items: Vec<CatalogItem>) {
        self.catalog = Catalog::new(items);
        tracing::debug!("catalog snapshot replaced ({} items)", self.catalog.len());
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Currently highlighted row, if any.
    pub fn highlighted(&self) -> Option<usize> {
        self.cursor.index()
    }

    pub fn recent_terms(&self) -> &[String] {
        self.recent.terms()
    }

    pub fn displayed(&self) -> &Displayed {
        &self.displayed
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluate a settled query: run the pass, or show recents for empty
    /// input. Selection always resets before the new list renders.
    fn evaluate(&mut self, text: &str) {
        let query = SearchQuery::new(text);
        if query.is_empty() {
            self.show_recent();
            return;
        }

        let results = search::search(&self.catalog, &query);
        self.cursor.reset();

        if results.is_empty() {
            self.view.render_no_results(query.raw());
            self.displayed = Displayed::NoResults(query.raw().to_string());
        } else {
            let cap = self.config.search.max_results as usize;
            self.view
                .render_results(results.capped(cap), results.total(), query.raw());
            self.displayed = Displayed::Results(results);
        }

        self.visible = true;
    }

    fn show_recent(&mut self) {
        self.cursor.reset();
        self.view.render_recent(self.recent.terms());
        self.displayed = Displayed::Recent;
        self.visible = true;
    }

    /// Re-render the retained content after a hide, keeping state intact.
    fn redisplay(&mut self) {
        match self.displayed.clone() {
            Displayed::Nothing => {}
            Displayed::Results(results) => {
                let cap = self.config.search.max_results as usize;
                self.view
                    .render_results(results.capped(cap), results.total(), results.query().raw());
                self.view.set_highlight(self.cursor.index());
                self.visible = true;
            }
            Displayed::NoResults(query) => {
                self.view.render_no_results(&query);
                self.visible = true;
            }
            Displayed::Recent => self.show_recent(),
        }
    }

    fn activate(&mut self, index: usize) -> Option<CatalogItem> {
        match &self.displayed {
            Displayed::Results(results) => {
                let item = results.get(index)?.clone();
                self.finish_selection(&item);
                Some(item)
            }
            Displayed::Recent => {
                let term = self.recent.get(index)?.to_string();
                self.submit_recent(&term);
                None
            }
            Displayed::Nothing | Displayed::NoResults(_) => None,
        }
    }

    fn finish_selection(&mut self, item: &CatalogItem) {
        tracing::debug!("selected '{}' (id {})", item.title, item.id);
        self.recent.record(&item.title, self.store.as_mut());
        self.query.clear();
        self.debouncer.cancel();
        self.displayed = Displayed::Nothing;
        self.hide();
    }

    fn dismiss(&mut self) {
        self.debouncer.cancel();
        self.hide();
    }

    /// Hide the panel, keeping displayed content for a later refocus.
    fn hide(&mut self) {
        self.cursor.reset();
        self.view.hide();
        self.visible = false;
    }

    /// Rows reachable by navigation: the capped result rows or the recent
    /// terms. Zero while hidden or on an empty state.
    fn displayed_len(&self) -> usize {
        if !self.visible {
            return 0;
        }

        match &self.displayed {
            Displayed::Results(results) => {
                results.capped(self.config.search.max_results as usize).len()
            }
            Displayed::Recent => self.recent.len(),
            Displayed::Nothing | Displayed::NoResults(_) => 0,
        }
    }
}
