//! Block controller.
//!
//! [`LocatorBlock`] owns one [`LocatorState`], the views subscribed to it,
//! the search provider and the viewport. It is the boundary the page talks
//! to: nothing it does returns an error.
//!
//! # Lifecycle
//!
//! 1. [`LocatorBlock::new`]: state laid out for the current viewport, every
//!    view attached and rendered once (empty state)
//! 2. [`LocatorBlock::initialize`]: one search, results pushed into the state
//! 3. [`handle_event`](crate::app::handle_event): user and resize events

use super::modes::PageSizes;
use super::resize::{ResizeAdapter, Viewport};
use super::state::LocatorState;
use crate::domain::Doctor;
use crate::search::{SearchProvider, SearchQuery};
use crate::ui::components::{
    attach, FilterView, ListView, PaginationView, SummaryView, ToggleView, View,
};
use crate::ui::renderer::{HtmlCards, TemplateRenderer};
use crate::Config;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::Instrument;

/// One "find a doctor" block instance.
pub struct LocatorBlock {
    state: LocatorState,
    provider: Box<dyn SearchProvider>,
    viewport: Box<dyn Viewport>,
    resize: ResizeAdapter,
    list: Rc<RefCell<ListView>>,
    pagination: Rc<RefCell<PaginationView>>,
    filter: Rc<RefCell<FilterView>>,
    toggle: Rc<RefCell<ToggleView>>,
    summary: Rc<RefCell<SummaryView>>,
}

impl LocatorBlock {
    /// Builds a block with the stock card markup.
    ///
    /// The layout tier is read from `viewport` alone. Use
    /// [`Config::viewport`] to honour a configured breakpoint.
    ///
    /// # Example
    ///
    /// ```rust
    /// use doctor_locator::app::{LocatorBlock, ViewportWidth};
    /// use doctor_locator::search::DirectorySearch;
    /// use doctor_locator::Config;
    ///
    /// let block = LocatorBlock::new(
    ///     &Config::default(),
    ///     DirectorySearch::default(),
    ///     ViewportWidth::new(1280),
    /// );
    /// assert!(block.items().is_empty());
    /// assert!(block.html().contains("No results found"));
    /// ```
    pub fn new<P, V>(config: &Config, provider: P, viewport: V) -> Self
    where
        P: SearchProvider + 'static,
        V: Viewport + 'static,
    {
        Self::with_renderer(config, provider, viewport, Rc::new(HtmlCards))
    }

    /// Builds a block whose cards are rendered by `renderer`.
    pub fn with_renderer<P, V>(
        config: &Config,
        provider: P,
        viewport: V,
        renderer: Rc<dyn TemplateRenderer>,
    ) -> Self
    where
        P: SearchProvider + 'static,
        V: Viewport + 'static,
    {
        let tier = viewport.tier();
        let _span = tracing::debug_span!("block_new", ?tier).entered();

        let labels = Rc::new(config.labels());
        let page_sizes = PageSizes::new(config.page_size_desktop, config.page_size_mobile);
        let mut state =
            LocatorState::new(page_sizes, tier).with_categories(config.specialties.clone());

        let resize = ResizeAdapter;
        resize.on_resize(&viewport, &mut state);

        let list = Rc::new(RefCell::new(ListView::new(
            renderer,
            Rc::clone(&labels),
            config.truncation,
        )));
        let pagination = Rc::new(RefCell::new(PaginationView::new(Rc::clone(&labels))));
        let filter = Rc::new(RefCell::new(FilterView::new(Rc::clone(&labels))));
        let toggle = Rc::new(RefCell::new(ToggleView::new(Rc::clone(&labels))));
        let summary = Rc::new(RefCell::new(SummaryView::new(labels)));

        attach(&mut state, &filter);
        attach(&mut state, &toggle);
        attach(&mut state, &summary);
        attach(&mut state, &list);
        attach(&mut state, &pagination);

        tracing::debug!(
            page_size = state.page_size(),
            view_mode = %state.view_mode(),
            subscribers = state.subscriber_count(),
            "block constructed"
        );

        Self {
            state,
            provider: Box::new(provider),
            viewport: Box::new(viewport),
            resize,
            list,
            pagination,
            filter,
            toggle,
            summary,
        }
    }

    /// Runs the search and loads its results.
    ///
    /// A failed search is logged at `warn` and treated as "no results", so
    /// the block always ends up initialized and showing either cards or the
    /// empty state.
    pub async fn initialize(&mut self, query: &SearchQuery) {
        let span = tracing::debug_span!("block_initialize", ?query);

        let items = async {
            match self.provider.search(query).await {
                Ok(doctors) => {
                    tracing::debug!(results = doctors.len(), "search completed");
                    doctors
                }
                Err(e) => {
                    tracing::warn!(error = %e, "search failed, showing empty results");
                    Vec::new()
                }
            }
        }
        .instrument(span)
        .await;

        self.state.set_items(items);
    }

    /// Re-reads the viewport and applies the layout policy.
    ///
    /// Returns whether anything visible changed.
    pub fn on_viewport_changed(&mut self) -> bool {
        let before = (
            self.state.page_size(),
            self.state.controls_visible(),
            self.state.view_mode(),
        );
        self.resize.on_resize(&*self.viewport, &mut self.state);
        let after = (
            self.state.page_size(),
            self.state.controls_visible(),
            self.state.view_mode(),
        );
        before != after
    }

    /// The block markup, assembled from each view's current subtree.
    #[must_use]
    pub fn html(&self) -> String {
        format!(
            r#"<section class="find-a-doctor" data-view="{mode}"><div class="find-a-doctor-controls">{filter}{toggle}</div>{summary}{list}{pagination}</section>"#,
            mode = self.state.view_mode(),
            filter = self.filter.borrow().subtree().html(),
            toggle = self.toggle.borrow().subtree().html(),
            summary = self.summary.borrow().subtree().html(),
            list = self.list.borrow().subtree().html(),
            pagination = self.pagination.borrow().subtree().html(),
        )
    }

    #[must_use]
    pub fn items(&self) -> &[Doctor] {
        self.state.items()
    }

    #[must_use]
    pub const fn state(&self) -> &LocatorState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut LocatorState {
        &mut self.state
    }

    /// Markup of the card list alone.
    #[must_use]
    pub fn list_html(&self) -> String {
        self.list.borrow().subtree().html().to_string()
    }

    /// Markup of the pagination controls alone.
    #[must_use]
    pub fn pagination_html(&self) -> String {
        self.pagination.borrow().subtree().html().to_string()
    }

    /// How many times the card list has been re-rendered.
    #[must_use]
    pub fn list_renders(&self) -> usize {
        self.list.borrow().subtree().renders()
    }
}

impl std::fmt::Debug for LocatorBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocatorBlock")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::ViewMode;
    use crate::app::resize::ViewportWidth;
    use crate::domain::error::{LocatorError, Result};
    use crate::search::DirectorySearch;
    use futures::executor::block_on;
    use futures_util::future::{BoxFuture, FutureExt};

    struct Unavailable;

    impl SearchProvider for Unavailable {
        fn search<'a>(&'a self, _query: &'a SearchQuery) -> BoxFuture<'a, Result<Vec<Doctor>>> {
            async { Err(LocatorError::Search("upstream timed out".to_string())) }.boxed()
        }
    }

    fn directory() -> DirectorySearch {
        DirectorySearch::new(vec![
            Doctor::new("A", "X"),
            Doctor::new("B", "Y"),
            Doctor::new("C", "X"),
        ])
    }

    #[test]
    fn failing_search_leaves_block_empty() {
        let mut block = LocatorBlock::new(&Config::default(), Unavailable, ViewportWidth::new(1280));
        block_on(block.initialize(&SearchQuery::default()));

        assert!(block.items().is_empty());
        assert!(block.list_html().contains("No results found"));
    }

    #[test]
    fn initialize_renders_results() {
        let mut block = LocatorBlock::new(&Config::default(), directory(), ViewportWidth::new(1280));
        block_on(block.initialize(&SearchQuery::default()));

        assert_eq!(block.items().len(), 3);
        let html = block.html();
        assert!(html.contains("3 doctors found"));
        assert!(html.contains(r#"<option value="Y">Y</option>"#));
    }

    #[test]
    fn narrow_viewport_starts_in_grid() {
        let block = LocatorBlock::new(&Config::default(), directory(), ViewportWidth::new(600));
        assert_eq!(block.state().view_mode(), ViewMode::Grid);
        assert!(!block.state().controls_visible());
        assert_eq!(block.state().page_size(), 5);
    }

    #[test]
    fn viewport_change_reports_visible_changes() {
        let viewport = Rc::new(ViewportWidth::new(1280));
        let mut block = LocatorBlock::new(&Config::default(), directory(), Rc::clone(&viewport));

        assert!(!block.on_viewport_changed());
        viewport.set_width(700);
        assert!(block.on_viewport_changed());
        assert!(!block.on_viewport_changed());
    }
}
