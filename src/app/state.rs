//! Observable locator state and view model computation.
//!
//! This module defines [`LocatorState`], the single source of truth for one
//! block instance: the records returned by the search, the specialty filter,
//! list/grid mode, the grid page, and the viewport-derived page size and
//! control visibility.
//!
//! # Architecture
//!
//! Core data (items, filter, mode, page) is only changed through the setters,
//! each of which funnels into [`LocatorState::apply`]. `apply` performs the
//! change, keeps the derived fields consistent, and notifies subscribers:
//!
//! ```text
//! setter → Mutation → mutate (derive total_count, reset page) → StateEvent fan-out
//!                                                                    │
//!                         queued follow-up mutations (Deferred) ◄────┘
//! ```
//!
//! `total_count` is recomputed by every mutation that can change it, so the
//! read path ([`LocatorState::visible_slice`]) never writes.
//!
//! # Example
//!
//! ```rust
//! use doctor_locator::app::{LocatorState, PageSizes, ViewportTier};
//! use doctor_locator::Doctor;
//!
//! let mut state = LocatorState::new(PageSizes::default(), ViewportTier::Desktop);
//! state.set_items(vec![
//!     Doctor::new("A", "X"),
//!     Doctor::new("B", "Y"),
//!     Doctor::new("C", "X"),
//! ]);
//! state.set_filter("X");
//! assert_eq!(state.total_count(), 2);
//! ```

use super::events::{Deferred, Mutation, StateEvent, SubscriberId, Subscribers};
use super::modes::{PageSizes, ViewMode, ViewportTier};
use crate::domain::{CategoryFilter, Doctor};
use crate::ui::viewmodel::{
    DoctorCard, FilterInfo, FilterOption, PaginationInfo, SummaryInfo, ToggleInfo,
    TruncationLimits,
};
use std::collections::{HashSet, VecDeque};

/// Upper bound on mutations applied from one external call, counting the
/// call itself and everything listeners queue behind it.
pub const MAX_QUEUED_MUTATIONS: usize = 32;

/// Observable state for one block instance.
#[derive(Debug)]
pub struct LocatorState {
    /// Records in source order.
    items: Vec<Doctor>,

    filter: CategoryFilter,

    view_mode: ViewMode,

    /// Zero-based page within the filtered set. Only meaningful in grid mode.
    page_index: usize,

    page_sizes: PageSizes,

    /// Effective grid page size for the last evaluated viewport tier.
    page_size: usize,

    /// Number of items passing the current filter.
    total_count: usize,

    controls_visible: bool,

    tier: ViewportTier,

    /// Specialties offered by the dropdown. Empty means "derive from items".
    categories: Vec<String>,

    subscribers: Subscribers,
}

impl LocatorState {
    /// Creates an empty state laid out for the given viewport tier.
    #[must_use]
    pub fn new(page_sizes: PageSizes, tier: ViewportTier) -> Self {
        Self {
            items: Vec::new(),
            filter: CategoryFilter::All,
            view_mode: ViewMode::default(),
            page_index: 0,
            page_sizes,
            page_size: page_sizes.for_tier(tier),
            total_count: 0,
            controls_visible: tier.controls_visible(),
            tier,
            categories: Vec::new(),
            subscribers: Subscribers::default(),
        }
    }

    /// Fixes the dropdown specialties instead of deriving them from the items.
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    #[must_use]
    pub fn items(&self) -> &[Doctor] {
        &self.items
    }

    #[must_use]
    pub const fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    #[must_use]
    pub const fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    #[must_use]
    pub const fn tier(&self) -> ViewportTier {
        self.tier
    }

    /// Registers a listener for every subsequent [`StateEvent`].
    ///
    /// Listeners run in registration order. They receive the state after the
    /// change and a [`Deferred`] queue for follow-up mutations.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriberId
    where
        F: FnMut(StateEvent, &Self, &mut Deferred) + 'static,
    {
        let id = self.subscribers.add(Box::new(listener));
        tracing::trace!(subscriber = ?id, "listener subscribed");
        id
    }

    /// Removes a listener. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.remove(id)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Replaces the records, resets to the first page and emits
    /// [`StateEvent::ItemsChanged`].
    pub fn set_items(&mut self, items: Vec<Doctor>) {
        self.apply(Mutation::SetItems(items));
    }

    /// Changes the specialty filter, resets to the first page and emits
    /// [`StateEvent::ItemsChanged`].
    ///
    /// Unknown specialties are accepted and match nothing.
    pub fn set_filter(&mut self, filter: impl Into<CategoryFilter>) {
        self.apply(Mutation::SetFilter(filter.into()));
    }

    /// Moves to a grid page and emits [`StateEvent::PageChanged`].
    ///
    /// No upper bound is enforced here; pages past the end render empty.
    /// The pagination controls only offer reachable pages.
    pub fn set_page_index(&mut self, page_index: usize) {
        self.apply(Mutation::SetPageIndex(page_index));
    }

    /// Switches list/grid mode and emits [`StateEvent::ViewModeChanged`].
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.apply(Mutation::SetViewMode(mode));
    }

    /// Re-derives page size and control visibility for a viewport tier.
    ///
    /// Emits [`StateEvent::ItemsChanged`] once (after resetting the page) if the
    /// page size changed, and [`StateEvent::ControlsChanged`] if the control
    /// visibility flipped.
    pub fn resize(&mut self, tier: ViewportTier) {
        self.apply(Mutation::Resize(tier));
    }

    /// Applies a mutation, notifies listeners, then drains whatever they queued.
    pub fn apply(&mut self, mutation: Mutation) {
        let mut queue = VecDeque::from([mutation]);
        let mut applied = 0_usize;

        while let Some(next) = queue.pop_front() {
            if applied >= MAX_QUEUED_MUTATIONS {
                tracing::warn!(
                    dropped = queue.len() + 1,
                    limit = MAX_QUEUED_MUTATIONS,
                    "listener mutations exceeded limit, dropping the rest"
                );
                break;
            }
            applied += 1;

            for event in self.mutate(next) {
                queue.extend(self.emit(event));
            }
        }
    }

    fn mutate(&mut self, mutation: Mutation) -> Vec<StateEvent> {
        let _span = tracing::debug_span!("mutate", mutation = mutation_name(&mutation)).entered();

        match mutation {
            Mutation::SetItems(items) => {
                self.items = items;
                self.page_index = 0;
                self.recount();
                tracing::debug!(
                    items = self.items.len(),
                    total_count = self.total_count,
                    "items replaced"
                );
                vec![StateEvent::ItemsChanged]
            }
            Mutation::SetFilter(filter) => {
                self.filter = filter;
                self.page_index = 0;
                self.recount();
                tracing::debug!(
                    filter = %self.filter,
                    total_count = self.total_count,
                    "filter applied"
                );
                vec![StateEvent::ItemsChanged]
            }
            Mutation::SetPageIndex(page_index) => {
                self.page_index = page_index;
                vec![StateEvent::PageChanged]
            }
            Mutation::SetViewMode(mode) => {
                self.view_mode = mode;
                vec![StateEvent::ViewModeChanged]
            }
            Mutation::Resize(tier) => {
                self.tier = tier;
                let mut events = Vec::new();

                let page_size = self.page_sizes.for_tier(tier);
                if page_size != self.page_size {
                    tracing::debug!(from = self.page_size, to = page_size, "page size changed");
                    self.page_size = page_size;
                    self.page_index = 0;
                    events.push(StateEvent::ItemsChanged);
                }

                let controls_visible = tier.controls_visible();
                if controls_visible != self.controls_visible {
                    self.controls_visible = controls_visible;
                    events.push(StateEvent::ControlsChanged);
                }

                events
            }
        }
    }

    fn emit(&mut self, event: StateEvent) -> Vec<Mutation> {
        let _span = tracing::trace_span!("emit", event = ?event, listeners = self.subscribers.len())
            .entered();

        let mut listeners = self.subscribers.detach();
        let mut deferred = Deferred::default();
        for (_, listener) in &mut listeners {
            listener(event, self, &mut deferred);
        }
        self.subscribers.reattach(listeners);

        deferred.take()
    }

    fn recount(&mut self) {
        let filter = &self.filter;
        self.total_count = self.items.iter().filter(|d| filter.matches(d)).count();
    }

    /// Records passing the current filter, in source order.
    pub fn filtered(&self) -> impl Iterator<Item = &Doctor> {
        self.items.iter().filter(move |d| self.filter.matches(d))
    }

    /// Records the list consumers should render right now.
    ///
    /// List mode returns the whole filtered set. Grid mode returns the slice
    /// `[page_index * page_size, (page_index + 1) * page_size)` of it, which
    /// is empty for pages past the end.
    #[must_use]
    pub fn visible_slice(&self) -> Vec<&Doctor> {
        match self.view_mode {
            ViewMode::List => self.filtered().collect(),
            ViewMode::Grid => self
                .filtered()
                .skip(self.page_index.saturating_mul(self.page_size))
                .take(self.page_size)
                .collect(),
        }
    }

    /// Number of grid pages, `ceil(total_count / page_size)`.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        let page_size = self.page_size.max(1);
        (self.total_count + page_size - 1) / page_size
    }

    /// Page reached by the "previous" control, `None` on the first page.
    #[must_use]
    pub fn previous_page_target(&self) -> Option<usize> {
        let last = self.total_pages().checked_sub(1)?;
        let previous = self.page_index.checked_sub(1)?;
        Some(previous.min(last))
    }

    /// Page reached by the "next" control, `None` on the last page.
    #[must_use]
    pub fn next_page_target(&self) -> Option<usize> {
        let last = self.total_pages().checked_sub(1)?;
        (self.page_index < last).then_some(self.page_index + 1)
    }

    /// Clamps an arbitrary page request into `[0, total_pages - 1]`.
    #[must_use]
    pub fn clamp_page(&self, page_index: usize) -> Option<usize> {
        let last = self.total_pages().checked_sub(1)?;
        Some(page_index.min(last))
    }

    /// Specialties offered by the dropdown, excluding the "All" sentinel.
    ///
    /// Uses the configured list when one was given, otherwise the distinct
    /// specialties of the current items in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        if !self.categories.is_empty() {
            return self.categories.clone();
        }

        let mut seen = HashSet::new();
        self.items
            .iter()
            .filter(|d| seen.insert(d.specialty.as_str()))
            .map(|d| d.specialty.clone())
            .collect()
    }

    /// Cards for the visible slice, truncated to the field budgets.
    #[must_use]
    pub fn compute_cards(&self, limits: &TruncationLimits) -> Vec<DoctorCard> {
        self.visible_slice()
            .into_iter()
            .map(|doctor| DoctorCard::from_doctor(doctor, limits))
            .collect()
    }

    #[must_use]
    pub fn compute_pagination(&self) -> PaginationInfo {
        let total_pages = self.total_pages();
        PaginationInfo {
            current_page: self.page_index.saturating_add(1),
            total_pages,
            previous: self.previous_page_target(),
            next: self.next_page_target(),
            visible: self.controls_visible && self.view_mode == ViewMode::Grid && total_pages > 0,
        }
    }

    #[must_use]
    pub fn compute_filter(&self) -> FilterInfo {
        let mut options = vec![FilterOption {
            value: CategoryFilter::All.as_value().to_string(),
            is_all: true,
            selected: self.filter == CategoryFilter::All,
        }];

        options.extend(self.categories().into_iter().map(|specialty| FilterOption {
            selected: self.filter.as_value() == specialty && self.filter != CategoryFilter::All,
            value: specialty,
            is_all: false,
        }));

        // An unknown filter still shows as the selected option.
        if !options.iter().any(|o| o.selected) {
            options.push(FilterOption {
                value: self.filter.as_value().to_string(),
                is_all: false,
                selected: true,
            });
        }

        FilterInfo { options }
    }

    #[must_use]
    pub const fn compute_toggle(&self) -> ToggleInfo {
        ToggleInfo {
            active: self.view_mode,
            visible: self.controls_visible,
        }
    }

    #[must_use]
    pub const fn compute_summary(&self) -> SummaryInfo {
        SummaryInfo {
            total_count: self.total_count,
        }
    }
}

const fn mutation_name(mutation: &Mutation) -> &'static str {
    match mutation {
        Mutation::SetItems(_) => "set_items",
        Mutation::SetFilter(_) => "set_filter",
        Mutation::SetPageIndex(_) => "set_page_index",
        Mutation::SetViewMode(_) => "set_view_mode",
        Mutation::Resize(_) => "resize",
    }
}
