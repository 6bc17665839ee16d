//! The single state container and its derived view snapshot.

use common::model::proposal::Proposal;

use crate::query::{self, Filters, Pager, Reveal, SortConfig};
use crate::store::ProposalStore;

/// Which window strategy this deployment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Fixed five-per-page window with page navigation.
    Paged(Pager),
    /// Incremental reveal driven by a scroll sentinel.
    Infinite(Reveal),
}

/// All state the tracker has: the record collection plus the current
/// filter, sort and window inputs. Mutated only through
/// [`update`](crate::controller::update).
#[derive(Debug, Clone)]
pub struct TrackerState {
    pub store: ProposalStore,
    pub filters: Filters,
    pub sort: Option<SortConfig>,
    pub mode: ViewMode,
}

impl TrackerState {
    /// Fixed-page tracker over the given store.
    pub fn new(store: ProposalStore) -> Self {
        Self::with_mode(store, ViewMode::Paged(Pager::new()))
    }

    pub fn with_mode(store: ProposalStore, mode: ViewMode) -> Self {
        Self {
            store,
            filters: Filters::default(),
            sort: None,
            mode,
        }
    }

    /// Derives the view from scratch: filter, sort, then the active window.
    /// Nothing here is cached between calls.
    pub fn view(&self) -> ProposalView {
        let selected = query::select(self.store.records(), &self.filters, self.sort.as_ref());
        let total = selected.len();
        match &self.mode {
            ViewMode::Paged(pager) => {
                let total_pages = Pager::total_pages(total);
                // Slice with the clamped page, not the stored one, so the
                // items and the reported page always agree even if the
                // working set shrank since the last navigation.
                let mut window = *pager;
                window.clamp(total);
                ProposalView {
                    items: window.slice(&selected).to_vec(),
                    total,
                    window: ViewWindow::Paged {
                        current_page: window.current_page(),
                        total_pages,
                    },
                }
            }
            ViewMode::Infinite(reveal) => ProposalView {
                items: reveal.slice(&selected).to_vec(),
                total,
                window: ViewWindow::Infinite {
                    visible: reveal.visible(total),
                },
            },
        }
    }

    /// Size of the working set under the current filters, before windowing.
    pub fn filtered_len(&self) -> usize {
        self.store
            .records()
            .iter()
            .filter(|p| self.filters.passes(p))
            .count()
    }

    /// Re-anchors the window after a filter, search or sort input changed:
    /// the reveal window drops back to its initial size and the pager is
    /// pulled into range of the new working set.
    pub fn sync_window(&mut self) {
        let total = self.filtered_len();
        match &mut self.mode {
            ViewMode::Paged(pager) => pager.clamp(total),
            ViewMode::Infinite(reveal) => reveal.reset(),
        }
    }

    /// Pulls the pager back into range after a record mutation changed the
    /// working set. Unlike [`sync_window`](Self::sync_window) this leaves
    /// the reveal window alone: a status change is not a filter input, so
    /// already-revealed records stay revealed.
    pub fn clamp_page(&mut self) {
        let total = self.filtered_len();
        if let ViewMode::Paged(pager) = &mut self.mode {
            pager.clamp(total);
        }
    }
}

/// Snapshot handed to the rendering surface: the visible records plus the
/// metadata the pagination controls need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalView {
    pub items: Vec<Proposal>,
    /// Filtered count before windowing.
    pub total: usize,
    pub window: ViewWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewWindow {
    Paged {
        current_page: usize,
        total_pages: usize,
    },
    Infinite {
        visible: usize,
    },
}
