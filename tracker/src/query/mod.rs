//! The filter → sort → page pipeline over the record collection.
//!
//! Every derived view is recomputed from scratch: the pipeline is a pure
//! function of the full record slice and the current filter/sort/window
//! inputs, and never caches a slice of a previous run. That makes the
//! "stale window after a filter change" class of bug structurally
//! impossible: the window types in [`page`] only hold counters, never
//! records.
//!
//! The stages:
//! - [`filter`]: conjunction of four independent predicates (search text,
//!   status set, source set, age bounds).
//! - [`sort`]: stable comparator over a closed set of flat, orderable
//!   fields.
//! - [`page`]: either a fixed five-per-page window or an incremental
//!   reveal window, chosen per deployment mode.

pub mod filter;
pub mod page;
pub mod sort;

use common::model::proposal::Proposal;

pub use filter::Filters;
pub use page::{Pager, Reveal, PAGE_SIZE};
pub use sort::{SortConfig, SortDirection, SortKey};

/// Runs the filter and sort stages, producing the ordered working set the
/// page window is applied to. Filtering preserves input order; sorting is
/// stable, so records with equal keys keep their filtered order.
pub fn select(records: &[Proposal], filters: &Filters, sort: Option<&SortConfig>) -> Vec<Proposal> {
    let mut selected: Vec<Proposal> = records
        .iter()
        .filter(|p| filters.passes(p))
        .cloned()
        .collect();
    if let Some(config) = sort {
        sort::apply(&mut selected, config);
    }
    selected
}
