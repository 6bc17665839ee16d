use common::model::proposal::Proposal;
use common::model::source::Source;
use common::model::status::Status;

use crate::query::SortKey;

/// Every user action the list view and form can produce.
#[derive(Debug, Clone)]
pub enum Msg {
    SetSearch(String),
    ToggleStatusFilter(Status),
    ToggleSourceFilter(Source),
    /// Raw text of the minimum-age input; non-numeric clears the bound.
    SetMinAge(String),
    /// Raw text of the maximum-age input; non-numeric clears the bound.
    SetMaxAge(String),
    ClearFilters,
    /// A column-header click.
    SortBy(SortKey),
    GoToPage(usize),
    /// The "more needed" signal from the infinite-scroll sentinel.
    RevealMore,
    /// A validated form submission: adds when the id is new, replaces when
    /// it already exists.
    Submit(Proposal),
    SetStatus { id: String, status: Status },
}
