//! The single transition function: current state + message -> next state.
//!
//! Mirrors the usual Elm contract: `update` mutates the container in place
//! and returns `true` when the derived view needs re-rendering, `false`
//! when the message turned out to be a no-op (unknown id, out-of-range
//! page, fully revealed list).
//!
//! Every message that changes a pipeline input (search, filters, sort)
//! ends with a `sync_window` so the window is re-anchored to the new
//! working set; the pipeline never serves a window computed against a
//! previous filter state.

use crate::query::{Filters, SortConfig};

use super::messages::Msg;
use super::state::{TrackerState, ViewMode};

pub fn update(state: &mut TrackerState, msg: Msg) -> bool {
    match msg {
        Msg::SetSearch(term) => {
            if state.filters.search == term {
                return false;
            }
            state.filters.search = term;
            state.sync_window();
            true
        }
        Msg::ToggleStatusFilter(status) => {
            match state.filters.status.iter().position(|s| *s == status) {
                Some(idx) => {
                    state.filters.status.remove(idx);
                }
                None => state.filters.status.push(status),
            }
            state.sync_window();
            true
        }
        Msg::ToggleSourceFilter(source) => {
            match state.filters.source.iter().position(|s| *s == source) {
                Some(idx) => {
                    state.filters.source.remove(idx);
                }
                None => state.filters.source.push(source),
            }
            state.sync_window();
            true
        }
        Msg::SetMinAge(text) => {
            let bound = Filters::parse_age_bound(&text);
            if state.filters.min_age == bound {
                return false;
            }
            state.filters.min_age = bound;
            state.sync_window();
            true
        }
        Msg::SetMaxAge(text) => {
            let bound = Filters::parse_age_bound(&text);
            if state.filters.max_age == bound {
                return false;
            }
            state.filters.max_age = bound;
            state.sync_window();
            true
        }
        Msg::ClearFilters => {
            if state.filters == Filters::default() {
                return false;
            }
            state.filters = Filters::default();
            state.sync_window();
            true
        }
        Msg::SortBy(key) => {
            state.sort = Some(SortConfig::toggle(state.sort, key));
            state.sync_window();
            true
        }
        Msg::GoToPage(page) => {
            let total = state.filtered_len();
            match &mut state.mode {
                ViewMode::Paged(pager) => pager.go_to(page, total),
                // Page navigation has no meaning for the reveal window.
                ViewMode::Infinite(_) => false,
            }
        }
        Msg::RevealMore => {
            let total = state.filtered_len();
            match &mut state.mode {
                ViewMode::Paged(_) => false,
                ViewMode::Infinite(reveal) => reveal.more(total),
            }
        }
        Msg::Submit(proposal) => {
            let changed = if state.store.get(&proposal.id).is_some() {
                let id = proposal.id.clone();
                state.store.update(&id, proposal)
            } else {
                state.store.add(proposal);
                true
            };
            // The new record contents may have shrunk the filtered set
            // underneath the current page.
            if changed {
                state.clamp_page();
            }
            changed
        }
        Msg::SetStatus { id, status } => {
            let changed = state.store.set_status(&id, status);
            if changed {
                state.clamp_page();
            }
            changed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::state::ViewWindow;
    use crate::query::{Pager, Reveal, SortDirection, SortKey, PAGE_SIZE};
    use crate::store::ProposalStore;
    use common::model::status::Status;

    fn seeded_state() -> TrackerState {
        TrackerState::new(ProposalStore::with_seed().unwrap())
    }

    fn visible_ids(state: &TrackerState) -> Vec<String> {
        state.view().items.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn search_narrows_the_view() {
        let mut state = seeded_state();
        assert!(update(&mut state, Msg::SetSearch("chen".to_string())));
        assert_eq!(visible_ids(&state), ["2"]);
        assert_eq!(state.view().total, 1);
    }

    #[test]
    fn repeated_identical_search_is_a_noop() {
        let mut state = seeded_state();
        assert!(update(&mut state, Msg::SetSearch("chen".to_string())));
        assert!(!update(&mut state, Msg::SetSearch("chen".to_string())));
    }

    #[test]
    fn min_age_filter_keeps_order_of_survivors() {
        let mut state = seeded_state();
        assert!(update(&mut state, Msg::SetMinAge("28".to_string())));
        assert_eq!(visible_ids(&state), ["1", "2"]);
    }

    #[test]
    fn toggling_a_status_filter_twice_restores_the_view() {
        let mut state = seeded_state();
        let before = state.view();
        update(&mut state, Msg::ToggleStatusFilter(Status::OnHold));
        assert_eq!(visible_ids(&state), ["2"]);
        update(&mut state, Msg::ToggleStatusFilter(Status::OnHold));
        assert_eq!(state.view(), before);
    }

    #[test]
    fn sorting_twice_by_the_same_key_toggles_direction() {
        let mut state = seeded_state();
        update(&mut state, Msg::SortBy(SortKey::Age));
        assert_eq!(visible_ids(&state), ["3", "1", "2"]);
        assert_eq!(
            state.sort.map(|s| s.direction),
            Some(SortDirection::Ascending)
        );

        update(&mut state, Msg::SortBy(SortKey::Age));
        assert_eq!(visible_ids(&state), ["2", "1", "3"]);
        assert_eq!(
            state.sort.map(|s| s.direction),
            Some(SortDirection::Descending)
        );
    }

    #[test]
    fn out_of_range_pages_leave_the_current_page_unchanged() {
        let mut state = seeded_state();
        // grow past one page so page 2 exists
        for i in 0..5 {
            let mut extra = state.store.get("1").unwrap().clone();
            extra.id = format!("extra-{i}");
            state.store.add(extra);
        }
        assert!(update(&mut state, Msg::GoToPage(2)));
        assert!(!update(&mut state, Msg::GoToPage(0)));
        assert!(!update(&mut state, Msg::GoToPage(3)));
        match state.view().window {
            ViewWindow::Paged {
                current_page,
                total_pages,
            } => {
                assert_eq!(current_page, 2);
                assert_eq!(total_pages, 2);
            }
            ViewWindow::Infinite { .. } => unreachable!(),
        }
    }

    #[test]
    fn filter_change_pulls_the_pager_back_into_range() {
        let mut state = seeded_state();
        for i in 0..5 {
            let mut extra = state.store.get("1").unwrap().clone();
            extra.id = format!("extra-{i}");
            extra.name = format!("Extra {i}");
            state.store.add(extra);
        }
        update(&mut state, Msg::GoToPage(2));
        // narrows to a single record, page 2 no longer exists
        update(&mut state, Msg::SetSearch("priya".to_string()));
        match state.view().window {
            ViewWindow::Paged { current_page, .. } => assert_eq!(current_page, 1),
            ViewWindow::Infinite { .. } => unreachable!(),
        }
        assert_eq!(visible_ids(&state), ["3"]);
    }

    #[test]
    fn reveal_grows_and_resets_on_filter_changes() {
        let store = ProposalStore::with_seed().unwrap();
        let mut state = TrackerState::with_mode(store, ViewMode::Infinite(Reveal::new()));
        for i in 0..9 {
            let mut extra = state.store.get("1").unwrap().clone();
            extra.id = format!("extra-{i}");
            state.store.add(extra);
        }

        assert_eq!(state.view().items.len(), PAGE_SIZE);
        assert!(update(&mut state, Msg::RevealMore));
        assert_eq!(state.view().items.len(), 2 * PAGE_SIZE);

        // any filter input change re-anchors the reveal window
        update(&mut state, Msg::SetMinAge("20".to_string()));
        assert_eq!(state.view().items.len(), PAGE_SIZE);

        // page navigation means nothing in this mode
        assert!(!update(&mut state, Msg::GoToPage(2)));
    }

    #[test]
    fn submit_adds_new_ids_and_replaces_existing_ones() {
        let mut state = seeded_state();
        let mut fresh = state.store.get("1").unwrap().clone();
        fresh.id = "9".to_string();
        fresh.name = "Ananya Rao".to_string();
        assert!(update(&mut state, Msg::Submit(fresh.clone())));
        assert_eq!(state.store.len(), 4);
        assert_eq!(state.store.get("9"), Some(&fresh));

        fresh.occupation = "Architect".to_string();
        assert!(update(&mut state, Msg::Submit(fresh.clone())));
        assert_eq!(state.store.len(), 4);
        assert_eq!(state.store.get("9"), Some(&fresh));
    }

    #[test]
    fn accepting_records_on_the_last_page_keeps_items_and_metadata_in_step() {
        let mut state = seeded_state();
        // eleven Pending records: seed ids 1 and 3 plus nine clones
        for i in 0..9 {
            let mut extra = state.store.get("1").unwrap().clone();
            extra.id = format!("extra-{i}");
            state.store.add(extra);
        }
        update(&mut state, Msg::ToggleStatusFilter(Status::Pending));
        assert_eq!(state.view().total, 11);
        assert!(update(&mut state, Msg::GoToPage(3)));

        // accepting records drops them out of the Pending working set,
        // leaving only two pages
        for id in ["extra-8", "extra-7"] {
            update(
                &mut state,
                Msg::SetStatus {
                    id: id.to_string(),
                    status: Status::Accepted,
                },
            );
        }

        let view = state.view();
        assert_eq!(view.total, 9);
        match view.window {
            ViewWindow::Paged {
                current_page,
                total_pages,
            } => {
                assert_eq!(total_pages, 2);
                assert!(current_page <= total_pages);
                // the page the view claims is the page it shows
                assert_eq!(current_page, 2);
                assert_eq!(view.items.len(), 4);
            }
            ViewWindow::Infinite { .. } => unreachable!(),
        }
    }

    #[test]
    fn replacing_a_record_out_of_the_filter_reclamps_the_page() {
        let mut state = seeded_state();
        for i in 0..4 {
            let mut extra = state.store.get("1").unwrap().clone();
            extra.id = format!("extra-{i}");
            state.store.add(extra);
        }
        update(&mut state, Msg::ToggleStatusFilter(Status::Pending));
        assert_eq!(state.view().total, 6); // two pages
        update(&mut state, Msg::GoToPage(2));

        let mut edited = state.store.get("extra-3").unwrap().clone();
        edited.status = Status::Rejected;
        assert!(update(&mut state, Msg::Submit(edited)));

        let view = state.view();
        assert_eq!(view.total, 5);
        assert_eq!(
            view.window,
            ViewWindow::Paged {
                current_page: 1,
                total_pages: 1
            }
        );
        assert_eq!(view.items.len(), 5);
    }

    #[test]
    fn repeated_identical_age_bounds_are_noops() {
        let mut state = seeded_state();
        assert!(update(&mut state, Msg::SetMinAge("28".to_string())));
        assert!(!update(&mut state, Msg::SetMinAge("28".to_string())));
        // non-numeric text clears the bound; clearing an unset bound is
        // also a no-op
        assert!(update(&mut state, Msg::SetMinAge("abc".to_string())));
        assert!(!update(&mut state, Msg::SetMinAge(String::new())));

        assert!(update(&mut state, Msg::SetMaxAge("30".to_string())));
        assert!(!update(&mut state, Msg::SetMaxAge(" 30 ".to_string())));
    }

    #[test]
    fn set_status_reports_misses() {
        let mut state = seeded_state();
        assert!(update(
            &mut state,
            Msg::SetStatus {
                id: "2".to_string(),
                status: Status::Accepted,
            }
        ));
        assert_eq!(state.store.get("2").unwrap().status, Status::Accepted);

        assert!(!update(
            &mut state,
            Msg::SetStatus {
                id: "404".to_string(),
                status: Status::Rejected,
            }
        ));
    }

    #[test]
    fn paged_is_the_default_mode() {
        let state = seeded_state();
        assert_eq!(state.mode, ViewMode::Paged(Pager::new()));
    }
}
