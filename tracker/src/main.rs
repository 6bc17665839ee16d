use std::error::Error;
use std::path::Path;

use env_logger::Env;
use log::{info, warn};

use common::model::status::Status;
use tracker::controller::{update, Msg, TrackerState, ViewWindow};
use tracker::export::export_to_pdf;
use tracker::query::SortKey;
use tracker::store::ProposalStore;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let store = ProposalStore::with_seed()?;
    info!("loaded {} proposals", store.len());
    let mut state = TrackerState::new(store);

    log_view("initial view", &state);

    update(&mut state, Msg::SetSearch("chen".to_string()));
    log_view("search 'chen'", &state);
    update(&mut state, Msg::SetSearch(String::new()));

    update(&mut state, Msg::SetMinAge("28".to_string()));
    log_view("min age 28", &state);
    update(&mut state, Msg::ClearFilters);

    update(&mut state, Msg::SortBy(SortKey::Age));
    log_view("sorted by age", &state);

    update(
        &mut state,
        Msg::SetStatus {
            id: "2".to_string(),
            status: Status::Accepted,
        },
    );
    log_view("after accepting proposal 2", &state);

    let view = state.view();
    match export_to_pdf(&view.items, Path::new(".")) {
        Ok(Some(path)) => info!("wrote export to {}", path.display()),
        Ok(None) => info!("nothing to export"),
        // Missing ./fonts is the usual cause; the session itself is fine.
        Err(err) => warn!("skipping PDF export: {err}"),
    }

    Ok(())
}

fn log_view(label: &str, state: &TrackerState) {
    let view = state.view();
    let names: Vec<&str> = view.items.iter().map(|p| p.name.as_str()).collect();
    match view.window {
        ViewWindow::Paged {
            current_page,
            total_pages,
        } => info!(
            "{label}: {} of {} shown (page {current_page}/{total_pages}): {names:?}",
            view.items.len(),
            view.total,
        ),
        ViewWindow::Infinite { visible } => info!(
            "{label}: {visible} of {} revealed: {names:?}",
            view.total,
        ),
    }
}
