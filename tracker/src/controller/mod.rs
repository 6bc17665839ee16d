//! Elm-style controller for the tracker.
//!
//! All UI-visible state lives in one explicit container (`state`), every
//! user action is a message (`messages`), and `update` is the single
//! mutation path: it receives the current state and a message, applies the
//! transition, and reports whether the derived view changed. The rendering
//! surface only ever consumes [`state::TrackerState::view`] snapshots.
//!
//! `form` is the trust boundary in front of the store: drafts are validated
//! and turned into well-formed records there, so the store itself never
//! validates anything.

pub mod form;
pub mod messages;
pub mod state;
pub mod update;

pub use messages::Msg;
pub use state::{ProposalView, TrackerState, ViewMode, ViewWindow};
pub use update::update;
