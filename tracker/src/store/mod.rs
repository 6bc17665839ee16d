//! In-memory store for proposal records.
//!
//! The store is the single source of truth for the record collection. It
//! keeps insertion order and exposes exactly three mutations: `add`,
//! `update` (replace by id) and `set_status` (field-level update). There is
//! no delete.
//!
//! The store performs no validation. Well-formedness of a record (required
//! fields, broker details when the source is a broker) is enforced at the
//! form boundary (`controller::form`) before a record gets here. Ids are
//! caller-supplied and trusted to be unique.

use common::model::proposal::Proposal;
use common::model::status::Status;
use log::warn;

/// Sample records bundled with the binary so a fresh run has data to show.
const SEED: &str = include_str!("../../data/seed.json");

/// Ordered collection of proposal records.
#[derive(Debug, Clone, Default)]
pub struct ProposalStore {
    proposals: Vec<Proposal>,
}

impl ProposalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the bundled sample records.
    pub fn with_seed() -> serde_json::Result<Self> {
        let proposals = serde_json::from_str(SEED)?;
        Ok(Self { proposals })
    }

    /// Appends a record. The caller-supplied id is not checked for
    /// uniqueness; a colliding id means later updates hit the first match.
    pub fn add(&mut self, proposal: Proposal) {
        self.proposals.push(proposal);
    }

    /// Replaces the record whose id matches. Returns `false` on a miss and
    /// leaves the collection untouched; a miss usually means a stale edit
    /// for a record that was never added, so it is logged but not fatal.
    pub fn update(&mut self, id: &str, replacement: Proposal) -> bool {
        match self.proposals.iter_mut().find(|p| p.id == id) {
            Some(slot) => {
                *slot = replacement;
                true
            }
            None => {
                warn!("update for unknown proposal id {id}, ignoring");
                false
            }
        }
    }

    /// Updates exactly the `status` field of the matching record. Same miss
    /// semantics as [`update`](Self::update).
    pub fn set_status(&mut self, id: &str, status: Status) -> bool {
        match self.proposals.iter_mut().find(|p| p.id == id) {
            Some(proposal) => {
                proposal.status = status;
                true
            }
            None => {
                warn!("status change for unknown proposal id {id}, ignoring");
                false
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Proposal> {
        self.proposals.iter().find(|p| p.id == id)
    }

    pub fn records(&self) -> &[Proposal] {
        &self.proposals
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }
}
