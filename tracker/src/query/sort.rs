//! Sort stage: a stable comparator over flat, orderable fields.
//!
//! `SortKey` is deliberately a closed enum rather than an arbitrary field
//! name: nested objects (parent details, broker details, documents) have no
//! ordering, so making them unrepresentable here guards the whole pipeline
//! against a sort request that cannot be answered.

use std::cmp::Ordering;

use common::model::proposal::Proposal;

/// The fields the list view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Email,
    Age,
    Occupation,
    Location,
    Status,
    Source,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    /// The column-header click protocol: clicking the key that is already
    /// active and ascending flips it to descending; anything else starts
    /// ascending on the clicked key.
    pub fn toggle(current: Option<SortConfig>, key: SortKey) -> SortConfig {
        let direction = match current {
            Some(SortConfig {
                key: active,
                direction: SortDirection::Ascending,
            }) if active == key => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        SortConfig { key, direction }
    }
}

/// Stable in-place sort. Descending reverses the comparator, which keeps
/// equal-key records in their input order in both directions.
pub fn apply(records: &mut [Proposal], config: &SortConfig) {
    records.sort_by(|a, b| {
        let ord = compare(a, b, config.key);
        match config.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

fn compare(a: &Proposal, b: &Proposal, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_text(&a.name, &b.name),
        SortKey::Email => compare_text(&a.email, &b.email),
        SortKey::Age => compare_age(a, b),
        SortKey::Occupation => compare_text(&a.occupation, &b.occupation),
        SortKey::Location => compare_text(&a.location, &b.location),
        SortKey::Status => a.status.cmp(&b.status),
        SortKey::Source => a.source.cmp(&b.source),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Numeric comparison of the text age. Unparsable ages order after every
/// parsable one so they collect at the bottom of an ascending sort.
fn compare_age(a: &Proposal, b: &Proposal) -> Ordering {
    match (a.age_years(), b.age_years()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
