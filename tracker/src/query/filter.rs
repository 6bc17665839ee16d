//! Filter stage: four independent predicates combined with logical AND.

use common::model::proposal::Proposal;
use common::model::source::Source;
use common::model::status::Status;

/// Active filter inputs, exactly as the filter panel holds them. Empty
/// search text and empty status/source lists mean "no constraint", never
/// "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub search: String,
    pub status: Vec<Status>,
    pub source: Vec<Source>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
}

impl Filters {
    /// Maps the text of an age-bound input field to a bound. Blank or
    /// non-numeric text means the bound is simply not applied; bad input
    /// never errors.
    pub fn parse_age_bound(text: &str) -> Option<u32> {
        text.trim().parse().ok()
    }

    /// Conjunction of all four predicates.
    pub fn passes(&self, proposal: &Proposal) -> bool {
        matches_search(proposal, &self.search)
            && matches_status(proposal, &self.status)
            && matches_source(proposal, &self.source)
            && matches_age(proposal, self.min_age, self.max_age)
    }
}

/// Case-insensitive substring match against name, email or occupation.
/// An empty term matches every record.
pub fn matches_search(proposal: &Proposal, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    proposal.name.to_lowercase().contains(&term)
        || proposal.email.to_lowercase().contains(&term)
        || proposal.occupation.to_lowercase().contains(&term)
}

/// Empty selection imposes no constraint.
pub fn matches_status(proposal: &Proposal, selected: &[Status]) -> bool {
    selected.is_empty() || selected.contains(&proposal.status)
}

/// Empty selection imposes no constraint.
pub fn matches_source(proposal: &Proposal, selected: &[Source]) -> bool {
    selected.is_empty() || selected.contains(&proposal.source)
}

/// Age-range predicate. With no bounds set every record passes. Once a
/// bound is set, a record whose age text does not parse fails it: an
/// unknown age cannot satisfy a range the user asked for.
pub fn matches_age(proposal: &Proposal, min: Option<u32>, max: Option<u32>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }
    match proposal.age_years() {
        Some(age) => min.map_or(true, |m| age >= m) && max.map_or(true, |m| age <= m),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ProposalStore;

    fn seed() -> Vec<Proposal> {
        ProposalStore::with_seed().unwrap().records().to_vec()
    }

    #[test]
    fn empty_filters_match_everything() {
        let filters = Filters::default();
        assert!(seed().iter().all(|p| filters.passes(p)));
    }

    #[test]
    fn passes_is_the_conjunction_of_the_four_predicates() {
        let filters = Filters {
            search: "an".to_string(),
            status: vec![Status::Pending, Status::OnHold],
            source: vec![Source::WhatsApp, Source::Broker],
            min_age: Some(28),
            max_age: None,
        };
        for p in &seed() {
            let expected = matches_search(p, &filters.search)
                && matches_status(p, &filters.status)
                && matches_source(p, &filters.source)
                && matches_age(p, filters.min_age, filters.max_age);
            assert_eq!(filters.passes(p), expected, "record {}", p.id);
        }
    }

    #[test]
    fn search_is_case_insensitive_across_name_email_occupation() {
        let records = seed();
        let chen: Vec<_> = records
            .iter()
            .filter(|p| matches_search(p, "chen"))
            .collect();
        assert_eq!(chen.len(), 1);
        assert_eq!(chen[0].email, "michael.c@example.com");

        // email substring
        assert!(records.iter().all(|p| matches_search(p, "EXAMPLE.COM")));
        // occupation substring
        let medical: Vec<_> = records
            .iter()
            .filter(|p| matches_search(p, "medical"))
            .collect();
        assert_eq!(medical.len(), 1);
        assert_eq!(medical[0].name, "Priya Patel");
    }

    #[test]
    fn min_age_bound_keeps_only_old_enough_records_in_order() {
        let records = seed(); // ages 28, 32, 27
        let kept: Vec<_> = records
            .iter()
            .filter(|p| matches_age(p, Some(28), None))
            .map(|p| p.age.as_str())
            .collect();
        assert_eq!(kept, ["28", "32"]);
    }

    #[test]
    fn unparsable_age_fails_a_supplied_bound_but_passes_without_bounds() {
        let mut p = seed().remove(0);
        p.age = "unknown".to_string();
        assert!(matches_age(&p, None, None));
        assert!(!matches_age(&p, Some(20), None));
        assert!(!matches_age(&p, None, Some(99)));
    }

    #[test]
    fn age_bound_parsing_never_errors() {
        assert_eq!(Filters::parse_age_bound("28"), Some(28));
        assert_eq!(Filters::parse_age_bound(" 28 "), Some(28));
        assert_eq!(Filters::parse_age_bound(""), None);
        assert_eq!(Filters::parse_age_bound("abc"), None);
        assert_eq!(Filters::parse_age_bound("-3"), None);
    }

    #[test]
    fn empty_status_selection_is_no_constraint_not_exclude_all() {
        let records = seed();
        assert!(records.iter().all(|p| matches_status(p, &[])));
        let on_hold: Vec<_> = records
            .iter()
            .filter(|p| matches_status(p, &[Status::OnHold]))
            .collect();
        assert_eq!(on_hold.len(), 1);
        assert_eq!(on_hold[0].name, "Michael Chen");
    }
}
