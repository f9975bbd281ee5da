//! Employee registration entry points: scanned store handoff and the lookup flow.
//!
//! Registration starts either from a scanned store code or from a name search. A search
//! hit goes through eligibility, then an explicit confirmation, and only then becomes
//! the source of a new draft in [`crate::core::workflow::EmployeeWorkflow::open_new`].

use crate::{
    core::directory::{Eligibility, RecordDirectory, SearchState, classify_lookup, search_employees},
    entities::{Employee, Store},
    errors::{Error, Result},
};
use tracing::{debug, info};

/// Where a scanned code sends the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationTarget<'a> {
    /// Scanned identifier, used as the store id as-is
    pub store_id: String,
    /// Matching store, if the directory knows it
    pub store: Option<&'a Store>,
}

/// Hands a scanned identifier off as a store id. The string is not validated.
#[must_use]
pub fn handoff_scanned_store<'a>(directory: &'a RecordDirectory, scanned: &str) -> RegistrationTarget<'a> {
    let store = directory.stores().iter().find(|store| store.store_id == scanned);
    info!(store_id = scanned, known = store.is_some(), "Scanned store identifier");
    RegistrationTarget {
        store_id: scanned.to_string(),
        store,
    }
}

/// Search, pick and confirm flow for registering an existing person into a store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationLookup {
    results: SearchState,
    pending: Option<(Employee, Eligibility)>,
}

impl RegistrationLookup {
    /// Runs a name search over every employee, regardless of store. Clears any pick.
    pub fn search(&mut self, all_employees: &[Employee], query: &str) -> &SearchState {
        self.pending = None;
        self.results = search_employees(all_employees, query);
        &self.results
    }

    /// Latest search outcome.
    #[must_use]
    pub const fn results(&self) -> &SearchState {
        &self.results
    }

    /// Eligibility of every hit against the current store, for rendering the list.
    #[must_use]
    pub fn classified(&self, store_employees: &[&Employee]) -> Vec<(&Employee, Eligibility)> {
        match &self.results {
            SearchState::Matches(hits) => hits
                .iter()
                .map(|hit| (hit, classify_lookup(hit, store_employees)))
                .collect(),
            SearchState::NotSearched | SearchState::NoMatches => Vec::new(),
        }
    }

    /// Picks a hit for registration; it then waits for [`Self::confirm`].
    ///
    /// Fails when the id is not among the hits, or when the person is already an
    /// active (not resigned) member of this store.
    pub fn select(&mut self, candidate_id: i64, store_employees: &[&Employee]) -> Result<Eligibility> {
        let SearchState::Matches(hits) = &self.results else {
            return Err(Error::EmployeeNotFound { id: candidate_id });
        };
        let candidate = hits
            .iter()
            .find(|hit| hit.id == candidate_id)
            .ok_or(Error::EmployeeNotFound { id: candidate_id })?;

        let eligibility = classify_lookup(candidate, store_employees);
        if !eligibility.is_selectable() {
            debug!(id = candidate_id, "Search hit already active in store");
            return Err(Error::NotSelectable { id: candidate_id });
        }

        debug!(id = candidate_id, ?eligibility, "Search hit awaiting confirmation");
        self.pending = Some((candidate.clone(), eligibility));
        Ok(eligibility)
    }

    /// Hit waiting for confirmation.
    #[must_use]
    pub fn pending(&self) -> Option<(&Employee, Eligibility)> {
        self.pending
            .as_ref()
            .map(|(employee, eligibility)| (employee, *eligibility))
    }

    /// Confirms the pick and hands the person over as a draft source.
    pub fn confirm(&mut self) -> Option<Employee> {
        self.pending.take().map(|(employee, _)| employee)
    }

    /// Drops the pick; the search results stay.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::EmploymentStatus;
    use crate::test_utils::{sample_directory, sample_employee};

    #[test]
    fn test_handoff_known_and_unknown_store() {
        let directory = sample_directory();
        let target = handoff_scanned_store(&directory, "S1");
        assert_eq!(target.store_id, "S1");
        assert_eq!(target.store.map(|store| store.name.as_str()), Some("Gangnam"));

        let target = handoff_scanned_store(&directory, "  not a store ");
        assert_eq!(target.store_id, "  not a store ");
        assert!(target.store.is_none());
    }

    #[test]
    fn test_new_lookup_has_not_searched() {
        let directory = sample_directory();
        let mut lookup = RegistrationLookup::default();
        assert_eq!(*lookup.results(), SearchState::NotSearched);
        assert!(lookup.pending().is_none());
        assert!(lookup.classified(&directory.scoped_employees(Some("S1"))).is_empty());
        assert!(matches!(
            lookup.select(1, &directory.scoped_employees(Some("S1"))),
            Err(Error::EmployeeNotFound { id: 1 })
        ));
    }

    #[test]
    fn test_active_member_cannot_be_selected() {
        let kim = sample_employee(1, "Kim", "S1");
        let all = vec![kim.clone()];
        let store = [&kim];

        let mut lookup = RegistrationLookup::default();
        lookup.search(&all, "kim");
        let result = lookup.select(1, &store);
        assert!(matches!(result, Err(Error::NotSelectable { id: 1 })));
        assert!(lookup.pending().is_none());
    }

    #[test]
    fn test_resigned_member_and_outsider_can_be_selected() {
        let mut kim = sample_employee(1, "Kim", "S1");
        kim.status = EmploymentStatus::Resigned;
        let outsider = sample_employee(2, "Kimberly", "S2");
        let all = vec![kim.clone(), outsider];
        let store = [&kim];

        let mut lookup = RegistrationLookup::default();
        lookup.search(&all, "kim");
        let classified: Vec<Eligibility> = lookup
            .classified(&store)
            .into_iter()
            .map(|(_, eligibility)| eligibility)
            .collect();
        assert_eq!(classified, vec![Eligibility::Rejoining, Eligibility::New]);

        assert_eq!(lookup.select(1, &store).unwrap(), Eligibility::Rejoining);
        assert_eq!(lookup.select(2, &store).unwrap(), Eligibility::New);
        assert_eq!(lookup.pending().map(|(e, _)| e.id), Some(2));

        lookup.cancel();
        assert!(lookup.confirm().is_none());
        assert!(matches!(lookup.results(), SearchState::Matches(_)));
    }

    #[test]
    fn test_select_requires_a_search_hit() {
        let mut lookup = RegistrationLookup::default();
        assert!(matches!(lookup.select(5, &[]), Err(Error::EmployeeNotFound { id: 5 })));

        lookup.search(&[sample_employee(1, "Kim", "S1")], "kim");
        assert!(matches!(lookup.select(5, &[]), Err(Error::EmployeeNotFound { id: 5 })));
    }

    #[test]
    fn test_new_search_clears_pending_pick() {
        let all = vec![sample_employee(1, "Kim", "S2")];
        let mut lookup = RegistrationLookup::default();
        lookup.search(&all, "kim");
        lookup.select(1, &[]).unwrap();
        assert_eq!(lookup.search(&all, "nobody"), &SearchState::NoMatches);
        assert!(lookup.pending().is_none());
    }
}
