//! Record directory - canonical employee, attendance and store collections.
//!
//! The list views are store scoped: employees by their `store_id`, attendance
//! transitively through the scoped employee ids. Search is deliberately not scoped so
//! an employee of another store can be found and re-registered here.

use crate::{
    core::selection::FilterMenu,
    entities::{AttendanceRecord, Employee, EmploymentStatus, InfoStatus, Store},
    errors::{Error, Result},
};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, info};

/// Canonical in-memory collections.
#[derive(Debug, Clone, Default)]
pub struct RecordDirectory {
    pub(crate) employees: Vec<Employee>,
    pub(crate) attendance: Vec<AttendanceRecord>,
    stores: Vec<Store>,
}

impl RecordDirectory {
    /// Creates a directory over existing collections.
    #[must_use]
    pub fn new(employees: Vec<Employee>, attendance: Vec<AttendanceRecord>, stores: Vec<Store>) -> Self {
        info!(
            employees = employees.len(),
            attendance = attendance.len(),
            stores = stores.len(),
            "Record directory loaded"
        );
        Self {
            employees,
            attendance,
            stores,
        }
    }

    /// Every employee, unscoped.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Every attendance record, unscoped.
    #[must_use]
    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    /// Every known store.
    #[must_use]
    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    /// Looks an employee up by id.
    #[must_use]
    pub fn employee(&self, id: i64) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    /// Employees of `store_id`, or all of them when no store is active.
    #[must_use]
    pub fn scoped_employees(&self, store_id: Option<&str>) -> Vec<&Employee> {
        scope_by_store(&self.employees, store_id)
    }

    /// Attendance of the employees in scope.
    #[must_use]
    pub fn scoped_attendance(&self, store_id: Option<&str>) -> Vec<&AttendanceRecord> {
        scope_attendance(&self.attendance, &self.scoped_employees(store_id))
    }

    /// Distinct non-empty positions among the employees in scope, sorted.
    #[must_use]
    pub fn positions(&self, store_id: Option<&str>) -> Vec<String> {
        self.scoped_employees(store_id)
            .into_iter()
            .filter(|employee| !employee.position.is_empty())
            .map(|employee| employee.position.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Stores of the given company.
    #[must_use]
    pub fn accessible_stores(&self, company_code: &str) -> Vec<&Store> {
        self.stores
            .iter()
            .filter(|store| store.company_code == company_code)
            .collect()
    }

    /// Appends a committed employee.
    pub(crate) fn insert_employee(&mut self, employee: Employee) {
        debug!(id = employee.id, store_id = %employee.store_id, "Employee appended");
        self.employees.push(employee);
    }

    /// Replaces the employee with the same id.
    pub(crate) fn replace_employee(&mut self, employee: Employee) -> Result<()> {
        let slot = self
            .employees
            .iter_mut()
            .find(|existing| existing.id == employee.id)
            .ok_or(Error::EmployeeNotFound { id: employee.id })?;
        debug!(id = employee.id, "Employee replaced");
        *slot = employee;
        Ok(())
    }
}

/// Employees whose `store_id` matches; everything when `store_id` is `None`.
#[must_use]
pub fn scope_by_store<'a>(employees: &'a [Employee], store_id: Option<&str>) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|employee| store_id.is_none_or(|id| employee.store_id == id))
        .collect()
}

/// Attendance records belonging to any of `scoped_employees`.
#[must_use]
pub fn scope_attendance<'a>(
    attendance: &'a [AttendanceRecord],
    scoped_employees: &[&Employee],
) -> Vec<&'a AttendanceRecord> {
    let ids: HashSet<i64> = scoped_employees.iter().map(|employee| employee.id).collect();
    attendance
        .iter()
        .filter(|record| ids.contains(&record.employee_id))
        .collect()
}

/// Multi-criteria employee filter.
///
/// Values within a dimension are alternatives; dimensions all have to match. An empty
/// dimension does not constrain anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// Accepted positions
    pub positions: Vec<String>,
    /// Accepted employment statuses
    pub statuses: Vec<EmploymentStatus>,
    /// Accepted info statuses
    pub info_statuses: Vec<InfoStatus>,
}

impl EmployeeFilter {
    /// Whether `employee` passes every non-empty dimension.
    #[must_use]
    pub fn matches(&self, employee: &Employee) -> bool {
        (self.positions.is_empty() || self.positions.contains(&employee.position))
            && (self.statuses.is_empty() || self.statuses.contains(&employee.status))
            && (self.info_statuses.is_empty() || self.info_statuses.contains(&employee.info_status))
    }

    /// No dimension is constrained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.statuses.is_empty() && self.info_statuses.is_empty()
    }
}

/// Applies `filter` to an employee list.
#[must_use]
pub fn filter_employees<'a>(employees: &[&'a Employee], filter: &EmployeeFilter) -> Vec<&'a Employee> {
    employees
        .iter()
        .copied()
        .filter(|employee| filter.matches(employee))
        .collect()
}

/// Toggle menus for the three filter dimensions of the employee list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryFilters {
    /// Positions present in scope
    pub position: FilterMenu<String>,
    /// Employment statuses
    pub status: FilterMenu<EmploymentStatus>,
    /// Info statuses
    pub info_status: FilterMenu<InfoStatus>,
}

impl DirectoryFilters {
    /// Empty menus over the positions present in the store scope.
    #[must_use]
    pub fn for_scope(directory: &RecordDirectory, store_id: Option<&str>) -> Self {
        Self {
            position: FilterMenu::unselected(directory.positions(store_id)),
            status: FilterMenu::unselected(EmploymentStatus::ALL),
            info_status: FilterMenu::unselected(InfoStatus::ALL),
        }
    }

    /// Filter built from the currently selected keys.
    #[must_use]
    pub fn to_filter(&self) -> EmployeeFilter {
        EmployeeFilter {
            positions: self.position.selected(),
            statuses: self.status.selected(),
            info_statuses: self.info_status.selected(),
        }
    }
}

/// Outcome of a name search; each state renders differently.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchState {
    /// Nothing has been searched yet
    #[default]
    NotSearched,
    /// A search ran and found nobody
    NoMatches,
    /// A search ran and found these employees
    Matches(Vec<Employee>),
}

/// Case-insensitive name search across the full, unscoped collection.
///
/// A blank query resets to [`SearchState::NotSearched`].
#[must_use]
pub fn search_employees(all_employees: &[Employee], query: &str) -> SearchState {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchState::NotSearched;
    }

    let matches: Vec<Employee> = all_employees
        .iter()
        .filter(|employee| employee.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    debug!(query = %needle, hits = matches.len(), "Employee search");

    if matches.is_empty() {
        SearchState::NoMatches
    } else {
        SearchState::Matches(matches)
    }
}

/// Whether a search hit may be registered into the current store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// Not on this store's roster
    New,
    /// On the roster but resigned; may rejoin
    Rejoining,
    /// On the roster and not resigned; cannot be registered again
    AlreadyActive,
}

impl Eligibility {
    /// Whether the candidate can be picked for registration.
    #[must_use]
    pub const fn is_selectable(self) -> bool {
        !matches!(self, Self::AlreadyActive)
    }

    /// Whether the candidate is already on the roster.
    #[must_use]
    pub const fn is_registered(self) -> bool {
        !matches!(self, Self::New)
    }
}

/// Classifies a search hit against the current store's employees.
#[must_use]
pub fn classify_lookup(candidate: &Employee, store_employees: &[&Employee]) -> Eligibility {
    let registered = store_employees.iter().find(|employee| employee.id == candidate.id);
    match registered {
        None => Eligibility::New,
        Some(employee) if employee.is_resigned() => Eligibility::Rejoining,
        Some(_) => Eligibility::AlreadyActive,
    }
}
