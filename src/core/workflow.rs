//! Employee record workflow - the create/edit modal as an explicit state machine.
//!
//! Opening takes a snapshot: `open_edit` deep-copies the canonical employee and
//! `open_new` builds a fresh draft, so nothing in the directory changes until `save`.
//! Cancel simply drops the snapshot. A new draft asks for confirmation before it is
//! thrown away; an edit session closes straight away.

use crate::{
    core::{
        directory::RecordDirectory,
        field_codec::{Bank, BankAccount, mask_phone},
        ids::{random_color, temporary_id, unique_snowflake_id},
        phone::format_phone,
        validation::{FormField, FormTab, validate_employee},
    },
    entities::{Employee, EmploymentStatus, EmploymentType, InfoStatus, PayType},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Where the modal is in its lifecycle. Each open state owns its draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WorkflowState {
    /// No modal open
    #[default]
    Closed,
    /// Editing a copy of an existing employee
    Editing(Box<Employee>),
    /// Filling in a new employee
    Creating(Box<Employee>),
    /// Asking whether to discard a new employee draft
    ConfirmingCancel(Box<Employee>),
}

impl WorkflowState {
    /// Short state name for logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Editing(_) => "editing",
            Self::Creating(_) => "creating",
            Self::ConfirmingCancel(_) => "confirming cancel",
        }
    }
}

/// One field edit. Values are merged into the draft as-is, except that phone input is
/// regrouped and document paths are reduced to their file name.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    /// Display name
    Name(String),
    /// Raw phone input
    Phone(String),
    /// Date of birth
    Birthdate(Option<NaiveDate>),
    /// Hex display color
    Color(String),
    /// Position
    Position(String),
    /// First working day
    HireDate(NaiveDate),
    /// Contract type
    EmploymentType(EmploymentType),
    /// Employment status
    Status(EmploymentStatus),
    /// Reason for leaving
    ResignationReason(Option<String>),
    /// Pay interpretation
    PayType(PayType),
    /// Pay amount
    PayRate(f64),
    /// Bank half of the account field
    BankName(Option<Bank>),
    /// Digits half of the account field
    AccountDigits(String),
    /// Chosen contract file
    Contract(Option<String>),
    /// Chosen bank account copy file
    BankAccountCopy(Option<String>),
}

impl FieldEdit {
    /// Field this edit targets.
    #[must_use]
    pub const fn field(&self) -> FormField {
        match self {
            Self::Name(_) => FormField::Name,
            Self::Phone(_) => FormField::Phone,
            Self::Birthdate(_) => FormField::Birthdate,
            Self::Color(_) => FormField::Color,
            Self::Position(_) => FormField::Position,
            Self::HireDate(_) => FormField::HireDate,
            Self::EmploymentType(_) => FormField::EmploymentType,
            Self::Status(_) => FormField::Status,
            Self::ResignationReason(_) => FormField::ResignationReason,
            Self::PayType(_) => FormField::PayType,
            Self::PayRate(_) => FormField::PayRate,
            Self::BankName(_) => FormField::BankName,
            Self::AccountDigits(_) => FormField::AccountDigits,
            Self::Contract(_) => FormField::Contract,
            Self::BankAccountCopy(_) => FormField::BankAccountCopy,
        }
    }

    fn apply(self, draft: &mut Employee) {
        match self {
            Self::Name(name) => draft.name = name,
            Self::Phone(raw) => draft.phone = format_phone(&raw),
            Self::Birthdate(date) => draft.birthdate = date,
            Self::Color(color) => draft.color = color,
            Self::Position(position) => draft.position = position,
            Self::HireDate(date) => draft.hire_date = date,
            Self::EmploymentType(kind) => draft.employment_type = kind,
            Self::Status(status) => draft.status = status,
            Self::ResignationReason(reason) => draft.resignation_reason = reason,
            Self::PayType(pay_type) => draft.pay_type = pay_type,
            Self::PayRate(rate) => draft.pay_rate = rate,
            Self::BankName(bank) => draft.account_number.bank = bank,
            Self::AccountDigits(digits) => {
                draft.account_number = BankAccount::new(draft.account_number.bank, &digits);
            }
            Self::Contract(path) => draft.contract = path.as_deref().and_then(file_name_only),
            Self::BankAccountCopy(path) => {
                draft.bank_account_copy = path.as_deref().and_then(file_name_only);
            }
        }
    }
}

/// File name component of a chosen document path. The file itself is never read.
#[must_use]
pub fn file_name_only(path: &str) -> Option<String> {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Create/edit modal for employees of one store.
#[derive(Debug, Clone)]
pub struct EmployeeWorkflow {
    state: WorkflowState,
    tab: FormTab,
    store_id: String,
}

impl EmployeeWorkflow {
    /// Closed workflow for the given store context.
    #[must_use]
    pub fn new(store_id: impl Into<String>) -> Self {
        Self {
            state: WorkflowState::Closed,
            tab: FormTab::Basic,
            store_id: store_id.into(),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Current form tab.
    #[must_use]
    pub const fn tab(&self) -> FormTab {
        self.tab
    }

    /// Store new employees are registered into.
    #[must_use]
    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    /// Draft being edited or created, including one awaiting cancel confirmation.
    #[must_use]
    pub fn draft(&self) -> Option<&Employee> {
        match &self.state {
            WorkflowState::Closed => None,
            WorkflowState::Editing(draft)
            | WorkflowState::Creating(draft)
            | WorkflowState::ConfirmingCancel(draft) => Some(&**draft),
        }
    }

    /// Phone as the form should show it: masked for existing employees, raw for new ones.
    #[must_use]
    pub fn display_phone(&self) -> Option<String> {
        match &self.state {
            WorkflowState::Closed => None,
            WorkflowState::Editing(draft) => Some(mask_phone(&draft.phone)),
            WorkflowState::Creating(draft) | WorkflowState::ConfirmingCancel(draft) => {
                Some(draft.phone.clone())
            }
        }
    }

    fn ensure_closed(&self, action: &'static str) -> Result<()> {
        match self.state {
            WorkflowState::Closed => Ok(()),
            _ => Err(self.invalid(action)),
        }
    }

    fn invalid(&self, action: &'static str) -> Error {
        warn!(action, state = self.state.name(), "Rejected workflow transition");
        Error::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }

    /// Opens an edit session on a deep copy of `employee`.
    pub fn open_edit(&mut self, employee: &Employee) -> Result<()> {
        self.ensure_closed("open an edit session")?;
        self.state = WorkflowState::Editing(Box::new(employee.clone()));
        self.tab = FormTab::Basic;
        debug!(id = employee.id, "Edit session opened");
        Ok(())
    }

    /// Opens a new-employee draft, prefilled with name, birthdate and phone from `source`.
    pub fn open_new(&mut self, source: Option<&Employee>, today: NaiveDate) -> Result<&Employee> {
        self.ensure_closed("open a new draft")?;

        let draft = Employee {
            id: temporary_id(),
            name: source.map(|s| s.name.clone()).unwrap_or_default(),
            phone: source.map(|s| s.phone.clone()).unwrap_or_default(),
            birthdate: source.and_then(|s| s.birthdate),
            position: String::new(),
            employment_type: EmploymentType::PartTime,
            status: EmploymentStatus::Active,
            info_status: InfoStatus::Incomplete,
            hire_date: today,
            last_work_date: None,
            pay_type: PayType::Hourly,
            pay_rate: 0.0,
            color: random_color(),
            resignation_reason: None,
            store_id: self.store_id.clone(),
            job_type: String::new(),
            account_number: BankAccount::default(),
            contract: None,
            bank_account_copy: None,
        };
        debug!(temporary_id = draft.id, from_source = source.is_some(), "New draft opened");

        self.tab = FormTab::Basic;
        self.state = WorkflowState::Creating(Box::new(draft));
        self.draft().ok_or_else(|| self.invalid("open a new draft"))
    }

    /// Merges one field into the open draft without validating it.
    pub fn edit_field(&mut self, edit: FieldEdit) -> Result<()> {
        match &mut self.state {
            WorkflowState::Editing(draft) | WorkflowState::Creating(draft) => {
                debug!(field = %edit.field(), "Draft field edited");
                edit.apply(draft);
                Ok(())
            }
            _ => Err(self.invalid("edit a field")),
        }
    }

    /// Switches to `tab` without validation.
    pub fn select_tab(&mut self, tab: FormTab) -> Result<()> {
        if self.draft().is_none() {
            return Err(self.invalid("switch tabs"));
        }
        self.tab = tab;
        Ok(())
    }

    /// Moves to the next tab. A new draft only moves on once the current tab's fields
    /// are valid; the entered data is kept either way.
    pub fn advance_tab(&mut self) -> Result<FormTab> {
        match &self.state {
            WorkflowState::Creating(draft) => {
                let errors = validate_employee(draft).for_tab(self.tab);
                if !errors.is_empty() {
                    debug!(tab = ?self.tab, failed = errors.len(), "Tab validation failed");
                    return Err(errors.into());
                }
            }
            WorkflowState::Editing(_) => {}
            _ => return Err(self.invalid("advance the form")),
        }
        if let Some(next) = self.tab.next() {
            self.tab = next;
        }
        Ok(self.tab)
    }

    /// Validates and commits the draft, then closes. Returns the committed employee id.
    ///
    /// A new draft gets its final id and is appended as active and complete. An edit
    /// session replaces the canonical record with the same id. On any error the draft
    /// stays open and unchanged.
    #[instrument(skip_all)]
    pub fn save(&mut self, directory: &mut RecordDirectory) -> Result<i64> {
        let draft = match &self.state {
            WorkflowState::Editing(draft) | WorkflowState::Creating(draft) => draft,
            _ => return Err(self.invalid("save")),
        };
        debug!(state = self.state.name(), id = draft.id, "Saving draft");
        validate_employee(draft).into_result()?;

        let mut committed = Employee::clone(draft);
        if committed.status != EmploymentStatus::Resigned {
            committed.resignation_reason = None;
        }

        let id = if matches!(self.state, WorkflowState::Creating(_)) {
            committed.id = unique_snowflake_id(|candidate| directory.employee(candidate).is_some());
            committed.status = EmploymentStatus::Active;
            committed.info_status = InfoStatus::Complete;
            let id = committed.id;
            directory.insert_employee(committed);
            info!(id, "Employee registered");
            id
        } else {
            let id = committed.id;
            directory.replace_employee(committed)?;
            info!(id, "Employee updated");
            id
        };

        self.state = WorkflowState::Closed;
        Ok(id)
    }

    /// Cancel button. A new draft goes to confirmation; an edit session closes at once.
    pub fn request_cancel(&mut self) -> Result<()> {
        match std::mem::take(&mut self.state) {
            WorkflowState::Creating(draft) => {
                self.state = WorkflowState::ConfirmingCancel(draft);
                debug!("Cancel of new draft awaiting confirmation");
                Ok(())
            }
            WorkflowState::Editing(draft) => {
                debug!(id = draft.id, "Edit session discarded");
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.invalid("cancel"))
            }
        }
    }

    /// Discards the new draft for good.
    pub fn confirm_cancel(&mut self) -> Result<()> {
        if !matches!(self.state, WorkflowState::ConfirmingCancel(_)) {
            return Err(self.invalid("confirm cancel"));
        }
        self.state = WorkflowState::Closed;
        debug!("New draft discarded");
        Ok(())
    }

    /// Returns to the new draft, untouched.
    pub fn dismiss_cancel_confirm(&mut self) -> Result<()> {
        match std::mem::take(&mut self.state) {
            WorkflowState::ConfirmingCancel(draft) => {
                self.state = WorkflowState::Creating(draft);
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.invalid("dismiss cancel confirmation"))
            }
        }
    }
}
