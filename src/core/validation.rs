//! Form fields, tabs and field-scoped validation.
//!
//! Validation never fails fast: every problem gets its own message keyed by field, and
//! the draft being validated is left untouched.

use crate::core::phone::is_valid_phone;
use crate::entities::Employee;
use std::collections::BTreeMap;
use std::fmt;

/// Editable employee form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    /// Basic tab
    Name,
    /// Basic tab
    Phone,
    /// Basic tab
    Birthdate,
    /// Basic tab
    Color,
    /// Employment tab
    Position,
    /// Employment tab
    HireDate,
    /// Employment tab
    EmploymentType,
    /// Employment tab
    Status,
    /// Employment tab, shown only for resigned employees
    ResignationReason,
    /// Pay tab
    PayType,
    /// Pay tab
    PayRate,
    /// Pay tab
    BankName,
    /// Pay tab
    AccountDigits,
    /// Documents tab
    Contract,
    /// Documents tab
    BankAccountCopy,
}

impl FormField {
    /// Field name as used in messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Birthdate => "birthdate",
            Self::Color => "color",
            Self::Position => "position",
            Self::HireDate => "hire_date",
            Self::EmploymentType => "employment_type",
            Self::Status => "status",
            Self::ResignationReason => "resignation_reason",
            Self::PayType => "pay_type",
            Self::PayRate => "pay_rate",
            Self::BankName => "bank_name",
            Self::AccountDigits => "account_digits",
            Self::Contract => "contract",
            Self::BankAccountCopy => "bank_account_copy",
        }
    }

    /// Tab the field lives on.
    #[must_use]
    pub const fn tab(self) -> FormTab {
        match self {
            Self::Name | Self::Phone | Self::Birthdate | Self::Color => FormTab::Basic,
            Self::Position
            | Self::HireDate
            | Self::EmploymentType
            | Self::Status
            | Self::ResignationReason => FormTab::Employment,
            Self::PayType | Self::PayRate | Self::BankName | Self::AccountDigits => FormTab::Pay,
            Self::Contract | Self::BankAccountCopy => FormTab::Documents,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tabs of the employee form, in navigation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormTab {
    /// Name, phone, birthdate, color
    #[default]
    Basic,
    /// Position, dates, contract type, status
    Employment,
    /// Pay terms and bank account
    Pay,
    /// Uploaded document names
    Documents,
}

impl FormTab {
    /// Every tab in order
    pub const ALL: [Self; 4] = [Self::Basic, Self::Employment, Self::Pay, Self::Documents];

    /// Fields on this tab, including conditional ones.
    #[must_use]
    pub fn fields(self) -> Vec<FormField> {
        const FIELDS: [FormField; 15] = [
            FormField::Name,
            FormField::Phone,
            FormField::Birthdate,
            FormField::Color,
            FormField::Position,
            FormField::HireDate,
            FormField::EmploymentType,
            FormField::Status,
            FormField::ResignationReason,
            FormField::PayType,
            FormField::PayRate,
            FormField::BankName,
            FormField::AccountDigits,
            FormField::Contract,
            FormField::BankAccountCopy,
        ];
        FIELDS.into_iter().filter(|field| field.tab() == self).collect()
    }

    /// Fields to render for `draft`; the resignation reason only appears once resigned.
    #[must_use]
    pub fn visible_fields(self, draft: &Employee) -> Vec<FormField> {
        self.fields()
            .into_iter()
            .filter(|field| *field != FormField::ResignationReason || draft.is_resigned())
            .collect()
    }

    /// Tab after this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Basic => Some(Self::Employment),
            Self::Employment => Some(Self::Pay),
            Self::Pay => Some(Self::Documents),
            Self::Documents => None,
        }
    }
}

/// Field-keyed validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: BTreeMap<FormField, String>,
}

impl ValidationErrors {
    /// Records a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    /// No field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Failed fields with their messages, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.messages.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Keeps only the messages for fields on `tab`.
    #[must_use]
    pub fn for_tab(mut self, tab: FormTab) -> Self {
        self.messages.retain(|field, _| field.tab() == tab);
        self
    }

    /// `Ok(())` when empty, otherwise the errors themselves.
    pub fn into_result(self) -> std::result::Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Checks every field that can be wrong on an employee draft.
#[must_use]
pub fn validate_employee(draft: &Employee) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().is_empty() {
        errors.insert(FormField::Name, "Name is required");
    }

    if draft.birthdate.is_none() {
        errors.insert(FormField::Birthdate, "Birthdate is required");
    }

    if draft.phone.is_empty() {
        errors.insert(FormField::Phone, "Phone number is required");
    } else if !is_valid_phone(&draft.phone) {
        errors.insert(FormField::Phone, "Phone number must look like 010-0000-0000");
    }

    if !draft.pay_rate.is_finite() || draft.pay_rate < 0.0 {
        errors.insert(FormField::PayRate, "Pay rate must be a non-negative number");
    }

    errors
}
