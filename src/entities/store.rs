//! Store entity - A workplace belonging to one company.

use serde::{Deserialize, Serialize};

/// Store record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Unique store identifier (also what the registration QR code encodes)
    pub store_id: String,
    /// Display name
    pub name: String,
    /// Company the store belongs to; accounts are scoped by this code
    pub company_code: String,
}
