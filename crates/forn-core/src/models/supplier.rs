//! Supplier entity - the business record managed by the CRUD API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A supplier record. `id` is the immutable primary key; the store never
/// holds two records with the same id (enforced by the primary key
/// constraint, not by application-level checks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    /// Tax/registration document number
    pub document: Option<String>,
    pub active: bool,
}

impl Supplier {
    /// Create a new supplier with a generated id
    pub fn new(name: String, document: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            document,
            active: true,
        }
    }

    /// Create a supplier with a caller-supplied id
    pub fn with_id(id: Uuid, name: String, document: Option<String>, active: bool) -> Self {
        Self {
            id,
            name,
            document,
            active,
        }
    }
}
