use forn_core::Supplier;

use serde::Serialize;

/// Supplier DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct SupplierDto {
    pub id: String,
    pub name: String,
    pub document: Option<String>,
    pub active: bool,
}

impl From<Supplier> for SupplierDto {
    fn from(s: Supplier) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name,
            document: s.document,
            active: s.active,
        }
    }
}
