use serde::Deserialize;

/// Request body for replacing a supplier. The id is optional; when
/// present it must match the one in the request path.
#[derive(Debug, Deserialize)]
pub struct UpdateSupplierRequest {
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,

    #[serde(default)]
    pub document: Option<String>,

    pub active: bool,
}
