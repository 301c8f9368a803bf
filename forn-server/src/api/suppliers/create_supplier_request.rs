use serde::Deserialize;

/// Request body for creating a supplier
#[derive(Debug, Deserialize)]
pub struct CreateSupplierRequest {
    /// Client-supplied id; the server generates one when omitted
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,

    #[serde(default)]
    pub document: Option<String>,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
