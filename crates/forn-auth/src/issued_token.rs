/// A freshly minted bearer token plus the metadata clients need to use it
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: &'static str,
    /// Seconds until expiry, measured from issuance
    pub expires_in: u64,
}
