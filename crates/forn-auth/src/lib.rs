pub mod claims;
pub mod error;
pub mod issued_token;
pub mod jwt_validator;
pub mod token_issuer;
pub mod token_settings;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use issued_token::IssuedToken;
pub use jwt_validator::JwtValidator;
pub use token_issuer::TokenIssuer;
pub use token_settings::TokenSettings;
