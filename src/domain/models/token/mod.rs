pub mod token;

pub use token::{ResetClaims, TokenClaims, TokenUser};
