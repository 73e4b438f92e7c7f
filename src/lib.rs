//! Core data types for a second factor authentication hand-off between an
//! ADFS identity-provider plugin and its step-up authentication gateway.
//!
//! The crate carries no protocol logic. SAML request construction, signature
//! computation, and transport all live with the collaborators on either side
//! of the hand-off; what travels between them is a
//! [`SecondFactorAuthRequest`] rendered as a single percent-encoded JSON
//! query-string parameter.

mod error;
mod request;

pub use error::EncodingError;
pub use request::{SIG_ALG_RSA_SHA256, SecondFactorAuthRequest};
