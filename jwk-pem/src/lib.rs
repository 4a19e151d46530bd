//! Converts the `n` and `e` members of an RSA [JSON Web Key][1] into a PEM encoded
//! SubjectPublicKeyInfo document (`-----BEGIN PUBLIC KEY-----`).
//!
//! ```
//! use jwk_pem::prelude::*;
//!
//! # fn main() -> JwkPemResult<()> {
//! let n = "0vx7agoebGcQSuuPiLJXZptN9nndrQmbXEps2aiAFbWhM78LhWx4cbbfAAtVT86zwu1RK7aPFFxuhDR1L6tSoc_BJECPebWKRXjBZCiFV4n3oknjhMstn64tZ_2W-5JsGY4Hc5n9yBXArwl93lqt7_RN5w6Cf0h4QyQ5v-65YGjQR0_FDW2QvzqY368QQMicAtaSqzs8KJZgnYb9c7d0zgdAZHzu6qMQvRL5hajrn1n91CbOpbISD08qNLyrdkt-bFTWhAI4vMQFh6WeZu0fM4lFd2NcRwr3XPksINHaQ-G_xBniIqbw0Ls1jF44-csFCur-kEgU8awapJzKnqDKgw";
//! let pem = jwk_to_pem(&PubKeyComponents::new(n, "AQAB"))?;
//! assert!(pem.starts_with("-----BEGIN PUBLIC KEY-----\n"));
//! # Ok(())
//! # }
//! ```
//!
//! [1]: https://www.rfc-editor.org/rfc/rfc7517

#![deny(missing_docs)]

#[cfg(test)]
pub mod test_utils;

pub mod base64url;
mod error;
pub mod jwk;
pub mod model;
mod options;

/// Prelude
pub mod prelude {
    pub use super::base64url::{decode_component, decode_padded, normalize, pad, padded_len};
    pub use super::error::{JwkPemError, JwkPemResult, KeyRejection};
    pub use super::model::{
        components::{KeyComponent, PubKeyComponents},
        pem::Pem,
    };
    pub use super::options::JwkPemOptions;
    pub use super::jwk::{JwkToPem, jwk_to_pem, staging::StagingBuffer};
    pub use ::rsa::{BigUint, RsaPublicKey, pkcs8::LineEnding};
}
