//! JWK members a public key is built from

use serde::Deserialize;

use crate::prelude::*;

/// The two members of an [RSA JWK][1] carrying the public key
///
/// Both are base64url encoded big-endian unsigned integers and should be considered as untrusted
/// input: they usually come straight from a remote JWKS endpoint.
///
/// [1]: https://www.rfc-editor.org/rfc/rfc7518#section-6.3.1
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub struct PubKeyComponents {
    /// Modulus 'n'
    #[serde(rename = "n")]
    pub modulus: String,
    /// Public exponent 'e'
    #[serde(rename = "e")]
    pub exponent: String,
}

impl PubKeyComponents {
    /// Key type of an RSA JWK
    pub const RSA_KTY: &'static str = "RSA";

    /// Builds the components from the raw 'n' and 'e' JWK members
    pub fn new(modulus: impl Into<String>, exponent: impl Into<String>) -> Self {
        Self {
            modulus: modulus.into(),
            exponent: exponent.into(),
        }
    }

    /// Extracts the components from a JWK in its JSON form. Members other than 'kty', 'n' and 'e' are
    /// ignored.
    pub fn from_jwk_json(json: &str) -> JwkPemResult<Self> {
        #[derive(Deserialize)]
        struct RsaJwk {
            kty: String,
            #[serde(flatten)]
            components: PubKeyComponents,
        }

        let jwk = serde_json::from_str::<RsaJwk>(json)?;
        if jwk.kty != Self::RSA_KTY {
            return Err(JwkPemError::InvalidJwk(format!(
                "'kty' is '{}' instead of '{}'",
                jwk.kty,
                Self::RSA_KTY
            )));
        }
        Ok(jwk.components)
    }
}

/// Identifies one of the [PubKeyComponents], mostly for error reporting
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KeyComponent {
    /// Modulus 'n'
    Modulus,
    /// Public exponent 'e'
    Exponent,
}

impl KeyComponent {
    /// Name of the JWK member holding this component
    pub const fn member(&self) -> &'static str {
        match self {
            Self::Modulus => "n",
            Self::Exponent => "e",
        }
    }
}

impl std::fmt::Display for KeyComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.member())
    }
}
