use crate::model::components::KeyComponent;

/// Wrapper over a [Result] with a [JwkPemError] error
pub type JwkPemResult<T> = Result<T, JwkPemError>;

/// All errors which a JWK to PEM conversion might throw
///
/// None of them should ever be interpreted by a caller as a usable key: a verifier receiving any of
/// these has to consider the signature as unverifiable.
#[derive(Debug, thiserror::Error)]
pub enum JwkPemError {
    /// A key component is not valid base64 or base64url, either because of an invalid character or a
    /// length no base64 string can have
    #[error("Invalid base64 in JWK '{0}' member because {1}")]
    DecodeError(KeyComponent, base64::DecodeError),
    /// A decoded key component does not fit in its staging buffer
    #[error("JWK '{component}' member is {len} bytes long which exceeds the maximum of {capacity} bytes")]
    SizeOverflow {
        /// Offending key component
        component: KeyComponent,
        /// Length in bytes of the decoded integer
        len: usize,
        /// Capacity of the staging buffer
        capacity: usize,
    },
    /// The (n, e) pair cannot form an RSA public key
    #[error("Cannot build an RSA public key because {0}")]
    KeyConstruction(#[from] KeyRejection),
    /// Failed encoding the key as SubjectPublicKeyInfo PEM
    #[error("Cannot serialize the RSA public key to PEM because {0}")]
    Serialization(#[from] rsa::pkcs8::spki::Error),
    /// The supplied JSON is not an RSA JWK
    #[error("Invalid RSA JWK because {0}")]
    InvalidJwk(String),
    /// Json error
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// UTF-8 parsing error
    #[error(transparent)]
    Utf8Error(#[from] core::str::Utf8Error),
}

impl JwkPemError {
    /// Whether this error stems from the key material being malformed base64
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::DecodeError(..))
    }

    /// Whether the (n, e) pair could not be turned into an RSA public key
    pub fn is_key_construction_error(&self) -> bool {
        matches!(self, Self::KeyConstruction(_))
    }
}

/// Why an (n, e) pair was not turned into an RSA public key
#[derive(Debug, thiserror::Error)]
pub enum KeyRejection {
    /// Modulus 'n' decodes to zero
    #[error("modulus is zero")]
    ZeroModulus,
    /// Public exponent 'e' decodes to zero or is empty
    #[error("public exponent is zero")]
    ZeroExponent,
    /// The RSA primitives rejected the pair
    #[error(transparent)]
    Rsa(#[from] rsa::Error),
}

impl From<rsa::Error> for JwkPemError {
    fn from(e: rsa::Error) -> Self {
        Self::KeyConstruction(e.into())
    }
}
