//! JWK to public key conversions

use ::rsa::pkcs8::EncodePublicKey;

use crate::prelude::*;

pub mod rsa;
pub mod staging;

/// Builds a public key out of JWK members
pub trait JwkToPem {
    /// Decodes and validates the key material. Never returns a partially built key
    fn try_into_public_key(&self, options: &JwkPemOptions) -> JwkPemResult<RsaPublicKey>;

    /// Same as [JwkToPem::try_into_public_key] then serializes the key as a SubjectPublicKeyInfo
    /// ("PUBLIC KEY") PEM document wrapped at 64 characters
    fn try_into_pem(&self, options: &JwkPemOptions) -> JwkPemResult<Pem> {
        let key = self.try_into_public_key(options)?;
        let pem = key.to_public_key_pem(options.line_ending).map_err(|e| {
            tracing::debug!(error = %e, "Failed serializing RSA public key to PEM");
            JwkPemError::Serialization(e)
        })?;
        tracing::trace!(len = pem.len(), "Serialized RSA public key to PEM");
        Ok(pem.into())
    }
}

/// Converts the components of an RSA JWK into a PEM encoded public key with the default
/// [JwkPemOptions] (keys up to 2048 bits)
pub fn jwk_to_pem(components: &PubKeyComponents) -> JwkPemResult<Pem> {
    components.try_into_pem(&JwkPemOptions::default())
}
