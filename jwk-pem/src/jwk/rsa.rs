//! RSA public keys out of the `n` and `e` JWK members

use super::*;

impl JwkToPem for PubKeyComponents {
    fn try_into_public_key(&self, options: &JwkPemOptions) -> JwkPemResult<RsaPublicKey> {
        let n = decode_component(KeyComponent::Modulus, &self.modulus)?;
        let e = decode_component(KeyComponent::Exponent, &self.exponent)?;

        let mut n_buf = StagingBuffer::with_capacity(options.max_modulus_bytes);
        let mut e_buf = StagingBuffer::with_capacity(options.max_modulus_bytes);
        let n = BigUint::from_bytes_be(n_buf.stage(KeyComponent::Modulus, &n)?);
        let e = BigUint::from_bytes_be(e_buf.stage(KeyComponent::Exponent, &e)?);

        if n.bits() == 0 {
            tracing::debug!("Rejected RSA JWK with a zero modulus");
            return Err(KeyRejection::ZeroModulus.into());
        }
        if e.bits() == 0 {
            tracing::debug!("Rejected RSA JWK with a zero public exponent");
            return Err(KeyRejection::ZeroExponent.into());
        }

        RsaPublicKey::new_with_max_size(n, e, options.max_modulus_bits()).map_err(|err| {
            tracing::debug!(error = %err, "RSA primitives rejected JWK");
            JwkPemError::from(err)
        })
    }
}
