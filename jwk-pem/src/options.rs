use rsa::pkcs8::LineEnding;

/// Tunes a JWK to PEM conversion
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct JwkPemOptions {
    /// Largest accepted modulus, in bytes. Also bounds the exponent. Defaults to 256 (2048-bit keys)
    pub max_modulus_bytes: usize,
    /// Line ending of the generated PEM document. Defaults to LF
    pub line_ending: LineEnding,
}

impl JwkPemOptions {
    /// Staging capacity suited for 2048-bit RSA keys
    pub const DEFAULT_MAX_MODULUS_BYTES: usize = 256;

    /// Accepts keys up to `bits` bits, rounded up to the next byte
    pub const fn for_key_bits(bits: usize) -> Self {
        Self {
            max_modulus_bytes: bits.div_ceil(8),
            line_ending: LineEnding::LF,
        }
    }

    /// Largest accepted modulus, in bits. Saturates at [usize::MAX]
    pub const fn max_modulus_bits(&self) -> usize {
        self.max_modulus_bytes.saturating_mul(8)
    }
}

impl Default for JwkPemOptions {
    fn default() -> Self {
        Self {
            max_modulus_bytes: Self::DEFAULT_MAX_MODULUS_BYTES,
            line_ending: LineEnding::LF,
        }
    }
}
