//! Turns the base64url members of a JWK into raw bytes and integers.
//!
//! JWK members use the unpadded URL-safe alphabet of [RFC 4648 Section 5][1]. They are first
//! rewritten into the standard alphabet, then padded and decoded.
//!
//! [1]: https://www.rfc-editor.org/rfc/rfc4648#section-5

use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use rsa::BigUint;

use crate::prelude::*;

/// Standard alphabet, accepting both padded and unpadded input as well as non-zero trailing bits
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const PAD: char = '=';

/// Rewrites a base64url string into the standard base64 alphabet ('-' becomes '+' and '_' becomes
/// '/'). No padding is added and every other character is left untouched.
pub fn normalize(base64url: &str) -> String {
    base64url
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect()
}

/// Length of a base64 string of `len` characters once padded.
///
/// Strings whose length is already a multiple of 4 are left as is. Others are padded up to the next
/// multiple of 8 characters, which can be more than the 1 or 2 '=' strictly required. The surplus
/// padding is ignored by [decode_padded].
pub const fn padded_len(len: usize) -> usize {
    if len % 4 == 0 { len } else { (len / 8 + 1) * 8 }
}

/// Appends '=' to `base64` up to [padded_len]
pub fn pad(base64: &str) -> String {
    let len = base64.len();
    let mut padded = String::with_capacity(padded_len(len));
    padded.push_str(base64);
    padded.extend(std::iter::repeat_n(PAD, padded_len(len) - len));
    padded
}

/// Pads then decodes a standard alphabet base64 string.
///
/// The decoded bytes may contain zeroes anywhere, the length of the returned [Vec] is authoritative.
/// An empty input decodes to an empty output.
pub fn decode_padded(base64: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let len = base64.len();
    if len % 4 == 1 {
        return Err(base64::DecodeError::InvalidLength(len));
    }
    let padded = pad(base64);
    // only the first 4-character quantum carrying padding is meaningful
    let (significant, surplus) = padded.split_at(len.next_multiple_of(4));
    debug_assert!(surplus.chars().all(|c| c == PAD));
    STANDARD_LENIENT.decode(significant)
}

/// Decodes a JWK member into the unsigned big-endian integer it represents
pub fn decode_component(component: KeyComponent, base64url: &str) -> JwkPemResult<BigUint> {
    let bytes = decode_padded(&normalize(base64url)).map_err(|e| {
        tracing::debug!(%component, error = %e, "Failed to decode JWK member");
        JwkPemError::DecodeError(component, e)
    })?;
    tracing::trace!(%component, len = bytes.len(), "Decoded JWK member");
    Ok(BigUint::from_bytes_be(&bytes))
}
