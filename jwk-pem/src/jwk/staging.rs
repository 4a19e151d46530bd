//! Bounded buffers for key components

use ::rsa::BigUint;

use crate::prelude::*;

/// Fixed capacity buffer holding the big-endian serialization of a key component before the key
/// gets built.
///
/// The capacity is only a bound, memory is reserved once a value has been checked against it. Staging
/// an integer longer than the capacity fails instead of truncating.
#[derive(Debug)]
pub struct StagingBuffer {
    buf: Vec<u8>,
    capacity: usize,
}

impl StagingBuffer {
    /// Empty buffer accepting integers up to `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::new(), capacity }
    }

    /// Maximum length in bytes of a staged integer
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Serializes `value` without leading zeroes into the buffer, replacing its previous content.
    ///
    /// Zero stages as an empty slice.
    pub fn stage(&mut self, component: KeyComponent, value: &BigUint) -> JwkPemResult<&[u8]> {
        let len = value.bits().div_ceil(8);
        if len > self.capacity {
            tracing::debug!(%component, len, capacity = self.capacity, "JWK member exceeds staging capacity");
            return Err(JwkPemError::SizeOverflow {
                component,
                len,
                capacity: self.capacity,
            });
        }
        self.buf.clear();
        if len > 0 {
            self.buf.reserve_exact(len);
            self.buf.extend_from_slice(&value.to_bytes_be());
        }
        Ok(&self.buf)
    }
}
