//! Record payloads
//!
//! Records are opaque value types: the table stores and returns them without
//! interpreting the payload. The payload is a [`Bytes`] buffer, so cloning a
//! record is a reference-count bump and a record returned from a lookup
//! remains valid and unchanged no matter what is upserted afterwards.

use bytes::Bytes;

/// An opaque record associated with a name.
///
/// The default-constructed record is the "absent" sentinel returned by
/// lookups that miss. Note the caveat: a record that was genuinely upserted
/// with an empty payload is indistinguishable from a miss through
/// [`LookupTable::find`]; use [`LookupTable::get`] to tell the two apart.
///
/// [`LookupTable::find`]: crate::table::LookupTable::find
/// [`LookupTable::get`]: crate::table::LookupTable::get
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    payload: Bytes,
}

impl Record {
    /// Create a record from a payload
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Create a record by copying a byte slice
    pub fn copy_from_slice(payload: &[u8]) -> Self {
        Self {
            payload: Bytes::copy_from_slice(payload),
        }
    }

    /// The record payload
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Whether this record equals the absent sentinel
    pub fn is_absent(&self) -> bool {
        self.payload.is_empty()
    }
}

impl From<Bytes> for Record {
    fn from(payload: Bytes) -> Self {
        Self { payload }
    }
}
