//! Response formatting for the advocate API.

use serde::{Deserialize, Serialize};

/// The `{ "data": ... }` envelope wrapping every successful listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    /// The payload.
    pub data: T,
}

impl<T> DataEnvelope<T> {
    /// Wraps a payload.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
