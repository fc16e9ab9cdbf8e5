use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// A single account handle as it appears in an export file.
///
/// Handles are opaque: comparison is exact and case-sensitive, and no
/// normalization is applied beyond the whitespace trim the markup parser
/// performs on extraction.
#[derive(
    Debug,
    Display,
    Clone,
    Deref,
    Deserialize,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Username(pub String);

impl Username {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Username {
    fn from(handle: &str) -> Self {
        Self(handle.into())
    }
}
