//! Widget identifiers and the generators that issue them.
//!
//! A [`WidgetId`] wraps a UUID. Ids are always issued by the service through an
//! [`IdGenerator`]; clients never choose them.

use std::fmt::Debug;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(any(test, feature = "testing"))]
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque, immutable identifier of a stored widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(Uuid);

impl WidgetId {
    /// Wraps an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for WidgetId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<WidgetId> for Uuid {
    fn from(id: WidgetId) -> Self {
        id.0
    }
}

impl FromStr for WidgetId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of fresh widget identifiers.
pub trait IdGenerator: Send + Sync + Debug {
    /// Returns an id that has never been returned before by this generator.
    fn next_id(&self) -> WidgetId;
}

/// Production generator issuing random UUIDv4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> WidgetId {
        WidgetId(Uuid::new_v4())
    }
}

/// Deterministic generator for tests: ids are `00000000-0000-0000-0000-000000000001`,
/// `...0002`, and so on.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

#[cfg(any(test, feature = "testing"))]
impl SequentialIds {
    /// Create a generator whose first id is `1`.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(any(test, feature = "testing"))]
impl IdGenerator for SequentialIds {
    fn next_id(&self) -> WidgetId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        WidgetId(Uuid::from_u128(u128::from(n)))
    }
}
