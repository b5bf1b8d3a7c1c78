//! The widget entity and the descriptor used to create or replace one.
//!
//! A [`Widget`] is a rectangle centred at `(x, y)` with a stacking index `z`
//! that is unique among live widgets. Clients never build a `Widget`
//! directly: they submit a [`WidgetRequest`] and the service assigns the id
//! and the modification timestamp.

pub mod area;
mod id;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use area::{BoundingBox, InsideArea, WidgetAreaFilter};
#[cfg(any(test, feature = "testing"))]
pub use id::SequentialIds;
pub use id::{IdGenerator, UuidGenerator, WidgetId};

/// A stored widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    /// Server-assigned identifier, immutable after creation.
    pub id: WidgetId,
    /// Centre x coordinate.
    pub x: i64,
    /// Centre y coordinate.
    pub y: i64,
    /// Stacking index. Lower values render beneath higher values.
    pub z: i64,
    /// Horizontal extent, strictly positive.
    pub width: f64,
    /// Vertical extent, strictly positive.
    pub height: f64,
    /// Set on every create, update and shift.
    pub last_modification_date: DateTime<Utc>,
}

impl Widget {
    /// Builds a widget from a descriptor whose `z` has already been resolved.
    pub(crate) fn from_request(
        id: WidgetId,
        request: &WidgetRequest,
        z: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            x: request.x,
            y: request.y,
            z,
            width: request.width,
            height: request.height,
            last_modification_date: now,
        }
    }

    /// Copy of this widget moved to `z`, stamped with `now`.
    ///
    /// Geometry is carried over unchanged.
    pub(crate) fn moved_to(&self, z: i64, now: DateTime<Utc>) -> Self {
        Self {
            z,
            last_modification_date: now,
            ..self.clone()
        }
    }

    /// The integer box enclosing this widget.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::of(self)
    }
}

/// Caller-supplied description of a widget.
///
/// `z` is optional: when absent on create, the widget is sent to the
/// foreground. The caller guarantees `width > 0` and `height > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WidgetRequest {
    /// Centre x coordinate.
    pub x: i64,
    /// Centre y coordinate.
    pub y: i64,
    /// Requested stacking index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<i64>,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl WidgetRequest {
    /// Descriptor without an explicit Z.
    pub const fn new(x: i64, y: i64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            width,
            height,
        }
    }

    /// Sets the requested Z.
    pub const fn with_z(mut self, z: i64) -> Self {
        self.z = Some(z);
        self
    }
}
