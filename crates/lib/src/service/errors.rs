//! Error types for the widget ordering service.

use thiserror::Error;

use crate::widget::WidgetId;

/// Errors raised by [`WidgetService`](crate::WidgetService) operations.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// No widget is stored under the requested id.
    #[error("No Widgets found with the specified id")]
    NotFound {
        /// The id that was looked up
        id: WidgetId,
    },

    /// Assigning or shifting a Z-index would overflow the signed 64-bit range.
    #[error("Z-index space exhausted at {z}")]
    ZIndexExhausted {
        /// The Z-index that could not be incremented
        z: i64,
    },
}

impl WidgetError {
    /// Check if this error indicates the widget was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, WidgetError::NotFound { .. })
    }

    /// Check if this error indicates the Z-index range was exhausted.
    pub fn is_z_index_exhausted(&self) -> bool {
        matches!(self, WidgetError::ZIndexExhausted { .. })
    }

    /// Get the widget id if this error is about a specific widget.
    pub fn widget_id(&self) -> Option<&WidgetId> {
        match self {
            WidgetError::NotFound { id } => Some(id),
            _ => None,
        }
    }
}

impl From<WidgetError> for crate::Error {
    fn from(err: WidgetError) -> Self {
        crate::Error::Widget(err)
    }
}
