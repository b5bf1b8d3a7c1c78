//!
//! Widgets: an in-memory store of 2D widgets with unique stacking order.
//!
//! ## Core Concepts
//!
//! * **Widgets (`widget::Widget`)**: Rectangles centred on integer coordinates, each with a
//!   Z-index that decides which widget renders on top.
//! * **Stores (`store::WidgetStore`)**: A pluggable keyed container. The bundled
//!   `InMemoryWidgetStore` is a sharded concurrent map with no persistence.
//! * **Service (`service::WidgetService`)**: Enforces that no two widgets share a Z-index,
//!   shifting occupied indices on insert and sending widgets without a Z to the foreground.
//! * **Area filters (`widget::WidgetAreaFilter`)**: Restrict listings to widgets whose
//!   bounding box lies entirely inside a rectangle.
//! * **HTTP API (`api`)**: A JSON REST surface over the service (requires the "http" feature).

pub mod clock;
pub mod constants;
pub mod service;
pub mod store;
pub mod widget;

#[cfg(feature = "http")]
pub mod api;

pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "testing"))]
pub use clock::{ClockHold, FixedClock};
pub use service::{WidgetError, WidgetService};
pub use store::{InMemoryWidgetStore, WidgetStore};
pub use widget::{Widget, WidgetAreaFilter, WidgetId, WidgetRequest};

/// Result type used throughout the widgets library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the widgets library.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured errors from the widget service
    #[error(transparent)]
    Widget(service::WidgetError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Widget(_) => "service",
        }
    }

    /// Check if this error indicates a resource was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Widget(widget_err) => widget_err.is_not_found(),
        }
    }

    /// Check if this error indicates the Z-index range is used up.
    pub fn is_z_index_exhausted(&self) -> bool {
        match self {
            Error::Widget(widget_err) => widget_err.is_z_index_exhausted(),
        }
    }
}
