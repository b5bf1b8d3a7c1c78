//! Spatial containment filtering.
//!
//! A widget is a real-valued rectangle centred on integer coordinates. For
//! area queries it is widened to the smallest integer box that encloses it
//! ([`BoundingBox`]) and that box is tested for containment in the query
//! rectangle ([`InsideArea`]).

use super::Widget;

/// Query-time area bounds, as received from a caller.
///
/// Each bound is optional. The filter only applies when all four are present
/// (see [`is_complete`](Self::is_complete)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WidgetAreaFilter {
    /// Left edge (minimum x).
    pub left_x: Option<i64>,
    /// Right edge (maximum x).
    pub right_x: Option<i64>,
    /// Lower edge (minimum y).
    pub lower_y: Option<i64>,
    /// Upper edge (maximum y).
    pub higher_y: Option<i64>,
}

impl WidgetAreaFilter {
    /// Builds a filter with all four bounds present.
    pub const fn new(left_x: i64, right_x: i64, lower_y: i64, higher_y: i64) -> Self {
        Self {
            left_x: Some(left_x),
            right_x: Some(right_x),
            lower_y: Some(lower_y),
            higher_y: Some(higher_y),
        }
    }

    /// True when every bound is present.
    pub fn is_complete(&self) -> bool {
        self.predicate().is_some()
    }

    /// The containment predicate for this filter, if it is complete.
    pub fn predicate(&self) -> Option<InsideArea> {
        Some(InsideArea {
            left_x: self.left_x?,
            right_x: self.right_x?,
            lower_y: self.lower_y?,
            higher_y: self.higher_y?,
        })
    }
}

/// Immutable containment predicate over a complete set of bounds.
///
/// Being a plain value it can be compared, hashed and moved across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InsideArea {
    left_x: i64,
    right_x: i64,
    lower_y: i64,
    higher_y: i64,
}

impl InsideArea {
    /// Creates the predicate for the given bounds.
    pub const fn new(left_x: i64, right_x: i64, lower_y: i64, higher_y: i64) -> Self {
        Self {
            left_x,
            right_x,
            lower_y,
            higher_y,
        }
    }

    /// True if the area has zero width or zero height.
    ///
    /// Nothing with a positive extent fits in a line or a point, so queries
    /// against such an area match nothing.
    pub fn is_line_or_point(&self) -> bool {
        self.left_x == self.right_x || self.lower_y == self.higher_y
    }

    /// Whether the widget's bounding box lies entirely within the area.
    /// Edges are inclusive.
    pub fn test(&self, widget: &Widget) -> bool {
        let bbox = BoundingBox::of(widget);
        bbox.left >= self.left_x
            && bbox.low >= self.lower_y
            && bbox.right <= self.right_x
            && bbox.high <= self.higher_y
    }
}

/// Smallest integer box enclosing a widget's rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// `floor(x - width / 2)`
    pub left: i64,
    /// `ceil(x + width / 2)`
    pub right: i64,
    /// `floor(y - height / 2)`
    pub low: i64,
    /// `ceil(y + height / 2)`
    pub high: i64,
}

impl BoundingBox {
    /// Rounds the widget's extent outward to integer edges.
    pub fn of(widget: &Widget) -> Self {
        let dx = widget.width / 2.0;
        let dy = widget.height / 2.0;
        let x = widget.x as f64;
        let y = widget.y as f64;

        Self {
            left: (x - dx).floor() as i64,
            right: (x + dx).ceil() as i64,
            low: (y - dy).floor() as i64,
            high: (y + dy).ceil() as i64,
        }
    }
}
