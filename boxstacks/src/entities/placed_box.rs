use crate::entities::Item;
use crate::geometry::Dims;
use crate::geometry::Orientation;
use crate::geometry::Point;

/// Represents a box that has been placed in a [`Layout`](crate::entities::Layout)
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedBox {
    /// Id of the [`Item`] in the instance
    pub item_id: usize,
    /// Position of the corner of the box closest to the bin origin
    pub position: Point,
    /// Orientation in which the box was placed
    pub orientation: Orientation,
}

impl PlacedBox {
    /// Extents of the box along the bin's axes, for the item it was placed as.
    pub fn extents(&self, item: &Item) -> Dims {
        self.orientation.extents(item.dims)
    }
}
