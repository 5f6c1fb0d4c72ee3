use crate::geometry::Dims;
use crate::geometry::OrientationRange;

/// Box type to be packed.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Unique identifier for the box type
    pub id: usize,
    /// Extents of the box along the x-, y- and z-axis in its reference orientation
    pub dims: Dims,
    /// Weight of one box
    pub weight: f32,
    /// Boxes can only rest on top of boxes with the same stackability id
    pub stackability_id: usize,
    /// Maximum number of boxes in a stack counting this box and all boxes above it
    pub max_stackability: usize,
    /// Orientations in which the box may be placed
    pub allowed_orientations: OrientationRange,
}

impl Item {
    pub fn new(
        id: usize,
        dims: Dims,
        weight: f32,
        stackability_id: usize,
        max_stackability: usize,
        allowed_orientations: OrientationRange,
    ) -> Item {
        assert!(
            max_stackability >= 1,
            "max_stackability must be at least 1, a box always counts itself"
        );
        Item {
            id,
            dims,
            weight,
            stackability_id,
            max_stackability,
            allowed_orientations,
        }
    }

    pub fn volume(&self) -> f32 {
        self.dims.volume()
    }
}
