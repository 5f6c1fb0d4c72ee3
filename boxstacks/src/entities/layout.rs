use crate::entities::BSInstance;
use crate::entities::PlacedBox;

/// A bin in use: one copy of a [`Bin`](crate::entities::Bin) with a set of boxes placed inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    /// Id of the [`Bin`](crate::entities::Bin) in the instance
    pub bin_id: usize,
    /// All boxes placed in the bin
    pub placed_boxes: Vec<PlacedBox>,
}

impl Layout {
    pub fn new(bin_id: usize, placed_boxes: Vec<PlacedBox>) -> Self {
        Self {
            bin_id,
            placed_boxes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placed_boxes.is_empty()
    }

    pub fn placed_volume(&self, instance: &BSInstance) -> f32 {
        self.placed_boxes
            .iter()
            .map(|pb| instance.item(pb.item_id).volume())
            .sum()
    }

    pub fn placed_weight(&self, instance: &BSInstance) -> f32 {
        self.placed_boxes
            .iter()
            .map(|pb| instance.item(pb.item_id).weight)
            .sum()
    }

    /// Share of the bin volume occupied by boxes
    pub fn density(&self, instance: &BSInstance) -> f32 {
        self.placed_volume(instance) / instance.bin(self.bin_id).volume()
    }
}
