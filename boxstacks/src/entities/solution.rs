use crate::entities::BSInstance;
use crate::entities::Layout;
use std::time::Instant;

/// A solution to a [`BSInstance`]: an assignment of placed boxes to bins.
/// Always interpreted against one specific instance, it is not self-describing.
#[derive(Debug, Clone)]
pub struct BSSolution {
    /// Layouts which compose the solution, one per used bin
    pub layouts: Vec<Layout>,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl BSSolution {
    pub fn new(layouts: Vec<Layout>) -> Self {
        Self {
            layouts,
            time_stamp: Instant::now(),
        }
    }

    /// Total cost of all the bins used in the solution.
    pub fn cost(&self, instance: &BSInstance) -> u64 {
        self.layouts
            .iter()
            .map(|layout| instance.bin(layout.bin_id).cost)
            .sum()
    }

    pub fn density(&self, instance: &BSInstance) -> f32 {
        let total_bin_volume = self
            .layouts
            .iter()
            .map(|layout| instance.bin(layout.bin_id).volume())
            .sum::<f32>();

        let total_box_volume = self
            .layouts
            .iter()
            .map(|layout| layout.placed_volume(instance))
            .sum::<f32>();

        total_box_volume / total_bin_volume
    }

    pub fn total_placed_qty(&self) -> usize {
        self.layouts
            .iter()
            .map(|layout| layout.placed_boxes.len())
            .sum()
    }
}
