use crate::entities::{BSInstance, BSSolution};
use crate::io::ext_repr::{ExtBSSolution, ExtLayout, ExtPlacedBox};
use itertools::Itertools;
use std::time::Instant;

/// Exports a solution out of the library
pub fn export(instance: &BSInstance, solution: &BSSolution, epoch: Instant) -> ExtBSSolution {
    let layouts = solution
        .layouts
        .iter()
        .map(|layout| ExtLayout {
            bin_id: layout.bin_id as u64,
            placed_boxes: layout
                .placed_boxes
                .iter()
                .map(|pb| ExtPlacedBox {
                    item_id: pb.item_id as u64,
                    position: pb.position.into(),
                    orientation: pb.orientation.to_index(),
                })
                .collect_vec(),
            density: layout.density(instance),
        })
        .collect_vec();

    ExtBSSolution {
        cost: solution.cost(instance),
        layouts,
        density: solution.density(instance),
        run_time_sec: solution.time_stamp.duration_since(epoch).as_secs(),
    }
}
