//! The axis-swap transform on instances and solutions.
//!
//! Exchanging the x- and y-axes of an instance everywhere (box extents, bin extents and
//! axis-scoped rules) yields a structurally equivalent instance. A solution computed against
//! the swapped instance maps back to a solution of the original instance with the same bin
//! assignments and objective value, which makes solving both versions and keeping the better
//! result a cheap source of geometric diversity for axis-order-sensitive search heuristics.

use crate::entities::BSInstance;
use crate::entities::BSSolution;
use crate::entities::{Bin, Item, Layout, PlacedBox, StackLimit};
use crate::util::assertions;
use anyhow::{Result, ensure};
use itertools::Itertools;

/// Derives an x/y-swapped version of a [`BSInstance`] and maps solutions computed against it
/// back into the coordinate frame of the original instance.
///
/// The original instance is borrowed and must outlive the flipper; the flipped instance is
/// built once at construction and owned by the flipper. The z-axis, along which boxes are
/// stacked, is never part of the swap, so stacking legality is unaffected by the relabeling.
/// A flipper is immutable after construction and can be shared between threads.
#[derive(Debug, Clone)]
pub struct InstanceFlipper<'a> {
    original: &'a BSInstance,
    flipped: BSInstance,
}

impl<'a> InstanceFlipper<'a> {
    pub fn new(original: &'a BSInstance) -> Self {
        let flipped = flip_instance(original);
        debug_assert!(assertions::instances_same_shape(original, &flipped));

        Self { original, flipped }
    }

    /// The instance this flipper was built from.
    pub fn original_instance(&self) -> &BSInstance {
        self.original
    }

    /// The x/y-swapped counterpart of the original instance.
    /// Every call returns the same underlying instance.
    pub fn flipped_instance(&self) -> &BSInstance {
        &self.flipped
    }

    /// Maps a solution computed against [`flipped_instance`](Self::flipped_instance) back into
    /// the coordinate frame of the original instance.
    ///
    /// Bin assignments, box identities and the objective value are untouched; only positions
    /// and orientations are re-expressed. Returns an error if the solution references item or
    /// bin ids outside the catalogs, i.e. it cannot have been computed against an instance
    /// shaped like the flipped one.
    pub fn unflip_solution(&self, solution: &BSSolution) -> Result<BSSolution> {
        ensure!(
            assertions::solution_ids_in_range(solution, &self.flipped),
            "solution is not scoped to the flipped instance: item or bin id out of range"
        );

        let layouts = solution.layouts.iter().map(unflip_layout).collect_vec();

        Ok(BSSolution {
            layouts,
            time_stamp: solution.time_stamp,
        })
    }
}

fn flip_instance(instance: &BSInstance) -> BSInstance {
    let items = instance
        .items
        .iter()
        .map(|(item, qty)| (flip_item(item), *qty))
        .collect_vec();
    let bins = instance.bins.iter().map(flip_bin).collect_vec();

    BSInstance::new(items, bins)
}

fn flip_item(item: &Item) -> Item {
    Item {
        id: item.id,
        dims: item.dims.swapped_xy(),
        weight: item.weight,
        stackability_id: item.stackability_id,
        max_stackability: item.max_stackability,
        allowed_orientations: item.allowed_orientations.swapped_xy(),
    }
}

fn flip_bin(bin: &Bin) -> Bin {
    Bin {
        id: bin.id,
        dims: bin.dims.swapped_xy(),
        stock: bin.stock,
        cost: bin.cost,
        max_weight: bin.max_weight,
        stack_limit: bin.stack_limit.map(|limit| StackLimit {
            axis: limit.axis.swapped_xy(),
            max_extent: limit.max_extent,
        }),
    }
}

fn unflip_layout(layout: &Layout) -> Layout {
    Layout {
        bin_id: layout.bin_id,
        placed_boxes: layout.placed_boxes.iter().map(unflip_placed_box).collect_vec(),
    }
}

fn unflip_placed_box(placed_box: &PlacedBox) -> PlacedBox {
    PlacedBox {
        item_id: placed_box.item_id,
        position: placed_box.position.swapped_xy(),
        orientation: placed_box.orientation.swapped_xy(),
    }
}
