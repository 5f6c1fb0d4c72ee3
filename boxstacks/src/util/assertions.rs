//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

use crate::entities::{BSInstance, BSSolution, Bin, Item, Layout, PlacedBox};
use float_cmp::approx_eq;
use itertools::Itertools;
use log::error;
use ordered_float::OrderedFloat;

pub fn instance_item_bin_ids_correct(items: &[(Item, usize)], bins: &[Bin]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, (item, _qty))| item.id == i)
        && bins.iter().enumerate().all(|(i, bin)| bin.id == i)
}

/// Both instances describe catalogs of the same shape: equal cardinalities, ids, demands and
/// stocks, in the same order. Axis-tagged extents and rules may differ.
pub fn instances_same_shape(a: &BSInstance, b: &BSInstance) -> bool {
    a.items.len() == b.items.len()
        && a.bins.len() == b.bins.len()
        && a.items
            .iter()
            .zip(&b.items)
            .all(|((i_a, qty_a), (i_b, qty_b))| i_a.id == i_b.id && qty_a == qty_b)
        && a.bins
            .iter()
            .zip(&b.bins)
            .all(|(b_a, b_b)| b_a.id == b_b.id && b_a.stock == b_b.stock)
}

/// All item and bin ids referenced by the solution are within the instance's catalogs.
pub fn solution_ids_in_range(solution: &BSSolution, instance: &BSInstance) -> bool {
    solution.layouts.iter().all(|layout| {
        layout.bin_id < instance.bins.len()
            && layout
                .placed_boxes
                .iter()
                .all(|pb| pb.item_id < instance.items.len())
    })
}

/// The solution is a feasible packing of the instance: bin stocks and item demands respected,
/// and every layout feasible on its own.
pub fn solution_is_feasible(solution: &BSSolution, instance: &BSInstance) -> bool {
    if !solution_ids_in_range(solution, instance) {
        error!("solution references item or bin ids outside the instance");
        return false;
    }

    let mut bin_used_qtys = vec![0; instance.bins.len()];
    let mut item_placed_qtys = vec![0; instance.items.len()];
    for layout in &solution.layouts {
        bin_used_qtys[layout.bin_id] += 1;
        for pb in &layout.placed_boxes {
            item_placed_qtys[pb.item_id] += 1;
        }
    }
    if bin_used_qtys
        .iter()
        .enumerate()
        .any(|(id, qty)| *qty > instance.bin_qty(id))
    {
        error!("solution uses more bins than in stock");
        return false;
    }
    if item_placed_qtys
        .iter()
        .enumerate()
        .any(|(id, qty)| *qty > instance.item_qty(id))
    {
        error!("solution places more boxes than demanded");
        return false;
    }

    solution
        .layouts
        .iter()
        .all(|layout| layout_is_feasible(layout, instance))
}

/// The layout is a feasible packing: every box in an allowed orientation, contained in the bin,
/// pairwise disjoint, within the weight budget and the stack limit, and stacked legally.
pub fn layout_is_feasible(layout: &Layout, instance: &BSInstance) -> bool {
    let bin = instance.bin(layout.bin_id);

    for pb in &layout.placed_boxes {
        let item = instance.item(pb.item_id);
        if !item.allowed_orientations.contains(pb.orientation) {
            error!(
                "box {} is placed in a disallowed orientation: {:?}",
                pb.item_id, pb.orientation
            );
            return false;
        }

        let extents = pb.extents(item);
        let inside = pb.position.x() >= 0.0
            && pb.position.y() >= 0.0
            && pb.position.z() >= 0.0
            && pb.position.x() + extents.x <= bin.dims.x
            && pb.position.y() + extents.y <= bin.dims.y
            && pb.position.z() + extents.z <= bin.dims.z;
        if !inside {
            error!(
                "box {} at {:?} protrudes from bin {}",
                pb.item_id, pb.position, bin.id
            );
            return false;
        }

        if let Some(limit) = bin.stack_limit {
            if pb.position.along(limit.axis) + extents.along(limit.axis) > limit.max_extent {
                error!(
                    "box {} exceeds the stack limit of bin {} along {:?}",
                    pb.item_id, bin.id, limit.axis
                );
                return false;
            }
        }
    }

    let boxes = layout
        .placed_boxes
        .iter()
        .map(|pb| (pb, pb.extents(instance.item(pb.item_id))))
        .collect_vec();
    for ((pb_a, ext_a), (pb_b, ext_b)) in boxes.iter().tuple_combinations() {
        let overlap = pb_a.position.x() < pb_b.position.x() + ext_b.x
            && pb_b.position.x() < pb_a.position.x() + ext_a.x
            && pb_a.position.y() < pb_b.position.y() + ext_b.y
            && pb_b.position.y() < pb_a.position.y() + ext_a.y
            && pb_a.position.z() < pb_b.position.z() + ext_b.z
            && pb_b.position.z() < pb_a.position.z() + ext_a.z;
        if overlap {
            error!("boxes {} and {} overlap", pb_a.item_id, pb_b.item_id);
            return false;
        }
    }

    if let Some(max_weight) = bin.max_weight {
        if layout.placed_weight(instance) > max_weight {
            error!("bin {} exceeds its maximum weight", bin.id);
            return false;
        }
    }

    stacks_are_legal(layout, instance)
}

/// Groups the boxes of a layout into vertical stacks by footprint position and checks the
/// stacking rules: every stack supported from the floor up, contiguous along z, uniform in
/// stackability id, and no box carrying more boxes above it than its stackability allows.
fn stacks_are_legal(layout: &Layout, instance: &BSInstance) -> bool {
    let mut stacks: Vec<Vec<&PlacedBox>> = vec![];
    for pb in &layout.placed_boxes {
        match stacks.iter_mut().find(|stack| {
            approx_eq!(f32, stack[0].position.x(), pb.position.x())
                && approx_eq!(f32, stack[0].position.y(), pb.position.y())
        }) {
            Some(stack) => stack.push(pb),
            None => stacks.push(vec![pb]),
        }
    }

    for stack in &mut stacks {
        stack.sort_by_key(|pb| OrderedFloat(pb.position.z()));

        if !approx_eq!(f32, stack[0].position.z(), 0.0) {
            error!("box {} floats above the bin floor", stack[0].item_id);
            return false;
        }
        for (below, above) in stack.iter().tuple_windows() {
            let below_item = instance.item(below.item_id);
            let below_top = below.position.z() + below.extents(below_item).z;
            if !approx_eq!(f32, below_top, above.position.z()) {
                error!(
                    "box {} is not resting on the box below it",
                    above.item_id
                );
                return false;
            }
            if below_item.stackability_id != instance.item(above.item_id).stackability_id {
                error!(
                    "box {} is stacked on box {} with a different stackability id",
                    above.item_id, below.item_id
                );
                return false;
            }
        }
        for (i, pb) in stack.iter().enumerate() {
            if stack.len() - i > instance.item(pb.item_id).max_stackability {
                error!(
                    "box {} carries more boxes than its max stackability allows",
                    pb.item_id
                );
                return false;
            }
        }
    }

    true
}
