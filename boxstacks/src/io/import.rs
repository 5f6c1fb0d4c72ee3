use crate::entities::{BSInstance, Bin, Item, StackLimit};
use crate::geometry::{Axis, Dims, Orientation, OrientationRange};
use crate::io::ext_repr::{ExtBSInstance, ExtBin, ExtItem};
use anyhow::{Result, anyhow, bail, ensure};
use itertools::Itertools;
use log::warn;
use rayon::prelude::*;

/// Imports an instance into the library
pub fn import(ext_instance: &ExtBSInstance) -> Result<BSInstance> {
    let items = {
        let mut items = ext_instance
            .items
            .par_iter()
            .map(|ext_item| {
                let item = import_item(ext_item)?;
                let demand = ext_item.demand as usize;
                Ok((item, demand))
            })
            .collect::<Result<Vec<(Item, usize)>>>()?;

        items.sort_by_key(|(item, _)| item.id);
        ensure!(
            items.iter().enumerate().all(|(i, (item, _))| item.id == i),
            "All items should have consecutive IDs starting from 0. IDs: {:?}",
            items.iter().map(|(item, _)| item.id).sorted().collect_vec()
        );
        items
    };

    let bins = {
        let mut bins = ext_instance
            .bins
            .par_iter()
            .map(import_bin)
            .collect::<Result<Vec<Bin>>>()?;

        bins.sort_by_key(|bin| bin.id);
        ensure!(
            bins.iter().enumerate().all(|(i, bin)| bin.id == i),
            "All bins should have consecutive IDs starting from 0. IDs: {:?}",
            bins.iter().map(|bin| bin.id).sorted().collect_vec()
        );
        bins
    };

    for (item, _) in &items {
        if !fits_in_some_bin(item, &bins) {
            warn!(
                "item {} does not fit in any bin in any allowed orientation",
                item.id
            );
        }
    }

    Ok(BSInstance::new(items, bins))
}

fn import_item(ext_item: &ExtItem) -> Result<Item> {
    let (x, y, z) = ext_item.dims;
    let dims = Dims::try_new(x, y, z)?;
    ensure!(
        ext_item.weight >= 0.0,
        "item {} has a negative weight: {}",
        ext_item.id,
        ext_item.weight
    );
    ensure!(
        ext_item.max_stackability >= 1,
        "item {} has a max_stackability of 0, a box always counts itself",
        ext_item.id
    );

    let allowed_orientations = match ext_item.allowed_orientations.as_ref() {
        Some(indices) => {
            let orientations = indices
                .iter()
                .map(|&index| {
                    Orientation::from_index(index)
                        .ok_or_else(|| anyhow!("unknown orientation index: {index}"))
                })
                .collect::<Result<Vec<Orientation>>>()?;
            match orientations.as_slice() {
                [Orientation::Lwh] => OrientationRange::Fixed,
                [Orientation::Lwh, Orientation::Wlh] => OrientationRange::Upright,
                _ => OrientationRange::Discrete(orientations),
            }
        }
        None => OrientationRange::Any,
    };

    Ok(Item::new(
        ext_item.id as usize,
        dims,
        ext_item.weight,
        ext_item.stackability_id as usize,
        ext_item.max_stackability,
        allowed_orientations,
    ))
}

fn import_bin(ext_bin: &ExtBin) -> Result<Bin> {
    let (x, y, z) = ext_bin.dims;
    let dims = Dims::try_new(x, y, z)?;
    if let Some(max_weight) = ext_bin.max_weight {
        ensure!(
            max_weight >= 0.0,
            "bin {} has a negative max_weight: {max_weight}",
            ext_bin.id
        );
    }

    let stack_limit = match ext_bin.stack_limit {
        Some(ext_limit) => {
            let axis = match ext_limit.axis {
                0 => Axis::X,
                1 => Axis::Y,
                2 => Axis::Z,
                index => bail!("unknown axis index: {index}"),
            };
            Some(StackLimit {
                axis,
                max_extent: ext_limit.max_extent,
            })
        }
        None => None,
    };

    Ok(Bin::new(
        ext_bin.id as usize,
        dims,
        ext_bin.stock,
        ext_bin.cost,
        ext_bin.max_weight,
        stack_limit,
    ))
}

fn fits_in_some_bin(item: &Item, bins: &[Bin]) -> bool {
    Orientation::ALL
        .iter()
        .filter(|o| item.allowed_orientations.contains(**o))
        .any(|o| {
            bins.iter()
                .any(|bin| bin.dims.contains(&o.extents(item.dims)))
        })
}
