#[cfg(test)]
mod tests {
    use boxstacks::entities::{BSSolution, Layout, PlacedBox, StackLimit};
    use boxstacks::flip::InstanceFlipper;
    use boxstacks::geometry::{Axis, Dims, Orientation, OrientationRange, Point};
    use boxstacks::io;
    use boxstacks::io::ext_repr::ExtBSInstance;

    const SAMPLE_JSON: &str = r#"{
        "name": "sample",
        "items": [
            {"id": 0, "dims": [4.0, 2.0, 1.0], "weight": 7.5, "stackability_id": 0, "max_stackability": 3, "demand": 4},
            {"id": 1, "dims": [2.0, 2.0, 2.0], "weight": 3.0, "stackability_id": 1, "max_stackability": 2, "allowed_orientations": [0, 1], "demand": 2},
            {"id": 2, "dims": [3.0, 1.0, 1.0], "weight": 1.0, "stackability_id": 0, "max_stackability": 1, "allowed_orientations": [0, 2], "demand": 1}
        ],
        "bins": [
            {"id": 0, "dims": [10.0, 5.0, 3.0], "stock": 2, "cost": 100, "max_weight": 50.0, "stack_limit": {"axis": 2, "max_extent": 2.5}},
            {"id": 1, "dims": [8.0, 8.0, 4.0], "stock": 1, "cost": 150, "stack_limit": {"axis": 0, "max_extent": 6.0}}
        ]
    }"#;

    #[test]
    fn import_reads_a_json_instance() {
        let ext_instance: ExtBSInstance = serde_json::from_str(SAMPLE_JSON).unwrap();
        let instance = io::import(&ext_instance).unwrap();

        assert_eq!(instance.items.len(), 3);
        assert_eq!(instance.bins.len(), 2);
        assert_eq!(instance.item(0).dims, Dims::new(4.0, 2.0, 1.0));
        assert_eq!(instance.item(0).allowed_orientations, OrientationRange::Any);
        assert_eq!(
            instance.item(1).allowed_orientations,
            OrientationRange::Upright
        );
        assert_eq!(
            instance.item(2).allowed_orientations,
            OrientationRange::Discrete(vec![Orientation::Lwh, Orientation::Lhw])
        );
        assert_eq!(instance.item_qty(0), 4);
        assert_eq!(instance.bin(0).max_weight, Some(50.0));
        assert_eq!(instance.bin(1).max_weight, None);
        assert_eq!(
            instance.bin(1).stack_limit,
            Some(StackLimit {
                axis: Axis::X,
                max_extent: 6.0
            })
        );
        assert_eq!(instance.total_item_qty(), 7);
    }

    #[test]
    fn import_rejects_gapped_ids() {
        let mut ext_instance: ExtBSInstance = serde_json::from_str(SAMPLE_JSON).unwrap();
        ext_instance.items[2].id = 7;

        assert!(io::import(&ext_instance).is_err());
    }

    #[test]
    fn import_rejects_unknown_orientation_indices() {
        let mut ext_instance: ExtBSInstance = serde_json::from_str(SAMPLE_JSON).unwrap();
        ext_instance.items[1].allowed_orientations = Some(vec![0, 6]);

        assert!(io::import(&ext_instance).is_err());
    }

    #[test]
    fn import_rejects_unknown_axis_indices() {
        let mut ext_instance: ExtBSInstance = serde_json::from_str(SAMPLE_JSON).unwrap();
        ext_instance.bins[0].stack_limit.as_mut().unwrap().axis = 3;

        assert!(io::import(&ext_instance).is_err());
    }

    #[test]
    fn import_rejects_degenerate_dims() {
        let mut ext_instance: ExtBSInstance = serde_json::from_str(SAMPLE_JSON).unwrap();
        ext_instance.items[0].dims = (4.0, 0.0, 1.0);

        assert!(io::import(&ext_instance).is_err());
    }

    #[test]
    fn export_writes_the_solution_statistics() {
        let ext_instance: ExtBSInstance = serde_json::from_str(SAMPLE_JSON).unwrap();
        let instance = io::import(&ext_instance).unwrap();

        let solution = BSSolution::new(vec![Layout::new(
            0,
            vec![PlacedBox {
                item_id: 0,
                position: Point(0.0, 0.0, 0.0),
                orientation: Orientation::Lhw,
            }],
        )]);

        let ext_solution = io::export(&instance, &solution, solution.time_stamp);

        assert_eq!(ext_solution.cost, 100);
        assert_eq!(ext_solution.density, solution.density(&instance));
        assert_eq!(ext_solution.run_time_sec, 0);
        assert_eq!(ext_solution.layouts.len(), 1);
        assert_eq!(ext_solution.layouts[0].bin_id, 0);
        let ext_placed = &ext_solution.layouts[0].placed_boxes[0];
        assert_eq!(ext_placed.item_id, 0);
        assert_eq!(ext_placed.position, (0.0, 0.0, 0.0));
        assert_eq!(ext_placed.orientation, Orientation::Lhw.to_index());
    }

    #[test]
    fn imported_instances_can_be_flipped() {
        let ext_instance: ExtBSInstance = serde_json::from_str(SAMPLE_JSON).unwrap();
        let instance = io::import(&ext_instance).unwrap();

        let flipper = InstanceFlipper::new(&instance);
        let flipped = flipper.flipped_instance();

        assert_eq!(flipped.bin(0).dims, Dims::new(5.0, 10.0, 3.0));
        assert_eq!(
            flipped.bin(1).stack_limit,
            Some(StackLimit {
                axis: Axis::Y,
                max_extent: 6.0
            })
        );
        assert_eq!(flipped.item(2).dims, Dims::new(1.0, 3.0, 1.0));
    }
}
