use serde::{Deserialize, Serialize};

/// 3D Box-Stacking Bin Packing Problem instance
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtBSInstance {
    /// The name of the instance
    pub name: String,
    /// Set of box types to be packed
    pub items: Vec<ExtItem>,
    /// Set of bins to be used
    pub bins: Vec<ExtBin>,
}

/// External representation of an [`Item`](crate::entities::Item)
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtItem {
    /// Unique identifier of the box type
    pub id: u64,
    /// Extents along the x-, y- and z-axis in the reference orientation
    pub dims: (f32, f32, f32),
    /// Weight of one box
    pub weight: f32,
    /// Boxes can only rest on top of boxes with the same stackability id
    pub stackability_id: u64,
    /// Maximum number of boxes in a stack counting this box and all boxes above it
    pub max_stackability: usize,
    /// Indices of the allowed orientations, see [`Orientation::ALL`](crate::geometry::Orientation::ALL).
    /// All six orientations are allowed if not specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_orientations: Option<Vec<u8>>,
    /// Amount of times this box has to be packed
    pub demand: u64,
}

/// External representation of a [`Bin`](crate::entities::Bin)
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtBin {
    /// Unique identifier of the bin type
    pub id: u64,
    /// Inner extents along the x-, y- and z-axis
    pub dims: (f32, f32, f32),
    /// The number of copies of this bin available to be used
    pub stock: usize,
    /// The cost of using a bin of this type
    pub cost: u64,
    /// Maximum total weight of the boxes packed in this bin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<f32>,
    /// Cap on how far any placed box may extend along one axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_limit: Option<ExtStackLimit>,
}

/// External representation of a [`StackLimit`](crate::entities::StackLimit)
#[derive(Serialize, Deserialize, Clone, Copy)]
pub struct ExtStackLimit {
    /// Axis the rule is measured along: 0 = x, 1 = y, 2 = z
    pub axis: u8,
    /// Furthest coordinate along the axis that any placed box may reach
    pub max_extent: f32,
}

/// 3D Box-Stacking Bin Packing Problem solution
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtBSSolution {
    /// Total cost of all the bins used in the solution
    pub cost: u64,
    /// Layouts which compose the solution
    pub layouts: Vec<ExtLayout>,
    /// Sum of the volume of the packed boxes divided by the sum of the volume of the used bins
    pub density: f32,
    /// The time it took to generate the solution in seconds
    pub run_time_sec: u64,
}

/// External representation of a [`Layout`](crate::entities::Layout)
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtLayout {
    /// The bin that was used
    pub bin_id: u64,
    /// The boxes placed in the bin and where they were placed
    pub placed_boxes: Vec<ExtPlacedBox>,
    /// Share of the bin volume occupied by boxes
    pub density: f32,
}

/// External representation of a [`PlacedBox`](crate::entities::PlacedBox)
#[derive(Serialize, Deserialize, Clone)]
pub struct ExtPlacedBox {
    /// The id of the box type in the instance
    pub item_id: u64,
    /// Position of the corner of the box closest to the bin origin
    pub position: (f32, f32, f32),
    /// Index of the orientation the box was placed in, see [`Orientation::ALL`](crate::geometry::Orientation::ALL)
    pub orientation: u8,
}
