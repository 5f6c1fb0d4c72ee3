use crate::geometry::Axis;
use crate::geometry::Dims;

/// Container type in which boxes can be packed.
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    /// Unique identifier for the bin type
    pub id: usize,
    /// Inner extents of the bin
    pub dims: Dims,
    /// The number of copies of this bin available to be used
    pub stock: usize,
    /// The cost of using a bin of this type
    pub cost: u64,
    /// Maximum total weight of the boxes packed in this bin
    pub max_weight: Option<f32>,
    /// Cap on how far any placed box may extend along one specific axis
    pub stack_limit: Option<StackLimit>,
}

impl Bin {
    pub fn new(
        id: usize,
        dims: Dims,
        stock: usize,
        cost: u64,
        max_weight: Option<f32>,
        stack_limit: Option<StackLimit>,
    ) -> Self {
        Self {
            id,
            dims,
            stock,
            cost,
            max_weight,
            stack_limit,
        }
    }

    pub fn volume(&self) -> f32 {
        self.dims.volume()
    }
}

/// Axis-scoped packing rule: no placed box may protrude past `max_extent` along `axis`
/// (e.g. usable height below a bin's ceiling).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackLimit {
    /// The axis the rule is measured along
    pub axis: Axis,
    /// Furthest coordinate along `axis` that any placed box may reach
    pub max_extent: f32,
}
