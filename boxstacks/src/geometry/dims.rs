use crate::geometry::Axis;
use anyhow::Result;
use anyhow::ensure;

/// Extents of a box or bin along the three axes
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Dims {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Dims {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Dims { x, y, z }
    }

    pub fn try_new(x: f32, y: f32, z: f32) -> Result<Self> {
        ensure!(
            x > 0.0 && y > 0.0 && z > 0.0,
            "invalid dims, x: {x}, y: {y}, z: {z}"
        );
        Ok(Dims { x, y, z })
    }

    pub fn volume(&self) -> f32 {
        self.x * self.y * self.z
    }

    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Whether extents `other` fit within `self`, axis by axis
    pub fn contains(&self, other: &Dims) -> bool {
        self.x >= other.x && self.y >= other.y && self.z >= other.z
    }

    /// The same extents with the x- and y-components exchanged
    pub fn swapped_xy(self) -> Dims {
        Dims {
            x: self.y,
            y: self.x,
            z: self.z,
        }
    }
}

impl From<Dims> for (f32, f32, f32) {
    fn from(d: Dims) -> Self {
        (d.x, d.y, d.z)
    }
}
