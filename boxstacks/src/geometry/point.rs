use crate::geometry::Axis;

/// Geometric primitive representing a position in a bin
#[derive(Debug, Clone, PartialEq, Copy)]
pub struct Point(pub f32, pub f32, pub f32);

impl Point {
    pub fn x(&self) -> f32 {
        self.0
    }

    pub fn y(&self) -> f32 {
        self.1
    }

    pub fn z(&self) -> f32 {
        self.2
    }

    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.0,
            Axis::Y => self.1,
            Axis::Z => self.2,
        }
    }

    /// The same point with its x- and y-coordinates exchanged
    pub fn swapped_xy(self) -> Point {
        Point(self.1, self.0, self.2)
    }
}

impl From<Point> for (f32, f32, f32) {
    fn from(p: Point) -> Self {
        (p.0, p.1, p.2)
    }
}

impl From<(f32, f32, f32)> for Point {
    fn from(p: (f32, f32, f32)) -> Self {
        Point(p.0, p.1, p.2)
    }
}
