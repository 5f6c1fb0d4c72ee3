/// One of the three orthogonal axes of a bin.
/// `Z` is the vertical axis, along which boxes are stacked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// The label of this axis after an exchange of the x- and y-axes.
    pub fn swapped_xy(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
            Axis::Z => Axis::Z,
        }
    }
}
