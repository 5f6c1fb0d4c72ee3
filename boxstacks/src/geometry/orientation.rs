use crate::geometry::Dims;

/// Axis-aligned orientation of a box inside a bin.
///
/// The variant name lists which of the box's reference extents (length `L`, width `W` and
/// height `H`, i.e. its x-, y- and z-extent in the reference orientation) lies along the
/// bin's x-, y- and z-axis respectively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Reference orientation
    Lwh,
    /// Quarter turn about the vertical axis
    Wlh,
    /// Tipped onto its long side
    Lhw,
    /// Tipped onto its short side
    Hwl,
    Whl,
    Hlw,
}

impl Orientation {
    /// All six axis-aligned orientations, in index order (see [`Orientation::to_index`]).
    pub const ALL: [Orientation; 6] = [
        Orientation::Lwh,
        Orientation::Wlh,
        Orientation::Lhw,
        Orientation::Hwl,
        Orientation::Whl,
        Orientation::Hlw,
    ];

    /// Extents along the bin's axes of a box with reference extents `dims`, placed in this orientation.
    pub fn extents(self, dims: Dims) -> Dims {
        let Dims { x: l, y: w, z: h } = dims;
        match self {
            Orientation::Lwh => Dims::new(l, w, h),
            Orientation::Wlh => Dims::new(w, l, h),
            Orientation::Lhw => Dims::new(l, h, w),
            Orientation::Hwl => Dims::new(h, w, l),
            Orientation::Whl => Dims::new(w, h, l),
            Orientation::Hlw => Dims::new(h, l, w),
        }
    }

    /// Whether the box's reference z-extent remains vertical in this orientation.
    pub fn keeps_upright(self) -> bool {
        matches!(self, Orientation::Lwh | Orientation::Wlh)
    }

    /// This orientation re-expressed after an exchange of the x- and y-axes of both the bin
    /// frame and the box's recorded extents.
    ///
    /// Conjugation by the transposition rather than plain composition, since the exchange
    /// relabels the box's extents as well as the bin axes. Satisfies
    /// `o.swapped_xy().extents(d.swapped_xy()) == o.extents(d).swapped_xy()` for any `d`.
    pub fn swapped_xy(self) -> Orientation {
        match self {
            Orientation::Lwh => Orientation::Lwh,
            Orientation::Wlh => Orientation::Wlh,
            Orientation::Lhw => Orientation::Hwl,
            Orientation::Hwl => Orientation::Lhw,
            Orientation::Whl => Orientation::Hlw,
            Orientation::Hlw => Orientation::Whl,
        }
    }

    /// Index of this orientation in [`Orientation::ALL`], used in external representations.
    pub fn to_index(self) -> u8 {
        match self {
            Orientation::Lwh => 0,
            Orientation::Wlh => 1,
            Orientation::Lhw => 2,
            Orientation::Hwl => 3,
            Orientation::Whl => 4,
            Orientation::Hlw => 5,
        }
    }

    pub fn from_index(index: u8) -> Option<Orientation> {
        Orientation::ALL.get(index as usize).copied()
    }
}

/// Set of orientations in which a box may be placed.
#[derive(Clone, Debug, PartialEq)]
pub enum OrientationRange {
    /// Only the reference orientation
    Fixed,
    /// The reference orientation and quarter turns about the vertical axis
    Upright,
    /// All six axis-aligned orientations
    Any,
    /// Discrete set of orientations
    Discrete(Vec<Orientation>),
}

impl OrientationRange {
    pub fn contains(&self, orientation: Orientation) -> bool {
        match self {
            OrientationRange::Fixed => orientation == Orientation::Lwh,
            OrientationRange::Upright => orientation.keeps_upright(),
            OrientationRange::Any => true,
            OrientationRange::Discrete(set) => set.contains(&orientation),
        }
    }

    /// The same set re-expressed after an x/y axis exchange, see [`Orientation::swapped_xy`].
    /// `Fixed` and `Upright` only admit orientations that the exchange leaves in place.
    pub fn swapped_xy(&self) -> OrientationRange {
        match self {
            OrientationRange::Fixed => OrientationRange::Fixed,
            OrientationRange::Upright => OrientationRange::Upright,
            OrientationRange::Any => OrientationRange::Any,
            OrientationRange::Discrete(set) => {
                OrientationRange::Discrete(set.iter().map(|o| o.swapped_xy()).collect())
            }
        }
    }
}
