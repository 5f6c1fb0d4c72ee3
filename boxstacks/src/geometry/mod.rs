mod axis;
mod dims;
mod orientation;
mod point;

#[doc(inline)]
pub use axis::Axis;
#[doc(inline)]
pub use dims::Dims;
#[doc(inline)]
pub use orientation::Orientation;
#[doc(inline)]
pub use orientation::OrientationRange;
#[doc(inline)]
pub use point::Point;
