use crate::Primitive;

/// Read access to a position in the plane. Implemented by both [`Point`] and [`Centroid`],
/// so distances can be measured between any two of them.
pub trait Planar<T: Primitive> {
    fn x(&self) -> T;
    fn y(&self) -> T;
}

/// A single observation of the dataset.
///
/// The clustering never changes a point's coordinates, only the cluster label
/// stored next to it in the assignment vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
}
impl<T: Primitive> Point<T> {
    pub fn new(x: T, y: T) -> Self { Self { x, y } }
}
impl<T: Primitive> Planar<T> for Point<T> {
    #[inline(always)] fn x(&self) -> T { self.x }
    #[inline(always)] fn y(&self) -> T { self.y }
}
impl<T: Primitive> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self { Self { x, y } }
}

/// Estimated representative of a cluster.
///
/// Same shape as [`Point`], but a derived value: either copied from a sample during
/// initialization, placed by the user (manual initialization) or computed as a cluster mean.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Centroid<T = f64> {
    pub x: T,
    pub y: T,
}
impl<T: Primitive> Centroid<T> {
    pub fn new(x: T, y: T) -> Self { Self { x, y } }
}
impl<T: Primitive> Planar<T> for Centroid<T> {
    #[inline(always)] fn x(&self) -> T { self.x }
    #[inline(always)] fn y(&self) -> T { self.y }
}
impl<T: Primitive> From<Point<T>> for Centroid<T> {
    fn from(p: Point<T>) -> Self { Self { x: p.x, y: p.y } }
}
impl<T: Primitive> From<&Point<T>> for Centroid<T> {
    fn from(p: &Point<T>) -> Self { Self { x: p.x, y: p.y } }
}
impl<T: Primitive> From<(T, T)> for Centroid<T> {
    fn from((x, y): (T, T)) -> Self { Self { x, y } }
}
