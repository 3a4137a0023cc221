use crate::{Planar, Primitive};

/// Squared euclidean distance between two positions.
#[inline(always)]
pub fn squared_euclidean<T, A, B>(a: &A, b: &B) -> T
where
    T: Primitive,
    A: Planar<T> + ?Sized,
    B: Planar<T> + ?Sized,
{
    let (dx, dy) = (a.x() - b.x(), a.y() - b.y());
    dx * dx + dy * dy
}

/// Euclidean distance `sqrt((ax-bx)^2 + (ay-by)^2)` between two positions.
#[inline(always)]
pub fn euclidean<T, A, B>(a: &A, b: &B) -> T
where
    T: Primitive,
    A: Planar<T> + ?Sized,
    B: Planar<T> + ?Sized,
{
    squared_euclidean(a, b).sqrt()
}

/// Distance from `sample` to the nearest of `centroids` (infinity, if there are none).
#[inline]
pub(crate) fn nearest_distance<T, A, B>(sample: &A, centroids: &[B]) -> T
where
    T: Primitive,
    A: Planar<T>,
    B: Planar<T>,
{
    centroids.iter()
        .map(|c| euclidean(sample, c))
        .fold(T::infinity(), T::min)
}
