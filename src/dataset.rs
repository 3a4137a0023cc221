use crate::{error::{Error, Result}, Point, Primitive};
use rand::prelude::*;
use std::ops::Range;

/// Amount of points an interactive session starts with.
pub const DEFAULT_SAMPLE_CNT: usize = 200;
/// Both coordinates of generated points are drawn from `[0, DEFAULT_EXTENT)`.
pub const DEFAULT_EXTENT: f64 = 100.0;
/// Amount of clusters an interactive session starts with, unless the dataset is smaller.
pub const DEFAULT_CLUSTER_CNT: usize = 3;

/// Initial k for a dataset of **sample_cnt** points: `min(3, sample_cnt)`.
pub fn default_cluster_count(sample_cnt: usize) -> usize {
    DEFAULT_CLUSTER_CNT.min(sample_cnt)
}

/// Generate **sample_cnt** points, with both coordinates independently and uniformly drawn
/// from `[0, 100)`.
///
/// ## Arguments
/// - **sample_cnt**: Amount of points to generate
/// - **rnd**: Random number generator to use (Pass a seeded one, if you want reproducible results)
pub fn generate_dataset<T, R>(sample_cnt: usize, rnd: &mut R) -> Vec<Point<T>>
where
    T: Primitive,
    R: Rng + ?Sized,
{
    let extent = T::from_f64(DEFAULT_EXTENT);
    (0..sample_cnt)
        .map(|_| Point::new(rnd.gen_range(T::zero()..extent), rnd.gen_range(T::zero()..extent)))
        .collect()
}

/// Like [`generate_dataset`], but both coordinates are drawn from the half-open **range**.
///
/// Fails with [`Error::InvalidArgument`], if the range is empty, if a bound is not finite, or if
/// its width `end - start` overflows.
pub fn generate_dataset_within<T, R>(sample_cnt: usize, range: Range<T>, rnd: &mut R) -> Result<Vec<Point<T>>>
where
    T: Primitive,
    R: Rng + ?Sized,
{
    if !range.start.is_finite() || !range.end.is_finite() {
        return Err(Error::invalid_argument("range", format!("bounds must be finite, got {}..{}", range.start, range.end)));
    }
    if !(range.start < range.end) {
        return Err(Error::invalid_argument("range", format!("range {}..{} is empty", range.start, range.end)));
    }
    if !(range.end - range.start).is_finite() {
        return Err(Error::invalid_argument("range", format!("width of {}..{} is not representable", range.start, range.end)));
    }
    Ok((0..sample_cnt)
        .map(|_| Point::new(rnd.gen_range(range.clone()), rnd.gen_range(range.clone())))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn default_extent() {
        let mut rnd = StdRng::seed_from_u64(1337);
        let points: Vec<Point<f64>> = generate_dataset(DEFAULT_SAMPLE_CNT, &mut rnd);
        assert_eq!(points.len(), DEFAULT_SAMPLE_CNT);
        assert!(points.iter().all(|p| (0.0..100.0).contains(&p.x) && (0.0..100.0).contains(&p.y)));
    }

    #[test]
    fn default_k() {
        assert_eq!(default_cluster_count(DEFAULT_SAMPLE_CNT), 3);
        assert_eq!(default_cluster_count(2), 2);
        assert_eq!(default_cluster_count(0), 0);
    }

    #[test]
    fn empty_dataset() {
        let mut rnd = StdRng::seed_from_u64(1);
        let points: Vec<Point<f32>> = generate_dataset(0, &mut rnd);
        assert!(points.is_empty());
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a: Vec<Point<f64>> = generate_dataset(50, &mut StdRng::seed_from_u64(7));
        let b: Vec<Point<f64>> = generate_dataset(50, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn custom_range() {
        let mut rnd = StdRng::seed_from_u64(3);
        let points = generate_dataset_within(100, -5.0f32..5.0, &mut rnd).unwrap();
        assert_eq!(points.len(), 100);
        assert!(points.iter().all(|p| (-5.0..5.0).contains(&p.x) && (-5.0..5.0).contains(&p.y)));
    }

    #[test]
    fn invalid_ranges() {
        let mut rnd = StdRng::seed_from_u64(3);
        assert!(matches!(generate_dataset_within(10, 5.0f64..5.0, &mut rnd), Err(Error::InvalidArgument { name: "range", .. })));
        assert!(matches!(generate_dataset_within(10, 5.0f64..1.0, &mut rnd), Err(Error::InvalidArgument { .. })));
        assert!(matches!(generate_dataset_within(10, 0.0f64..f64::INFINITY, &mut rnd), Err(Error::InvalidArgument { .. })));
        assert!(matches!(generate_dataset_within(10, f64::NAN..1.0, &mut rnd), Err(Error::InvalidArgument { .. })));
        assert!(matches!(generate_dataset_within(3, -f64::MAX..f64::MAX, &mut rnd), Err(Error::InvalidArgument { name: "range", .. })));
        assert!(matches!(generate_dataset_within(3, f32::MIN..f32::MAX, &mut rnd), Err(Error::InvalidArgument { name: "range", .. })));
        // wide, but still representable
        assert_eq!(generate_dataset_within(3, -f64::MAX / 2.0..f64::MAX / 2.0, &mut rnd).unwrap().len(), 3);
    }
}
