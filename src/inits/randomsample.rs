use crate::{Centroid, Point, Primitive};
use rand::{seq::index, RngCore};

/// Random sample initialization method (a.k.a. Forgy)
///
/// ## Description
/// This initialization method draws k distinct samples uniformly at random (without replacement),
/// and copies them as initial centroids. Only indices are sampled, the sample slice itself is left untouched.
#[inline(always)]
pub(crate) fn calculate<T: Primitive>(samples: &[Point<T>], k: usize, rnd: &mut dyn RngCore) -> Vec<Centroid<T>> {
    index::sample(rnd, samples.len(), k).into_iter()
        .map(|idx| Centroid::from(&samples[idx]))
        .collect()
}
