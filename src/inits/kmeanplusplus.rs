use crate::{distance, Centroid, Point, Primitive};
use rand::{Rng, RngCore};

/// K-Means++ initialization method
///
/// ## Description
/// This initialization method starts by selecting one sample as first centroid.
/// Proceeding from there, the method iteratively selects one new centroid (per iteration) by calculating
/// each remaining sample's probability of "being a centroid", which is proportional to its squared distance
/// to the nearest already chosen centroid. One sample is then drawn by inverting the cumulative distribution
/// with a single uniform draw.
/// If rounding lets the draw exceed the last cumulative probability, the last candidate is taken. If all
/// remaining samples coincide with chosen centroids (no probability mass left), one of them is drawn uniformly.
#[inline(always)]
pub(crate) fn calculate<T: Primitive>(samples: &[Point<T>], k: usize, rnd: &mut dyn RngCore) -> Vec<Centroid<T>> {
    let mut centroids = Vec::with_capacity(k);
    let mut chosen = vec![false; samples.len()];

    { // Randomly select first centroid
        let first_idx = rnd.gen_range(0..samples.len());
        chosen[first_idx] = true;
        centroids.push(Centroid::from(&samples[first_idx]));
    }
    let mut nearest: Vec<T> = samples.iter().map(|s| distance::squared_euclidean(s, &centroids[0])).collect();

    while centroids.len() < k { // For each following centroid...
        let candidates: Vec<usize> = (0..samples.len()).filter(|&idx| !chosen[idx]).collect();
        let distsum: T = candidates.iter().map(|&idx| nearest[idx]).sum();

        let sampled_idx = if distsum > T::zero() && distsum.is_finite() {
            let draw = rnd.gen_range(T::zero()..T::one());
            select_by_cumulative(&candidates, &nearest, distsum, draw)
        } else {
            match candidates.get(rnd.gen_range(0..candidates.len().max(1))) {
                Some(&idx) => idx,
                None => break,
            }
        };

        chosen[sampled_idx] = true;
        let picked = Centroid::from(&samples[sampled_idx]);
        centroids.push(picked);
        samples.iter().zip(nearest.iter_mut())
            .for_each(|(s, d)| *d = d.min(distance::squared_euclidean(s, &picked)));
    }
    centroids
}

/// Index of the first candidate whose cumulative probability exceeds **draw** (the last one as fallback).
fn select_by_cumulative<T: Primitive>(candidates: &[usize], weights: &[T], distsum: T, draw: T) -> usize {
    let mut cumulative = T::zero();
    for &idx in candidates {
        cumulative += weights[idx] / distsum;
        if cumulative > draw {
            return idx;
        }
    }
    candidates[candidates.len() - 1]
}
