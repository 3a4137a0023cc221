use crate::{distance, Centroid, Point, Primitive};
use rand::{Rng, RngCore};

/// Farthest-First initialization method
///
/// ## Description
/// The first centroid is a uniformly drawn sample. Every following centroid is the not-yet-chosen sample
/// with the largest distance to its nearest already chosen centroid (max-min selection).
/// Ties are resolved in favour of the sample that comes first.
#[inline(always)]
pub(crate) fn calculate<T: Primitive>(samples: &[Point<T>], k: usize, rnd: &mut dyn RngCore) -> Vec<Centroid<T>> {
    let mut centroids = Vec::with_capacity(k);
    let mut chosen = vec![false; samples.len()];

    let first_idx = rnd.gen_range(0..samples.len());
    chosen[first_idx] = true;
    centroids.push(Centroid::from(&samples[first_idx]));

    // Distance of each sample to its nearest chosen centroid, refreshed after each pick
    let mut nearest: Vec<T> = samples.iter().map(|s| distance::euclidean(s, &centroids[0])).collect();
    while centroids.len() < k {
        let mut farthest: Option<(usize, T)> = None;
        for (idx, dist) in nearest.iter().cloned().enumerate().filter(|(idx, _)| !chosen[*idx]) {
            match farthest {
                Some((_, best)) if !(dist > best) => {}
                _ => farthest = Some((idx, dist)),
            }
        }
        let Some((picked_idx, _)) = farthest else { break };
        chosen[picked_idx] = true;
        let picked = Centroid::from(&samples[picked_idx]);
        centroids.push(picked);
        samples.iter().zip(nearest.iter_mut())
            .for_each(|(s, d)| *d = d.min(distance::euclidean(s, &picked)));
    }
    centroids
}
