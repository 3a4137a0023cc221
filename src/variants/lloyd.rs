use crate::{distance, error::{Error, Result}, Centroid, Point, Primitive};

/// What happens to a centroid that ends up without any samples after an assignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EmptyClusterPolicy {
    /// The centroid stays where it was.
    #[default]
    KeepPrevious,
    /// The centroid is moved onto the sample with the highest distance to its own centroid, taken from
    /// a cluster that keeps at least one other sample. That sample is then assigned to the empty cluster.
    Reseed,
}

/// Result of a single assignment + update round.
///
/// ## Fields
/// - **centroids**: New cluster centers, one per cluster
/// - **assignments**: Vector mapping each sample to its cluster for this round
/// - **centroid_frequency**: Amount of samples in each cluster
/// - **distsum**: The total sum of squared distances from all samples to their assigned centroid
#[derive(Clone, Debug, PartialEq)]
pub struct StepOutcome<T: Primitive> {
    pub centroids: Vec<Centroid<T>>,
    pub assignments: Vec<usize>,
    pub centroid_frequency: Vec<usize>,
    pub distsum: T,
}

/// Map each sample to the index of its nearest centroid (euclidean distance).
/// On ties, the centroid with the lowest index wins.
///
/// Fails with [`Error::PreconditionViolated`], if **centroids** is empty.
pub fn assign<T: Primitive>(samples: &[Point<T>], centroids: &[Centroid<T>]) -> Result<Vec<usize>> {
    update_cluster_assignments(samples, centroids).map(|(assignments, _)| assignments)
}

/// Recompute each centroid as the mean of the samples assigned to it.
///
/// ## Arguments
/// - **samples**: The dataset
/// - **assignments**: Cluster index per sample, as returned by [`assign`]
/// - **previous**: The centroids the assignment was computed against. Its length is the amount of clusters
///   (k), and it provides the positions of clusters that end up empty.
/// - **policy**: How to handle clusters without samples
///
/// Fails with [`Error::PreconditionViolated`], if **previous** is empty, if **assignments** does not
/// have one entry per sample, or if it contains an index outside `[0, k)`.
pub fn update<T: Primitive>(samples: &[Point<T>], assignments: &[usize], previous: &[Centroid<T>], policy: EmptyClusterPolicy) -> Result<Vec<Centroid<T>>> {
    check_assignments(samples, assignments, previous.len())?;
    let mut assignments = assignments.to_vec();
    let mut centroid_distances: Vec<T> = samples.iter().zip(assignments.iter())
        .map(|(s, &a)| distance::squared_euclidean(s, &previous[a]))
        .collect();
    let (centroids, _) = update_centroids(samples, &mut assignments, &mut centroid_distances, previous, policy);
    Ok(centroids)
}

pub(crate) struct Lloyd;
impl Lloyd {
    /// One full round: assign every sample to its nearest centroid, then move the centroids to their cluster means.
    pub(crate) fn step<T: Primitive>(samples: &[Point<T>], centroids: &[Centroid<T>], policy: EmptyClusterPolicy) -> Result<StepOutcome<T>> {
        let (mut assignments, mut centroid_distances) = update_cluster_assignments(samples, centroids)?;
        let (new_centroids, centroid_frequency) =
            update_centroids(samples, &mut assignments, &mut centroid_distances, centroids, policy);
        Ok(StepOutcome {
            centroids: new_centroids,
            assignments,
            centroid_frequency,
            distsum: centroid_distances.iter().cloned().sum(),
        })
    }
}

/// Nearest centroid per sample, together with the squared distance to it.
fn update_cluster_assignments<T: Primitive>(samples: &[Point<T>], centroids: &[Centroid<T>]) -> Result<(Vec<usize>, Vec<T>)> {
    if centroids.is_empty() {
        return Err(Error::precondition("cannot assign clusters without any centroids"));
    }
    Ok(samples.iter()
        .map(|s| {
            let mut best = (0, T::infinity(), T::infinity());
            for (idx, c) in centroids.iter().enumerate() {
                let sq_dist = distance::squared_euclidean(s, c);
                let dist = sq_dist.sqrt();
                if dist < best.1 {
                    best = (idx, dist, sq_dist);
                }
            }
            (best.0, best.2)
        })
        .unzip())
}

fn check_assignments<T: Primitive>(samples: &[Point<T>], assignments: &[usize], k: usize) -> Result<()> {
    if k == 0 {
        return Err(Error::precondition("cannot update an empty centroid set"));
    }
    if assignments.len() != samples.len() {
        return Err(Error::precondition(format!(
            "{} assignments given for {} samples", assignments.len(), samples.len())));
    }
    if let Some((idx, a)) = assignments.iter().enumerate().find(|&(_, &a)| a >= k) {
        return Err(Error::precondition(format!(
            "sample {} is assigned to cluster {}, but there are only {} clusters", idx, a, k)));
    }
    Ok(())
}

/// Cluster means for validated **assignments**. With [`EmptyClusterPolicy::Reseed`], **assignments** and
/// **centroid_distances** are patched for the samples that were moved into empty clusters.
fn update_centroids<T: Primitive>(
    samples: &[Point<T>], assignments: &mut [usize], centroid_distances: &mut [T],
    previous: &[Centroid<T>], policy: EmptyClusterPolicy,
) -> (Vec<Centroid<T>>, Vec<usize>) {
    let k = previous.len();
    // Sum all samples in a cluster together, and count the cluster sizes
    let mut sums = vec![(T::zero(), T::zero()); k];
    let mut centroid_frequency = vec![0usize; k];
    samples.iter().zip(assignments.iter().cloned())
        .for_each(|(s, a)| {
            sums[a].0 += s.x;
            sums[a].1 += s.y;
            centroid_frequency[a] += 1;
        });

    if policy == EmptyClusterPolicy::Reseed && centroid_frequency.contains(&0) {
        let mut distance_sorted_samples: Vec<usize> = (0..samples.len()).collect();
        distance_sorted_samples.sort_by(|&i1, &i2|
            centroid_distances[i1].partial_cmp(&centroid_distances[i2]).unwrap_or(std::cmp::Ordering::Equal));

        for i in 0..k {
            if centroid_frequency[i] != 0 {
                continue;
            }
            // Find the sample with the highest distance to its centroid, that is not alone in its cluster
            let found = distance_sorted_samples.iter().rev().cloned()
                .find(|&sample_id| centroid_frequency[assignments[sample_id]] > 1);
            let Some(sample_id) = found else { continue };
            let (prev_centroid_id, s) = (assignments[sample_id], &samples[sample_id]);
            tracing::debug!(cluster = i, sample = sample_id, from = prev_centroid_id, "re-seeding empty cluster");

            centroid_frequency[prev_centroid_id] -= 1;
            sums[prev_centroid_id].0 -= s.x;
            sums[prev_centroid_id].1 -= s.y;
            // Chosen sample is single point in cluster -> set cluster's sum to chosen point
            centroid_frequency[i] = 1;
            sums[i] = (s.x, s.y);
            centroid_distances[sample_id] = T::zero();
            assignments[sample_id] = i;
        }
    }

    let centroids = sums.iter().zip(centroid_frequency.iter().cloned()).zip(previous.iter())
        .map(|((&(sx, sy), cfreq), prev)| match cfreq {
            0 => *prev,
            n => Centroid::new(sx / T::from_usize(n), sy / T::from_usize(n)),
        })
        .collect();
    (centroids, centroid_frequency)
}
