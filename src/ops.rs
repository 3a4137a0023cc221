//! Free-function rendition of the core operations, for callers that keep their own state
//! (e.g. a presentation layer that owns the points and the current centroids).

use crate::{
    error::{Error, Result},
    inits, Centroid, EmptyClusterPolicy, InitMethod, KMeans, KMeansConfig, Point, Primitive, RunOutcome, StepOutcome,
};
use rand::RngCore;

/// Produce **k** initial centroids from **points** using **method** (empty for [`InitMethod::Manual`]).
/// **points** is neither modified nor reordered.
pub fn initialize_centroids<T, R>(points: &[Point<T>], k: usize, method: InitMethod, rnd: &mut R) -> Result<Vec<Centroid<T>>>
where
    T: Primitive,
    R: RngCore,
{
    inits::initialize(points, k, method, rnd)
}

/// One assignment + update round of **points** against **centroids**, which have to be **k** many.
/// Empty clusters keep their previous centroid.
pub fn step_kmeans<T: Primitive>(points: &[Point<T>], centroids: &[Centroid<T>], k: usize) -> Result<StepOutcome<T>> {
    if centroids.len() != k {
        return Err(Error::precondition(format!("expected {} centroids, got {}", k, centroids.len())));
    }
    crate::variants::Lloyd::step(points, centroids, EmptyClusterPolicy::default())
}

/// Initialize **k** centroids with **method**, then repeat rounds until convergence or the
/// configured iteration cap.
pub fn run_kmeans<T: Primitive>(points: &[Point<T>], k: usize, method: InitMethod, config: &KMeansConfig<'_, T>) -> Result<RunOutcome<T>> {
    KMeans::new(points).run(k, method, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing::{self, centroids};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn two_pairs_scenario() {
        let points = testing::two_pairs::<f64>();
        let first = step_kmeans(&points, &centroids(&[(0.0, 0.0), (10.0, 10.0)]), 2).unwrap();
        assert_eq!(first.assignments, vec![0, 0, 1, 1]);
        assert_eq!(first.centroids, centroids(&[(0.0, 0.5), (10.0, 10.5)]));

        let second = step_kmeans(&points, &first.centroids, 2).unwrap();
        assert_eq!(second.assignments, first.assignments);
        assert_eq!(second.centroids, first.centroids);
        assert!(crate::has_converged(&first.centroids, &second.centroids, crate::DEFAULT_TOLERANCE).unwrap());
    }

    #[test]
    fn centroid_count_must_match_k() {
        let points = testing::two_pairs::<f64>();
        assert!(matches!(step_kmeans(&points, &centroids(&[(0.0, 0.0)]), 2), Err(Error::PreconditionViolated(_))));
        assert!(matches!(step_kmeans::<f64>(&points, &[], 0), Err(Error::PreconditionViolated(_))));
    }

    #[test]
    fn too_many_clusters() {
        let points = vec![Point::new(0.0f64, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        let mut rnd = StdRng::seed_from_u64(1);
        assert!(matches!(initialize_centroids(&points, 5, InitMethod::Random, &mut rnd), Err(Error::InvalidArgument { name: "k", .. })));
        let conf = KMeansConfig::build().random_generator(rnd).build();
        assert!(matches!(run_kmeans(&points, 5, InitMethod::KMeansPlusPlus, &conf), Err(Error::InvalidArgument { name: "k", .. })));
    }

    #[test]
    fn run_to_convergence() {
        let mut rnd = StdRng::seed_from_u64(12);
        let points: Vec<Point<f64>> = crate::generate_dataset(crate::DEFAULT_SAMPLE_CNT, &mut rnd);
        let initial = initialize_centroids(&points, 3, InitMethod::FarthestFirst, &mut rnd).unwrap();
        testing::assert_distinct_samples(&points, &initial);

        let conf = KMeansConfig::build().random_generator(rnd).build();
        let res = run_kmeans(&points, 3, InitMethod::Random, &conf).unwrap();
        assert!(res.converged());
        assert!(res.iterations <= crate::DEFAULT_MAX_ITER);
        let again = step_kmeans(&points, &res.centroids, 3).unwrap();
        testing::assert_centroids_approx_eq(&again.centroids, &res.centroids, 1e-4);
    }
}
