use crate::{error::{self, Error, Result}, Centroid, Point, Primitive};
use rand::RngCore;
use std::{fmt, str::FromStr};

pub(crate) mod farthestfirst;
pub(crate) mod kmeanplusplus;
pub(crate) mod randomsample;

/// Centroid initialization methods.
///
/// The [`Display`](fmt::Display) / [`FromStr`] representation uses the names
/// shown to users: `"Random"`, `"Farthest First"`, `"KMeans++"` and `"Manual"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InitMethod {
    /// k distinct samples, drawn uniformly without replacement (a.k.a. Forgy).
    #[default]
    Random,
    /// Random first sample, then repeatedly the sample farthest from all chosen centroids.
    FarthestFirst,
    /// Random first sample, then samples drawn proportional to their squared distance
    /// to the nearest chosen centroid.
    KMeansPlusPlus,
    /// Centroids are placed one at a time by the caller, see [`crate::RunState::with_manual_centroid`].
    Manual,
}
impl InitMethod {
    pub const ALL: [InitMethod; 4] = [InitMethod::Random, InitMethod::FarthestFirst, InitMethod::KMeansPlusPlus, InitMethod::Manual];

    pub fn name(&self) -> &'static str {
        match self {
            InitMethod::Random => "Random",
            InitMethod::FarthestFirst => "Farthest First",
            InitMethod::KMeansPlusPlus => "KMeans++",
            InitMethod::Manual => "Manual",
        }
    }
}
impl fmt::Display for InitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}
impl FromStr for InitMethod {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        InitMethod::ALL.iter().cloned()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::invalid_argument("method", format!("unknown initialization method '{}'", s)))
    }
}

/// Produce the initial centroids for **k** clusters, using the given **method**.
///
/// Every returned centroid is a copy of one of the **samples**; **samples** itself is never reordered.
/// [`InitMethod::Manual`] yields an empty set, the caller supplies those centroids.
///
/// Fails with [`Error::InvalidArgument`], if `k == 0` or `k > samples.len()`.
pub fn initialize<T: Primitive>(samples: &[Point<T>], k: usize, method: InitMethod, rnd: &mut dyn RngCore) -> Result<Vec<Centroid<T>>> {
    error::check_cluster_count(k, samples.len())?;
    let centroids = match method {
        InitMethod::Random => randomsample::calculate(samples, k, rnd),
        InitMethod::FarthestFirst => farthestfirst::calculate(samples, k, rnd),
        InitMethod::KMeansPlusPlus => kmeanplusplus::calculate(samples, k, rnd),
        InitMethod::Manual => Vec::new(),
    };
    tracing::debug!(%method, k, sample_cnt = samples.len(), initialized = centroids.len(), "centroid initialization done");
    Ok(centroids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn method_names_roundtrip() {
        for m in InitMethod::ALL.iter() {
            assert_eq!(m.to_string().parse::<InitMethod>().unwrap(), *m);
        }
        assert_eq!("kmeans++".parse::<InitMethod>().unwrap(), InitMethod::KMeansPlusPlus);
        assert_eq!(" Farthest First ".parse::<InitMethod>().unwrap(), InitMethod::FarthestFirst);
        assert!(matches!("Forgy".parse::<InitMethod>(), Err(Error::InvalidArgument { name: "method", .. })));
    }

    #[test]
    fn returns_k_centroids_copied_from_samples() {
        let mut rnd = StdRng::seed_from_u64(1337);
        let samples: Vec<Point<f64>> = crate::generate_dataset(120, &mut rnd);
        for method in [InitMethod::Random, InitMethod::FarthestFirst, InitMethod::KMeansPlusPlus] {
            for k in [1, 2, 5, 17, 120] {
                let centroids = initialize(&samples, k, method, &mut rnd).unwrap();
                assert_eq!(centroids.len(), k, "{} k={}", method, k);
                testing::assert_distinct_samples(&samples, &centroids);
            }
        }
    }

    #[test]
    fn manual_returns_nothing() {
        let mut rnd = StdRng::seed_from_u64(1);
        let samples = testing::two_pairs::<f64>();
        assert!(initialize(&samples, 2, InitMethod::Manual, &mut rnd).unwrap().is_empty());
    }

    #[test]
    fn too_many_clusters() {
        let mut rnd = StdRng::seed_from_u64(1);
        let samples = vec![Point::new(0.0f64, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        for method in InitMethod::ALL.iter().cloned() {
            assert!(matches!(initialize(&samples, 5, method, &mut rnd), Err(Error::InvalidArgument { name: "k", .. })));
            assert!(matches!(initialize(&samples, 0, method, &mut rnd), Err(Error::InvalidArgument { name: "k", .. })));
        }
    }

    #[test]
    fn samples_are_not_reordered() {
        let mut rnd = StdRng::seed_from_u64(99);
        let samples: Vec<Point<f32>> = crate::generate_dataset(40, &mut rnd);
        let before = samples.clone();
        for method in InitMethod::ALL.iter().cloned() {
            initialize(&samples, 7, method, &mut rnd).unwrap();
        }
        assert_eq!(samples, before);
    }

    #[test]
    fn seeded_initialization_is_reproducible() {
        let samples: Vec<Point<f64>> = crate::generate_dataset(60, &mut StdRng::seed_from_u64(5));
        for method in [InitMethod::Random, InitMethod::FarthestFirst, InitMethod::KMeansPlusPlus] {
            let a = initialize(&samples, 4, method, &mut StdRng::seed_from_u64(11)).unwrap();
            let b = initialize(&samples, 4, method, &mut StdRng::seed_from_u64(11)).unwrap();
            assert_eq!(a, b);
        }
    }
}
