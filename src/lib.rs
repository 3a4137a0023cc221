//! # kmeans2d - API documentation
//!
//! kmeans2d is a small rust library for interactive k-means-clustering of points in the plane.
//!
//! ## Design target
//! It's main target is a step-by-step, reproducible clustering of a few hundred points, as needed by
//! a visualization that shows every round. The API-surface is therefore rather plain: samples are
//! given as a vector of [`Point`]s, centroids come back as a vector of [`Centroid`]s and the
//! cluster-membership as a vector of indices into the centroids.
//! All operations are pure: they never modify or reorder the points they are given, and all randomness
//! comes from an explicitly passed random number generator.
//!
//! ## Supported centroid initializations
//! The outcome of each K-Means run depends on the initialization of its clusters. For the list of
//! implemented initialization methods, see [`InitMethod`].
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! A run to convergence, using K-Mean++ initialization:
//!
//! ```rust
//! use kmeans2d::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rnd = StdRng::seed_from_u64(1337);
//! let samples: Vec<Point<f64>> = generate_dataset(DEFAULT_SAMPLE_CNT, &mut rnd);
//!
//! let conf = KMeansConfig::build().random_generator(rnd).build();
//! let result = run_kmeans(&samples, 3, InitMethod::KMeansPlusPlus, &conf).unwrap();
//!
//! println!("Centroids: {:?}", result.centroids);
//! println!("Cluster-Assignments: {:?}", result.assignments);
//! println!("Error: {} after {} rounds", result.distsum, result.iterations);
//! ```
//!
//! ## Example (interactive session with manually placed centroids)
//! ```rust
//! use kmeans2d::*;
//!
//! let samples = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(10.0, 10.0), Point::new(10.0, 11.0)];
//! let conf = KMeansConfig::<f64>::build()
//!     .iteration_done(&|s, nr| println!("Round {} - Error: {:.2}", nr, s.distsum))
//!     .build();
//!
//! let state = RunState::new(samples, 2, InitMethod::Manual).unwrap();
//! assert_eq!(state.step(&conf).unwrap_err(), Error::NotReady { collected: 0, k: 2 });
//!
//! let state = state
//!     .with_manual_centroid(Centroid::new(0.0, 0.0)).unwrap()
//!     .with_manual_centroid(Centroid::new(10.0, 10.0)).unwrap()
//!     .step(&conf).unwrap();
//! assert_eq!(state.assignments(), &[0, 0, 1, 1]);
//! assert_eq!(state.centroids()[1], Centroid::new(10.0, 10.5));
//! ```
//!
//! ## Short API-Overview / Description
//! The core operations are available as free functions ([`generate_dataset`], [`initialize_centroids`],
//! [`step_kmeans`], [`run_kmeans`]) and as their building blocks ([`assign`], [`update`], [`has_converged`]).
//!
//! The [`KMeans`] struct holds a shared, immutable dataset and offers the same operations configured through a
//! [`KMeansConfig`] (random generator, iteration cap, convergence- and empty-cluster-strategy, status callbacks),
//! plus a streaming variant ([`KMeans::iterate`]) and parallel independent restarts ([`KMeans::run_restarts`]).
//!
//! [`RunState`] models an interactive session as immutable snapshots: every operation returns a new state.

#[macro_use] mod helpers;
mod api;
mod convergence;
mod dataset;
mod distance;
mod error;
mod inits;
mod ops;
mod point;
mod primitive;
mod state;
mod variants;

pub use api::{
    InitDoneCallbackFn, IterationDoneCallbackFn, Iterations, KMeans, KMeansConfig, KMeansConfigBuilder, RunOutcome,
    Termination, DEFAULT_MAX_ITER,
};
pub use convergence::{has_converged, ConvergenceStrategy, DEFAULT_TOLERANCE};
pub use dataset::{
    default_cluster_count, generate_dataset, generate_dataset_within, DEFAULT_CLUSTER_CNT, DEFAULT_EXTENT,
    DEFAULT_SAMPLE_CNT,
};
pub use distance::{euclidean, squared_euclidean};
pub use error::{Error, Result};
pub use inits::InitMethod;
pub use ops::{initialize_centroids, run_kmeans, step_kmeans};
pub use point::{Centroid, Planar, Point};
pub use primitive::Primitive;
pub use state::{Phase, RunState};
pub use variants::{assign, update, EmptyClusterPolicy, StepOutcome};
