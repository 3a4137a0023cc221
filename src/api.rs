use crate::{
    convergence::{ConvergenceLogic, ConvergenceStrategy},
    error::{self, Error, Result},
    inits::{self, InitMethod},
    variants::{EmptyClusterPolicy, Lloyd, StepOutcome},
    Centroid, Point, Primitive,
};
use rand::{prelude::*, rngs::StdRng};
use rayon::prelude::*;
use std::{cell::RefCell, ops::DerefMut, sync::Arc};

/// Upper bound for the amount of rounds of a run, unless configured otherwise.
pub const DEFAULT_MAX_ITER: usize = 1000;

pub type InitDoneCallbackFn<'a, T> = &'a dyn Fn(&[Centroid<T>]);
pub type IterationDoneCallbackFn<'a, T> = &'a dyn Fn(&StepOutcome<T>, usize);

/// This is a structure holding various configuration options for k-means calculations, such as
/// the random number generator to use, or a couple of callbacks, that can be set to get status information from
/// a running k-means calculation.
///
/// For a more detailed information about all possible options, have a look at [`KMeansConfigBuilder`].
pub struct KMeansConfig<'a, T: Primitive> {
    /// Callback that is called, when the initialization phase finished
    /// ## Arguments
    /// - **centroids**: The freshly initialized centroids
    pub(crate) init_done: InitDoneCallbackFn<'a, T>,
    /// Callback that is called after each round
    /// ## Arguments
    /// - **outcome**: [`StepOutcome`] of the round
    /// - **round**: Number of the round within the current run (starting at 1)
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T>,
    /// Random number generator to use
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
    /// Maximum amount of rounds per run
    pub(crate) max_iter: usize,
    /// The convergence-strategy to use for the running calculation
    pub(crate) convergence: ConvergenceStrategy<T>,
    /// What to do with clusters that lose all of their samples
    pub(crate) empty_cluster_policy: EmptyClusterPolicy,
}
impl<'a, T: Primitive> Default for KMeansConfig<'a, T> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            iteration_done: &|_, _| {},
            rnd: Box::new(RefCell::new(rand::thread_rng())),
            max_iter: DEFAULT_MAX_ITER,
            convergence: ConvergenceStrategy::default(),
            empty_cluster_policy: EmptyClusterPolicy::default(),
        }
    }
}
impl<'a, T: Primitive> KMeansConfig<'a, T> {
    /// Use the [`KMeansConfigBuilder`] to build a [`KMeansConfig`] instance.
    pub fn build() -> KMeansConfigBuilder<'a, T> {
        KMeansConfigBuilder { config: KMeansConfig::default() }
    }

    pub fn max_iter(&self) -> usize { self.max_iter }
    pub fn convergence(&self) -> ConvergenceStrategy<T> { self.convergence }
    pub fn empty_cluster_policy(&self) -> EmptyClusterPolicy { self.empty_cluster_policy }

    pub(crate) fn settings(&self) -> RunSettings<T> {
        RunSettings {
            max_iter: self.max_iter,
            convergence: self.convergence,
            empty_cluster_policy: self.empty_cluster_policy,
        }
    }
}

/// The plain (thread-safe) options of a [`KMeansConfig`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct RunSettings<T: Primitive> {
    max_iter: usize,
    convergence: ConvergenceStrategy<T>,
    empty_cluster_policy: EmptyClusterPolicy,
}
impl<T: Primitive> RunSettings<T> {
    /// Config with these options, no callbacks and an own generator seeded with **seed**.
    pub(crate) fn isolated(&self, seed: u64) -> KMeansConfig<'static, T> {
        KMeansConfig::build()
            .random_generator(StdRng::seed_from_u64(seed))
            .max_iter(self.max_iter)
            .convergence(self.convergence)
            .empty_cluster_policy(self.empty_cluster_policy)
            .build()
    }
}
impl<'a, T: Primitive> std::fmt::Debug for KMeansConfig<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KMeansConfig")
            .field("max_iter", &self.max_iter)
            .field("convergence", &self.convergence)
            .field("empty_cluster_policy", &self.empty_cluster_policy)
            .finish_non_exhaustive()
    }
}

pub struct KMeansConfigBuilder<'a, T: Primitive> {
    config: KMeansConfig<'a, T>
}
impl<'a, T: Primitive> KMeansConfigBuilder<'a, T> {
    /// Set the callback that should be called after the centroid initialization, before the iteration starts.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T>) -> Self {
        self.config.init_done = init_done; self
    }
    /// Set the callback that should be called after each round during a running k-means calculation.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T>) -> Self {
        self.config.iteration_done = iteration_done; self
    }
    /// Set the random number generator that should be used in the k-means calculation.
    /// Use a seeded generator for deterministically repeatable results.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd)); self
    }
    /// Set the maximum amount of rounds a run may take, before it is reported as [`Termination::DidNotConverge`].
    /// ## Default
    /// [`DEFAULT_MAX_ITER`] (1000)
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.config.max_iter = max_iter; self
    }
    /// Set the convergence-strategy to use during a running k-means calculation. For more information,
    /// see documentation of [`ConvergenceStrategy`].
    /// ## Default
    /// [`ConvergenceStrategy::CentroidShift`] `{ tolerance: 1e-4 }`
    pub fn convergence(mut self, convergence: ConvergenceStrategy<T>) -> Self {
        self.config.convergence = convergence; self
    }
    /// Set the policy for clusters that end up without samples.
    /// ## Default
    /// [`EmptyClusterPolicy::KeepPrevious`]
    pub fn empty_cluster_policy(mut self, policy: EmptyClusterPolicy) -> Self {
        self.config.empty_cluster_policy = policy; self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> KMeansConfig<'a, T> { self.config }
}


/// How a run to convergence ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The convergence strategy reported a fixed point.
    Converged,
    /// The iteration cap was reached first. The result is the last round's, which is still usable.
    DidNotConverge,
}

/// Final state (result) of a run to convergence.
///
/// ## Fields
/// - **centroids**: Cluster centers after the last round
/// - **assignments**: Vector mapping each sample to its cluster (as assigned in the last round)
/// - **centroid_frequency**: Amount of samples in each cluster
/// - **distsum**: The total sum of squared distances from all samples to their assigned centroid in the last round
/// - **iterations**: Amount of rounds that were executed
/// - **termination**: Whether the run converged, or stopped at the iteration cap
#[derive(Clone, Debug, PartialEq)]
pub struct RunOutcome<T: Primitive> {
    pub centroids: Vec<Centroid<T>>,
    pub assignments: Vec<usize>,
    pub centroid_frequency: Vec<usize>,
    pub distsum: T,
    pub iterations: usize,
    pub termination: Termination,
}
impl<T: Primitive> RunOutcome<T> {
    pub fn converged(&self) -> bool { self.termination == Termination::Converged }
}


/// Entrypoint of this crate's API-Surface.
///
/// Create an instance of this struct, giving the samples you want to operate on. The samples are
/// kept immutable for the lifetime of the instance (cloning it only clones a reference), so every
/// calculation sees the same points in the same order.
///
/// ## Supported initialization methods
/// - Random-Sample, Farthest-First, K-Means++ (see [`InitMethod`])
/// - Manual: centroids supplied by the caller, passed to [`KMeans::step`] / [`KMeans::run_from`]
#[derive(Clone, Debug)]
pub struct KMeans<T: Primitive> {
    samples: Arc<[Point<T>]>,
}
impl<T: Primitive> KMeans<T> {
    /// Create a new instance of the [`KMeans`] structure.
    ///
    /// ## Arguments
    /// - **samples**: The points to cluster (e.g. a `Vec<Point<T>>` or `&[Point<T>]`)
    pub fn new(samples: impl Into<Arc<[Point<T>]>>) -> Self {
        Self { samples: samples.into() }
    }

    pub fn samples(&self) -> &[Point<T>] { &self.samples }
    pub fn sample_cnt(&self) -> usize { self.samples.len() }

    /// Initialize centroids for **k** clusters, using **method** and the config's random generator.
    /// Notifies the config's `init_done` callback.
    ///
    /// Fails with [`Error::InvalidArgument`], if `k == 0` or `k > sample_cnt`.
    pub fn initialize(&self, k: usize, method: InitMethod, config: &KMeansConfig<'_, T>) -> Result<Vec<Centroid<T>>> {
        let centroids = inits::initialize(&self.samples, k, method, config.rnd.borrow_mut().deref_mut())?;
        (config.init_done)(&centroids);
        Ok(centroids)
    }

    /// A single assignment + update round, starting from **centroids**.
    ///
    /// Fails with [`Error::PreconditionViolated`], if **centroids** is empty.
    pub fn step(&self, centroids: &[Centroid<T>], config: &KMeansConfig<'_, T>) -> Result<StepOutcome<T>> {
        Lloyd::step(&self.samples, centroids, config.empty_cluster_policy)
    }

    /// Streaming variant of [`KMeans::run_from`]: yields the outcome of every round, and ends after the round
    /// that converged or at the iteration cap. Dropping the iterator early cancels the run.
    ///
    /// Fails with [`Error::PreconditionViolated`], if **centroids** is empty, and with [`Error::InvalidArgument`]
    /// if the configured `max_iter` is 0.
    pub fn iterate(&self, centroids: Vec<Centroid<T>>, config: &KMeansConfig<'_, T>) -> Result<Iterations<'_, T>> {
        if centroids.is_empty() {
            return Err(Error::precondition("cannot iterate without any centroids"));
        }
        if config.max_iter == 0 {
            return Err(Error::invalid_argument("max_iter", "at least one round is required"));
        }
        Ok(Iterations {
            kmeans: self,
            centroids,
            logic: config.convergence.create_logic(),
            empty_cluster_policy: config.empty_cluster_policy,
            max_iter: config.max_iter,
            round: 0,
            termination: None,
            failed: false,
        })
    }

    /// Repeat assignment + update rounds, starting from **centroids**, until the convergence strategy reports
    /// a fixed point or `max_iter` rounds were executed.
    ///
    /// ## Returns
    /// Instance of [`RunOutcome`]. Reaching the iteration cap is not an error: the outcome then carries
    /// [`Termination::DidNotConverge`] together with the last round's result.
    pub fn run_from(&self, centroids: Vec<Centroid<T>>, config: &KMeansConfig<'_, T>) -> Result<RunOutcome<T>> {
        let mut iterations = self.iterate(centroids, config)?;
        let mut last = None;
        while let Some(outcome) = iterations.next() {
            let outcome = outcome?;
            // Notify subscriber about finished round
            (config.iteration_done)(&outcome, iterations.rounds());
            tracing::trace!(round = iterations.rounds(), distsum = %outcome.distsum, "k-means round done");
            last = Some(outcome);
        }
        let last = last.ok_or_else(|| Error::precondition("run ended without any round"))?;
        let termination = iterations.termination().unwrap_or(Termination::DidNotConverge);
        match termination {
            Termination::Converged => tracing::info!(
                iterations = iterations.rounds(), distsum = %last.distsum, "k-means converged"),
            Termination::DidNotConverge => tracing::warn!(
                iterations = iterations.rounds(), distsum = %last.distsum, "k-means did not converge within the iteration cap"),
        }
        Ok(RunOutcome {
            centroids: last.centroids,
            assignments: last.assignments,
            centroid_frequency: last.centroid_frequency,
            distsum: last.distsum,
            iterations: iterations.rounds(),
            termination,
        })
    }

    /// Initialize **k** centroids with **method**, then run to convergence (see [`KMeans::run_from`]).
    ///
    /// ## Arguments
    /// - **k**: Amount of clusters to search for
    /// - **method**: Initialization-Method to use for the initialization of the **k** centroids
    /// - **config**: [`KMeansConfig`] instance, containing several configuration options for the calculation.
    ///
    /// Fails with [`Error::NotReady`] for [`InitMethod::Manual`], whose centroids have to be passed to
    /// [`KMeans::run_from`] instead.
    ///
    /// ## Example
    /// ```rust
    /// use kmeans2d::*;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rnd = StdRng::seed_from_u64(42);
    /// let samples: Vec<Point<f64>> = generate_dataset(200, &mut rnd);
    ///
    /// let kmean = KMeans::new(samples);
    /// let conf = KMeansConfig::build().random_generator(rnd).build();
    /// let result = kmean.run(3, InitMethod::KMeansPlusPlus, &conf).unwrap();
    ///
    /// println!("Centroids: {:?}", result.centroids);
    /// println!("Cluster-Assignments: {:?}", result.assignments);
    /// println!("Converged after {} rounds: {}", result.iterations, result.converged());
    /// ```
    pub fn run(&self, k: usize, method: InitMethod, config: &KMeansConfig<'_, T>) -> Result<RunOutcome<T>> {
        error::check_cluster_count(k, self.sample_cnt())?;
        if method == InitMethod::Manual {
            return Err(Error::NotReady { collected: 0, k });
        }
        let centroids = self.initialize(k, method, config)?;
        self.run_from(centroids, config)
    }

    /// Do **restarts** independent runs (see [`KMeans::run`]) in parallel, and return the one with the lowest
    /// distance sum.
    ///
    /// Each run gets its own generator, seeded from the config's generator, and owns its centroids and
    /// assignments; the result is therefore reproducible with a seeded config. Callbacks are not invoked.
    pub fn run_restarts(&self, k: usize, method: InitMethod, restarts: usize, config: &KMeansConfig<'_, T>) -> Result<RunOutcome<T>> {
        error::check_cluster_count(k, self.sample_cnt())?;
        if method == InitMethod::Manual {
            return Err(Error::NotReady { collected: 0, k });
        }
        if restarts == 0 {
            return Err(Error::invalid_argument("restarts", "at least one run is required"));
        }
        let seeds: Vec<u64> = {
            let mut rnd = config.rnd.borrow_mut();
            (0..restarts).map(|_| rnd.next_u64()).collect()
        };
        let settings = config.settings();

        let outcomes: Vec<RunOutcome<T>> = seeds.par_iter().enumerate()
            .map(|(restart, &seed)| {
                let outcome = self.run(k, method, &settings.isolated(seed))?;
                tracing::debug!(restart, distsum = %outcome.distsum, iterations = outcome.iterations,
                    converged = outcome.converged(), "restart finished");
                Ok(outcome)
            })
            .collect::<Result<_>>()?;

        outcomes.into_iter()
            .reduce(|best, o| if o.distsum < best.distsum { o } else { best })
            .ok_or_else(|| Error::invalid_argument("restarts", "at least one run is required"))
    }
}


/// Iterator over the rounds of a run, see [`KMeans::iterate`].
pub struct Iterations<'k, T: Primitive> {
    kmeans: &'k KMeans<T>,
    centroids: Vec<Centroid<T>>,
    logic: Box<dyn ConvergenceLogic<T>>,
    empty_cluster_policy: EmptyClusterPolicy,
    max_iter: usize,
    round: usize,
    termination: Option<Termination>,
    failed: bool,
}
impl<'k, T: Primitive> Iterations<'k, T> {
    /// Amount of rounds executed so far.
    pub fn rounds(&self) -> usize { self.round }
    /// Centroids after the latest round (the starting centroids, before the first one).
    pub fn centroids(&self) -> &[Centroid<T>] { &self.centroids }
    /// How the run ended, once it did.
    pub fn termination(&self) -> Option<Termination> { self.termination }
}
impl<'k, T: Primitive> Iterator for Iterations<'k, T> {
    type Item = Result<StepOutcome<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.termination.is_some() || self.failed {
            return None;
        }
        if self.round >= self.max_iter {
            self.termination = Some(Termination::DidNotConverge);
            return None;
        }
        let round = Lloyd::step(self.kmeans.samples(), &self.centroids, self.empty_cluster_policy)
            .and_then(|outcome| {
                let converged = self.logic.next(&self.centroids, &outcome.centroids, outcome.distsum)?;
                Ok((outcome, converged))
            });
        let (outcome, converged) = match round {
            Ok(r) => r,
            Err(e) => {
                self.failed = true;
                return Some(Err(e));
            }
        };
        self.round += 1;
        self.centroids.clone_from(&outcome.centroids);
        if converged {
            self.termination = Some(Termination::Converged);
        } else if self.round >= self.max_iter {
            self.termination = Some(Termination::DidNotConverge);
        }
        Some(Ok(outcome))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing::{self, centroids};
    use std::cell::Cell;

    fn seeded_config<'a>(seed: u64) -> KMeansConfig<'a, f64> {
        KMeansConfig::build().random_generator(StdRng::seed_from_u64(seed)).build()
    }

    #[test]
    fn two_pairs_run_from_seeded_centroids() {
        let kmean = KMeans::new(testing::two_pairs::<f64>());
        let res = kmean.run_from(centroids(&[(0.0, 0.0), (10.0, 10.0)]), &seeded_config(1)).unwrap();
        assert_eq!(res.termination, Termination::Converged);
        assert_eq!(res.iterations, 2);
        assert_eq!(res.assignments, vec![0, 0, 1, 1]);
        assert_eq!(res.centroids, centroids(&[(0.0, 0.5), (10.0, 10.5)]));
        assert_eq!(res.centroid_frequency, vec![2, 2]);
        assert_eq!(res.distsum, 1.0);
    }

    #[test]
    fn run_reaches_fixed_point() {
        let mut rnd = StdRng::seed_from_u64(1337);
        let samples: Vec<Point<f64>> = crate::generate_dataset(300, &mut rnd);
        let kmean = KMeans::new(samples);
        for method in [InitMethod::Random, InitMethod::FarthestFirst, InitMethod::KMeansPlusPlus] {
            let res = kmean.run(5, method, &seeded_config(7)).unwrap();
            assert!(res.converged(), "{} did not converge", method);
            assert!(res.iterations <= DEFAULT_MAX_ITER);
            testing::assert_nearest_assignments(kmean.samples(), &res.centroids, &res.assignments);

            let again = kmean.step(&res.centroids, &seeded_config(0)).unwrap();
            testing::assert_centroids_approx_eq(&again.centroids, &res.centroids, 1e-4);
        }
    }

    #[test]
    fn iteration_cap() {
        let mut rnd = StdRng::seed_from_u64(3);
        let samples: Vec<Point<f64>> = crate::generate_dataset(200, &mut rnd);
        let kmean = KMeans::new(samples);
        let conf = KMeansConfig::build()
            .random_generator(rnd)
            .max_iter(1)
            .convergence(ConvergenceStrategy::CentroidShift { tolerance: 0.0 })
            .build();
        let initial = kmean.initialize(6, InitMethod::Random, &conf).unwrap();
        let res = kmean.run_from(initial, &conf).unwrap();
        assert_eq!(res.termination, Termination::DidNotConverge);
        assert_eq!(res.iterations, 1);
        assert_eq!(res.centroids.len(), 6);
        assert_eq!(res.assignments.len(), 200);
    }

    #[test]
    fn manual_method_is_not_ready() {
        let kmean = KMeans::new(testing::two_pairs::<f64>());
        assert_eq!(kmean.run(2, InitMethod::Manual, &seeded_config(1)), Err(Error::NotReady { collected: 0, k: 2 }));
        assert!(matches!(kmean.run(5, InitMethod::Manual, &seeded_config(1)), Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn invalid_k() {
        let kmean = KMeans::new(vec![Point::new(0.0f64, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)]);
        assert!(matches!(kmean.run(5, InitMethod::Random, &seeded_config(1)), Err(Error::InvalidArgument { name: "k", .. })));
        assert!(matches!(kmean.initialize(0, InitMethod::FarthestFirst, &seeded_config(1)), Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn empty_centroids_and_zero_cap() {
        let kmean = KMeans::new(testing::two_pairs::<f64>());
        assert!(matches!(kmean.run_from(Vec::new(), &seeded_config(1)), Err(Error::PreconditionViolated(_))));
        assert!(matches!(kmean.step(&[], &seeded_config(1)), Err(Error::PreconditionViolated(_))));
        let conf = KMeansConfig::build().max_iter(0).build();
        assert!(matches!(kmean.run_from(centroids(&[(0.0, 0.0)]), &conf), Err(Error::InvalidArgument { name: "max_iter", .. })));
    }

    #[test]
    fn iterate_streams_every_round() {
        let kmean = KMeans::new(testing::two_pairs::<f64>());
        let conf = seeded_config(1);
        let mut it = kmean.iterate(centroids(&[(0.0, 0.0), (0.0, 1.0)]), &conf).unwrap();
        let rounds: Vec<_> = it.by_ref().map(|r| r.unwrap()).collect();
        assert_eq!(rounds.len(), it.rounds());
        assert_eq!(it.termination(), Some(Termination::Converged));
        assert_eq!(it.centroids(), rounds.last().unwrap().centroids.as_slice());
        assert!(it.next().is_none());
    }

    #[test]
    fn iterate_can_be_cancelled() {
        let mut rnd = StdRng::seed_from_u64(5);
        let kmean = KMeans::new(crate::generate_dataset::<f64, _>(100, &mut rnd));
        let conf = seeded_config(5);
        let initial = kmean.initialize(4, InitMethod::Random, &conf).unwrap();
        let mut it = kmean.iterate(initial, &conf).unwrap();
        let first = it.next().unwrap().unwrap();
        assert_eq!(first.centroids.len(), 4);
        assert_eq!(it.rounds(), 1);
        drop(it);
    }

    #[test]
    fn callbacks_are_notified() {
        let init_calls = Cell::new(0usize);
        let rounds = Cell::new(0usize);
        let init_done = |c: &[Centroid<f64>]| { assert_eq!(c.len(), 3); init_calls.set(init_calls.get() + 1); };
        let iteration_done = |_: &StepOutcome<f64>, nr: usize| { assert_eq!(nr, rounds.get() + 1); rounds.set(nr); };
        let conf = KMeansConfig::build()
            .random_generator(StdRng::seed_from_u64(9))
            .init_done(&init_done)
            .iteration_done(&iteration_done)
            .build();

        let mut rnd = StdRng::seed_from_u64(9);
        let kmean = KMeans::new(crate::generate_dataset::<f64, _>(60, &mut rnd));
        let res = kmean.run(3, InitMethod::FarthestFirst, &conf).unwrap();
        assert_eq!(init_calls.get(), 1);
        assert_eq!(rounds.get(), res.iterations);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut rnd = StdRng::seed_from_u64(21);
        let kmean = KMeans::new(crate::generate_dataset::<f64, _>(150, &mut rnd));
        let a = kmean.run(4, InitMethod::KMeansPlusPlus, &seeded_config(8)).unwrap();
        let b = kmean.run(4, InitMethod::KMeansPlusPlus, &seeded_config(8)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn restarts_pick_lowest_distsum() {
        let mut rnd = StdRng::seed_from_u64(77);
        let kmean = KMeans::new(crate::generate_dataset::<f64, _>(150, &mut rnd));
        let best = kmean.run_restarts(6, InitMethod::Random, 8, &seeded_config(3)).unwrap();
        assert_eq!(best, kmean.run_restarts(6, InitMethod::Random, 8, &seeded_config(3)).unwrap());

        // Replay the individual restarts sequentially
        let conf = seeded_config(3);
        let seeds: Vec<u64> = (0..8).map(|_| conf.rnd.borrow_mut().next_u64()).collect();
        for seed in seeds {
            let single = kmean.run(6, InitMethod::Random, &conf.settings().isolated(seed)).unwrap();
            assert!(best.distsum <= single.distsum);
        }
    }

    #[test]
    fn restarts_validation() {
        let kmean = KMeans::new(testing::two_pairs::<f64>());
        assert!(matches!(kmean.run_restarts(2, InitMethod::Random, 0, &seeded_config(1)), Err(Error::InvalidArgument { name: "restarts", .. })));
        assert_eq!(kmean.run_restarts(2, InitMethod::Manual, 3, &seeded_config(1)), Err(Error::NotReady { collected: 0, k: 2 }));
    }

    #[test]
    fn shared_samples() {
        let samples = testing::two_pairs::<f32>();
        let kmean = KMeans::new(samples.as_slice());
        let copy = kmean.clone();
        assert_eq!(copy.samples(), samples.as_slice());
        assert_eq!(kmean.sample_cnt(), 4);
    }
}
