use crate::{
    error::{self, Error, Result},
    Centroid, InitMethod, KMeans, KMeansConfig, Point, Primitive, Termination,
};

/// Where a [`RunState`] stands in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No centroids yet. Entered on creation and on every reset (new dataset, k or method).
    Uninitialized,
    /// Manual initialization: some, but fewer than k centroids were placed.
    CollectingCentroids,
    /// At least one round was executed.
    Iterating,
    /// The last run to convergence reached a fixed point.
    Converged,
    /// The last run to convergence stopped at the iteration cap.
    IterationCapReached,
}

/// Snapshot of an interactive clustering session: the dataset, the current centroids and assignments,
/// the chosen initialization method, k and the amount of executed rounds.
///
/// Every operation takes `&self` and returns a new snapshot, the receiver stays valid and unchanged
/// (also when an operation fails). The dataset is shared between snapshots.
///
/// ## Invariants
/// - `assignments` is either empty or has one entry per sample
/// - `centroids.len() <= k`, and `== k` once initialized
/// - `1 <= k <= sample_cnt`
#[derive(Clone, Debug)]
pub struct RunState<T: Primitive = f64> {
    kmeans: KMeans<T>,
    centroids: Vec<Centroid<T>>,
    assignments: Vec<usize>,
    method: InitMethod,
    k: usize,
    iterations: usize,
    phase: Phase,
}
impl<T: Primitive> RunState<T> {
    /// Start a session on **samples**.
    ///
    /// Fails with [`Error::InvalidArgument`], if `k == 0` or `k > samples.len()`.
    pub fn new(samples: Vec<Point<T>>, k: usize, method: InitMethod) -> Result<Self> {
        error::check_cluster_count(k, samples.len())?;
        Ok(Self {
            kmeans: KMeans::new(samples),
            centroids: Vec::new(),
            assignments: Vec::new(),
            method,
            k,
            iterations: 0,
            phase: Phase::Uninitialized,
        })
    }

    pub fn samples(&self) -> &[Point<T>] { self.kmeans.samples() }
    pub fn centroids(&self) -> &[Centroid<T>] { &self.centroids }
    pub fn assignments(&self) -> &[usize] { &self.assignments }
    pub fn method(&self) -> InitMethod { self.method }
    pub fn k(&self) -> usize { self.k }
    pub fn iterations(&self) -> usize { self.iterations }
    pub fn phase(&self) -> Phase { self.phase }

    /// Replace the dataset (e.g. with a freshly generated one). Resets the clustering.
    ///
    /// Fails with [`Error::InvalidArgument`], if the current k exceeds the new sample count.
    pub fn with_dataset(&self, samples: Vec<Point<T>>) -> Result<Self> {
        Self::new(samples, self.k, self.method)
    }

    /// Change the amount of clusters. Resets the clustering.
    pub fn with_k(&self, k: usize) -> Result<Self> {
        error::check_cluster_count(k, self.kmeans.sample_cnt())?;
        Ok(Self { k, ..self.reset() })
    }

    /// Change the initialization method. Resets the clustering.
    pub fn with_method(&self, method: InitMethod) -> Self {
        Self { method, ..self.reset() }
    }

    /// Drop centroids and assignments, and zero the round counter.
    pub fn reset(&self) -> Self {
        Self {
            kmeans: self.kmeans.clone(),
            centroids: Vec::new(),
            assignments: Vec::new(),
            method: self.method,
            k: self.k,
            iterations: 0,
            phase: Phase::Uninitialized,
        }
    }

    /// Place one more centroid (manual initialization, e.g. from a click into the plot).
    ///
    /// Fails with [`Error::PreconditionViolated`], if the method is not [`InitMethod::Manual`], or if
    /// k centroids were placed already.
    pub fn with_manual_centroid(&self, centroid: Centroid<T>) -> Result<Self> {
        if self.method != InitMethod::Manual {
            return Err(Error::precondition(format!("centroids can only be placed manually with the Manual method, not {}", self.method)));
        }
        if self.centroids.len() >= self.k {
            return Err(Error::precondition(format!("all {} centroids are placed already", self.k)));
        }
        let mut centroids = self.centroids.clone();
        centroids.push(centroid);
        Ok(Self { centroids, phase: Phase::CollectingCentroids, ..self.clone() })
    }

    /// Centroids to start the next round from, initializing them first if necessary.
    fn ready_centroids(&self, config: &KMeansConfig<'_, T>) -> Result<Vec<Centroid<T>>> {
        match self.method {
            InitMethod::Manual if self.centroids.len() < self.k => {
                Err(Error::NotReady { collected: self.centroids.len(), k: self.k })
            }
            method if self.centroids.is_empty() => self.kmeans.initialize(self.k, method, config),
            _ => Ok(self.centroids.clone()),
        }
    }

    /// Execute a single round (initializing the centroids first, if there are none yet).
    ///
    /// Fails with [`Error::NotReady`] in manual mode, while fewer than k centroids are placed.
    pub fn step(&self, config: &KMeansConfig<'_, T>) -> Result<Self> {
        let centroids = self.ready_centroids(config)?;
        let outcome = self.kmeans.step(&centroids, config)?;
        (config.iteration_done)(&outcome, self.iterations + 1);
        tracing::debug!(round = self.iterations + 1, distsum = %outcome.distsum, "single k-means step");
        Ok(Self {
            kmeans: self.kmeans.clone(),
            centroids: outcome.centroids,
            assignments: outcome.assignments,
            method: self.method,
            k: self.k,
            iterations: self.iterations + 1,
            phase: Phase::Iterating,
        })
    }

    /// Execute rounds until convergence or the iteration cap (initializing the centroids first, if there are none yet).
    /// The round counter advances by the amount of executed rounds; reaching the cap is reported via
    /// [`Phase::IterationCapReached`], together with the last round's result.
    ///
    /// Fails with [`Error::NotReady`] in manual mode, while fewer than k centroids are placed.
    pub fn run(&self, config: &KMeansConfig<'_, T>) -> Result<Self> {
        let centroids = self.ready_centroids(config)?;
        let outcome = self.kmeans.run_from(centroids, config)?;
        let phase = match outcome.termination {
            Termination::Converged => Phase::Converged,
            Termination::DidNotConverge => Phase::IterationCapReached,
        };
        Ok(Self {
            kmeans: self.kmeans.clone(),
            centroids: outcome.centroids,
            assignments: outcome.assignments,
            method: self.method,
            k: self.k,
            iterations: self.iterations + outcome.iterations,
            phase,
        })
    }
}
