use thiserror::Error;

/// Errors returned by the clustering operations of this crate.
///
/// None of these is fatal: they are reported before any computation happens,
/// and the inputs (or the [`crate::RunState`] snapshot) stay untouched.
/// Hitting the iteration cap is not an error, see [`crate::Termination`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument is out of its valid domain (e.g. `k == 0` or `k > N`).
    #[error("invalid argument {name}: {message}")]
    InvalidArgument {
        /// Argument name.
        name: &'static str,
        /// Human-readable explanation.
        message: String,
    },

    /// The inputs are individually valid, but do not fit together
    /// (e.g. assigning against zero centroids).
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),

    /// Manual initialization has not collected enough centroids yet.
    #[error("not ready: {collected} of {k} manual centroids supplied")]
    NotReady {
        /// Centroids supplied so far.
        collected: usize,
        /// Centroids required.
        k: usize,
    },
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidArgument { name, message: message.into() }
    }

    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        Error::PreconditionViolated(message.into())
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Validate a requested cluster count against the dataset size (`1 <= k <= sample_cnt`).
pub(crate) fn check_cluster_count(k: usize, sample_cnt: usize) -> Result<()> {
    if k == 0 {
        return Err(Error::invalid_argument("k", "at least one cluster is required"));
    }
    if k > sample_cnt {
        return Err(Error::invalid_argument(
            "k",
            format!("requested {} clusters, but dataset has {} points", k, sample_cnt),
        ));
    }
    Ok(())
}
