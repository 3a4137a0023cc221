use crate::{error::{Error, Result}, Centroid, Primitive};

/// Per-axis tolerance used by the default convergence check.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Check whether two successive centroid sets are equal within **tolerance**.
///
/// This is an L∞-per-axis criterion: every pair of corresponding centroids has to differ by no more
/// than **tolerance** in x, and by no more than **tolerance** in y.
///
/// Fails with [`Error::PreconditionViolated`], if both sets do not have the same length.
pub fn has_converged<T: Primitive>(old: &[Centroid<T>], new: &[Centroid<T>], tolerance: T) -> Result<bool> {
	if old.len() != new.len() {
		return Err(Error::precondition(format!(
			"cannot compare centroid sets of different lengths ({} vs {})", old.len(), new.len())));
	}
	Ok(old.iter().zip(new.iter())
		.all(|(o, n)| (o.x - n.x).abs() <= tolerance && (o.y - n.y).abs() <= tolerance))
}

/// Enum with possible convergence strategies.
/// These strategies specify when a running k-means calculation is considered finished.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConvergenceStrategy<T: Primitive> {
	/// Finished, once no centroid moved by more than **tolerance** along either axis during a round
	/// (see [`has_converged`]).
	CentroidShift { tolerance: T },
	/// Finished, directly after a round produced no improvement of the distance sum where
	/// `improvement > threshold` for the first time.
	NoImprovement { threshold: T },
}
impl<T: Primitive> Default for ConvergenceStrategy<T> {
	fn default() -> Self {
		ConvergenceStrategy::CentroidShift { tolerance: T::from_f64(DEFAULT_TOLERANCE) }
	}
}
impl<T: Primitive> ConvergenceStrategy<T> {
	pub(crate) fn create_logic(&self) -> Box<dyn ConvergenceLogic<T>> {
		match *self {
			ConvergenceStrategy::CentroidShift { tolerance } => Box::new(CentroidShiftLogic { tolerance }),
			ConvergenceStrategy::NoImprovement { threshold } => Box::new(NoImprovementLogic {
				threshold,
				prev_error: T::infinity()
			})
		}
	}
}

pub(crate) trait ConvergenceLogic<T: Primitive> {
	/// Function that has to be called once a round of the calculation ended.
	/// ## Arguments
	/// - **previous**: Centroids the round started with
	/// - **current**: Centroids the round produced
	/// - **error**: Distance sum of the round's assignment
	/// ## Returns
	/// - **true** if the calculation converged
	/// - **false** if the calculation should continue
	fn next(&mut self, previous: &[Centroid<T>], current: &[Centroid<T>], error: T) -> Result<bool>;
}


pub(crate) struct CentroidShiftLogic<T: Primitive> {
	tolerance: T
}
impl<T: Primitive> ConvergenceLogic<T> for CentroidShiftLogic<T> {
	fn next(&mut self, previous: &[Centroid<T>], current: &[Centroid<T>], _error: T) -> Result<bool> {
		has_converged(previous, current, self.tolerance)
	}
}


pub(crate) struct NoImprovementLogic<T: Primitive> {
	threshold: T,
	prev_error: T
}
impl<T: Primitive> ConvergenceLogic<T> for NoImprovementLogic<T> {
	fn next(&mut self, _previous: &[Centroid<T>], _current: &[Centroid<T>], error: T) -> Result<bool> {
		let improvement = self.prev_error - error;
		self.prev_error = error;
		Ok(!(improvement > self.threshold))
	}
}
