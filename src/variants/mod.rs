mod lloyd;

pub(crate) use lloyd::Lloyd;
pub use lloyd::{assign, update, EmptyClusterPolicy, StepOutcome};
