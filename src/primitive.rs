use num::Float;
use rand::distributions::uniform::SampleUniform;
use std::{
    fmt::{Debug, Display, LowerExp},
    iter::Sum,
    ops::{AddAssign, SubAssign},
};

/// Floating point type the clustering calculations are carried out in.
pub trait Primitive: Float + AddAssign + SubAssign + Sum + SampleUniform
                + Default + Display + Debug + LowerExp + Sync + Send + 'static {
    /// Lossy conversion of a count (cluster sizes, sample counts).
    fn from_usize(v: usize) -> Self;
    /// Lossy conversion of an `f64` constant (tolerances, bounds).
    fn from_f64(v: f64) -> Self;
}
impl Primitive for f32 {
    #[inline(always)] fn from_usize(v: usize) -> Self { v as f32 }
    #[inline(always)] fn from_f64(v: f64) -> Self { v as f32 }
}
impl Primitive for f64 {
    #[inline(always)] fn from_usize(v: usize) -> Self { v as f64 }
    #[inline(always)] fn from_f64(v: f64) -> Self { v }
}
