use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// Floating-point element type of an iterated map's state.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A map `x -> f(x)` on a fixed-size state vector.
pub trait DynamicalSystem<T: Scalar> {
    /// Length of the state vector.
    fn dimension(&self) -> usize;

    /// Writes the image of `x` into `out`.
    /// `t` is the index of the iterate being mapped; autonomous maps ignore it.
    /// `out` never aliases `x`.
    fn apply(&self, t: T, x: &[T], out: &mut [T]);
}

/// Advances a state vector one iterate at a time.
pub trait Steppable<T: Scalar> {
    /// Replaces `state` with its image under `system` and adds `dt` to `t`.
    fn step(&mut self, system: &impl DynamicalSystem<T>, t: &mut T, state: &mut [T], dt: T);
}
