//! The logistic map x_{t+1} = r * x_t * (1 - x_t), alone and as a decoupled ensemble.

use crate::traits::{DynamicalSystem, Scalar};

/// Evaluates one logistic step. No clamping: divergent or NaN values pass through.
#[inline]
pub fn logistic_step<T: Scalar>(r: T, x: T) -> T {
    r * x * (T::one() - x)
}

/// One-dimensional logistic map with a fixed parameter.
#[derive(Debug, Clone, Copy)]
pub struct LogisticMap<T: Scalar> {
    pub r: T,
}

impl<T: Scalar> LogisticMap<T> {
    pub fn new(r: T) -> Self {
        Self { r }
    }
}

impl<T: Scalar> DynamicalSystem<T> for LogisticMap<T> {
    fn dimension(&self) -> usize {
        1
    }

    fn apply(&self, _t: T, x: &[T], out: &mut [T]) {
        out[0] = logistic_step(self.r, x[0]);
    }
}

/// `n` independent logistic orbits viewed as a single `n`-dimensional map.
/// Component `k` is driven by `parameters[k]` and depends only on `x[k]`.
#[derive(Debug, Clone, Copy)]
pub struct LogisticEnsemble<'a> {
    parameters: &'a [f64],
}

impl<'a> LogisticEnsemble<'a> {
    pub fn new(parameters: &'a [f64]) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &'a [f64] {
        self.parameters
    }
}

impl DynamicalSystem<f64> for LogisticEnsemble<'_> {
    fn dimension(&self) -> usize {
        self.parameters.len()
    }

    fn apply(&self, _t: f64, x: &[f64], out: &mut [f64]) {
        for ((dest, &r), &xk) in out.iter_mut().zip(self.parameters).zip(x) {
            *dest = logistic_step(r, xk);
        }
    }
}
