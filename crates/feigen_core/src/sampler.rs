use crate::logistic::LogisticEnsemble;
use crate::solvers::DiscreteMap;
use crate::traits::Steppable;
use crate::viewport::ViewportBounds;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Shared starting value of every orbit. Near, but not on, the fixed point at 0.
pub const DEFAULT_INITIAL_STATE: f64 = 1e-5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

fn invalid(message: impl Into<String>) -> SampleError {
    SampleError::InvalidArgument(message.into())
}

/// Reserves `len` slots up front so an oversized sweep is rejected instead of aborting.
fn try_buffer(len: usize, what: &str) -> Result<Vec<f64>, SampleError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|e| invalid(format!("Cannot allocate {} of {} values: {}.", what, len, e)))?;
    Ok(buffer)
}

/// Sweep bounds and iteration budget.
///
/// Counts are signed so that configurations coming from untyped sources can be
/// rejected with a meaningful message instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub r_min: f64,
    pub r_max: f64,
    pub n: i64,
    pub iterations: i64,
    pub last: i64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            r_min: 2.5,
            r_max: 4.0,
            n: 1000,
            iterations: 1000,
            last: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerSettings {
    pub initial_state: f64,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            initial_state: DEFAULT_INITIAL_STATE,
        }
    }
}

/// `n` evenly spaced parameter values from `r_min` to `r_max` inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    values: Vec<f64>,
    step: f64,
}

impl ParameterGrid {
    pub fn linspace(r_min: f64, r_max: f64, n: usize) -> Result<Self, SampleError> {
        if n == 0 {
            return Err(invalid("Parameter grid needs at least one sample."));
        }
        if n == 1 {
            return Ok(Self {
                values: vec![r_min],
                step: 0.0,
            });
        }

        let step = (r_max - r_min) / (n - 1) as f64;
        let mut values = try_buffer(n, "parameter grid")?;
        values.extend((0..n).map(|i| r_min + i as f64 * step));
        // Pin the endpoint so rounding in the step never leaves it short of r_max.
        values[n - 1] = r_max;
        Ok(Self { values, step })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Spacing between neighbours; 0 for a single-point grid.
    pub fn step(&self) -> f64 {
        self.step
    }
}

/// Recorded `(parameter, state)` pairs, stored column-wise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    parameters: Vec<f64>,
    states: Vec<f64>,
}

impl SampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn try_with_capacity(capacity: usize) -> Result<Self, SampleError> {
        Ok(Self {
            parameters: try_buffer(capacity, "sample set")?,
            states: try_buffer(capacity, "sample set")?,
        })
    }

    fn record(&mut self, parameters: &[f64], states: &[f64]) {
        self.parameters.extend_from_slice(parameters);
        self.states.extend_from_slice(states);
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn parameters(&self) -> &[f64] {
        &self.parameters
    }

    pub fn states(&self) -> &[f64] {
        &self.states
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.parameters
            .iter()
            .copied()
            .zip(self.states.iter().copied())
    }

    /// Pairs falling inside `bounds`, for renderers framing a sub-rectangle.
    pub fn within<'a>(
        &'a self,
        bounds: &'a ViewportBounds,
    ) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.iter().filter(move |&(r, x)| bounds.contains(r, x))
    }

    /// Flat `[r0, x0, r1, x1, ...]` layout.
    pub fn interleaved(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.len() * 2);
        for (r, x) in self.iter() {
            out.push(r);
            out.push(x);
        }
        out
    }

    pub fn into_columns(self) -> (Vec<f64>, Vec<f64>) {
        (self.parameters, self.states)
    }
}

/// Progress payload for batched runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunProgress {
    pub done: bool,
    pub current_step: usize,
    pub max_steps: usize,
}

/// Validated sweep, ready to run.
#[derive(Debug, Clone)]
pub struct BifurcationSampler {
    grid: ParameterGrid,
    iterations: usize,
    window: usize,
    initial_state: f64,
}

impl BifurcationSampler {
    pub fn new(config: &SweepConfig, settings: SamplerSettings) -> Result<Self, SampleError> {
        if config.n < 1 {
            return Err(invalid(format!(
                "n must be at least 1, got {}.",
                config.n
            )));
        }
        if config.iterations < 0 {
            return Err(invalid(format!(
                "iterations must be non-negative, got {}.",
                config.iterations
            )));
        }
        if config.last < 0 {
            return Err(invalid(format!(
                "last must be non-negative, got {}.",
                config.last
            )));
        }
        if !settings.initial_state.is_finite() {
            return Err(invalid("Initial state must be finite."));
        }

        let n = usize::try_from(config.n)
            .map_err(|_| invalid(format!("n ({}) exceeds the platform limit.", config.n)))?;
        let iterations = usize::try_from(config.iterations).map_err(|_| {
            invalid(format!(
                "iterations ({}) exceeds the platform limit.",
                config.iterations
            ))
        })?;
        let window = usize::try_from(config.last.min(config.iterations))
            .map_err(|_| invalid(format!("last ({}) exceeds the platform limit.", config.last)))?;
        if n.checked_mul(window).is_none() {
            return Err(invalid(format!(
                "Sample count n * last = {} * {} overflows.",
                n, window
            )));
        }

        let grid = ParameterGrid::linspace(config.r_min, config.r_max, n)?;
        Ok(Self {
            grid,
            iterations,
            window,
            initial_state: settings.initial_state,
        })
    }

    pub fn grid(&self) -> &ParameterGrid {
        &self.grid
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Effective recording window, `min(last, iterations)`.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of pairs a completed run yields.
    pub fn sample_count(&self) -> usize {
        self.grid.len() * self.window
    }

    pub fn sample(&self) -> Result<SampleSet, SampleError> {
        Ok(self.clone().into_run()?.finish())
    }

    /// Allocates the orbit state and the full sample buffer, then hands back a run
    /// that performs no further allocation.
    pub fn into_run(self) -> Result<BifurcationRun, SampleError> {
        let n = self.grid.len();
        debug!(
            n,
            iterations = self.iterations,
            window = self.window,
            "starting bifurcation run"
        );
        let samples = SampleSet::try_with_capacity(self.sample_count())?;
        let mut state = try_buffer(n, "orbit state")?;
        state.resize(n, self.initial_state);
        Ok(BifurcationRun {
            samples,
            state,
            stepper: DiscreteMap::new(n),
            steps_done: 0,
            record_from: self.iterations - self.window,
            iterations: self.iterations,
            grid: self.grid,
        })
    }
}

/// An in-progress sweep that can be advanced in batches.
pub struct BifurcationRun {
    grid: ParameterGrid,
    state: Vec<f64>,
    stepper: DiscreteMap<f64>,
    steps_done: usize,
    record_from: usize,
    iterations: usize,
    samples: SampleSet,
}

impl BifurcationRun {
    pub fn is_done(&self) -> bool {
        self.steps_done >= self.iterations
    }

    pub fn progress(&self) -> RunProgress {
        RunProgress {
            done: self.is_done(),
            current_step: self.steps_done,
            max_steps: self.iterations,
        }
    }

    /// Current iterate of every orbit.
    pub fn state(&self) -> &[f64] {
        &self.state
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    /// Advances every orbit by up to `max_steps` synchronized iterations.
    pub fn advance(&mut self, max_steps: usize) -> RunProgress {
        let ensemble = LogisticEnsemble::new(self.grid.values());
        let target = self.steps_done.saturating_add(max_steps).min(self.iterations);
        while self.steps_done < target {
            // The stepper's clock is the iteration index itself.
            let mut t = self.steps_done as f64;
            self.stepper.step(&ensemble, &mut t, &mut self.state, 1.0);
            if self.steps_done >= self.record_from {
                self.samples.record(ensemble.parameters(), &self.state);
            }
            self.steps_done += 1;
        }
        self.progress()
    }

    /// Runs any remaining iterations and hands over the recorded samples.
    pub fn finish(mut self) -> SampleSet {
        let remaining = self.iterations - self.steps_done;
        self.advance(remaining);
        debug!(samples = self.samples.len(), "bifurcation run complete");
        self.samples
    }
}

/// Samples the logistic map over `n` parameters in `[r_min, r_max]`, recording the
/// final `last` of `iterations` steps of every orbit.
pub fn sample(
    r_min: f64,
    r_max: f64,
    n: i64,
    iterations: i64,
    last: i64,
) -> Result<SampleSet, SampleError> {
    let config = SweepConfig {
        r_min,
        r_max,
        n,
        iterations,
        last,
    };
    sample_with(&config, SamplerSettings::default())
}

pub fn sample_with(
    config: &SweepConfig,
    settings: SamplerSettings,
) -> Result<SampleSet, SampleError> {
    BifurcationSampler::new(config, settings)?.sample()
}
