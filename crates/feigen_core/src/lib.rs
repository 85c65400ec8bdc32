pub mod logistic;
pub mod sampler;
pub mod solvers;
/// The `feigen_core` crate samples the long-run orbit structure of the logistic map
/// across a sweep of its control parameter, producing the point cloud of a
/// bifurcation (Feigenbaum) diagram.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `DynamicalSystem` (maps), `Steppable` (steppers).
/// - **Solvers**: The `DiscreteMap` iterator.
/// - **Logistic**: The scalar logistic map and the decoupled ensemble driven by a parameter grid.
/// - **Sampler**: `ParameterGrid`, `SampleSet` and the `BifurcationSampler` with its batched run.
/// - **Viewport**: Full and zoomed framing presets consumed by renderers.
pub mod traits;
pub mod viewport;
