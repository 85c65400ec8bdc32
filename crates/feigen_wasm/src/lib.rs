//! WASM bridge exposing the bifurcation sampler to a browser-side renderer.

mod runner;
mod sampler;

pub use runner::WasmBifurcationRunner;
pub use sampler::{sample_bifurcation, viewport_bounds};
