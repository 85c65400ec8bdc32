//! Batched runner so a UI can interleave sampling with rendering frames.

use crate::sampler::{sweep_from_js, DiagramPayload};
use feigen_core::sampler::{BifurcationRun, BifurcationSampler, SamplerSettings, SweepConfig};
use feigen_core::viewport::Viewport;
use js_sys::Float64Array;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmBifurcationRunner {
    config: SweepConfig,
    run: Option<BifurcationRun>,
}

fn build_run(config: &SweepConfig, initial_state: f64) -> Result<BifurcationRun, String> {
    BifurcationSampler::new(config, SamplerSettings { initial_state })
        .and_then(BifurcationSampler::into_run)
        .map_err(|e| format!("{}", e))
}

#[wasm_bindgen]
impl WasmBifurcationRunner {
    #[wasm_bindgen(constructor)]
    pub fn new(
        r_min: f64,
        r_max: f64,
        n: f64,
        iterations: f64,
        last: f64,
        initial_state: f64,
    ) -> Result<WasmBifurcationRunner, JsValue> {
        console_error_panic_hook::set_once();

        let config =
            sweep_from_js(r_min, r_max, n, iterations, last).map_err(|e| JsValue::from_str(&e))?;
        let run = build_run(&config, initial_state).map_err(|e| JsValue::from_str(&e))?;

        Ok(WasmBifurcationRunner {
            config,
            run: Some(run),
        })
    }

    pub fn is_done(&self) -> bool {
        self.run.as_ref().map_or(true, |run| run.is_done())
    }

    pub fn run_steps(&mut self, batch_size: u32) -> Result<JsValue, JsValue> {
        let run = self
            .run
            .as_mut()
            .ok_or_else(|| JsValue::from_str("Runner samples already taken"))?;
        let progress = run.advance(batch_size as usize);
        to_value(&progress).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Finishes the run and returns interleaved `[r0, x0, r1, x1, ...]`.
    pub fn take_samples(&mut self) -> Result<Float64Array, JsValue> {
        let run = self
            .run
            .take()
            .ok_or_else(|| JsValue::from_str("Runner samples already taken"))?;
        let samples = run.finish();
        Ok(Float64Array::from(samples.interleaved().as_slice()))
    }

    /// Finishes the run and returns the full diagram payload for the chosen viewport.
    pub fn take_payload(&mut self, zoom: bool) -> Result<JsValue, JsValue> {
        let run = self
            .run
            .take()
            .ok_or_else(|| JsValue::from_str("Runner samples already taken"))?;
        let payload = DiagramPayload::new(self.config, Viewport::from_zoom_flag(zoom), run.finish());
        to_value(&payload).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::{build_run, WasmBifurcationRunner};
    use crate::sampler::sweep_from_js;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn build_error(n: f64, iterations: f64, last: f64, initial_state: f64) -> String {
        sweep_from_js(2.5, 4.0, n, iterations, last)
            .and_then(|config| build_run(&config, initial_state))
            .err()
            .unwrap_or_default()
    }

    #[test]
    fn build_run_rejects_empty_grid() {
        assert!(build_error(0.0, 10.0, 1.0, 1e-5).contains("n must be at least 1"));
    }

    #[test]
    fn build_run_rejects_negative_counts() {
        assert!(build_error(5.0, -1.0, 1.0, 1e-5).contains("iterations must be non-negative"));
        assert!(build_error(5.0, 10.0, -2.0, 1e-5).contains("last must be non-negative"));
    }

    #[test]
    fn build_run_rejects_fractional_counts_and_bad_initial_state() {
        assert!(build_error(5.5, 10.0, 1.0, 1e-5).contains("must be an integer"));
        assert!(build_error(5.0, 10.0, 1.0, f64::NAN).contains("Initial state"));
    }

    #[test]
    fn built_run_records_full_window() {
        let config = sweep_from_js(2.5, 4.0, 5.0, 5.0, 2.0).expect("config");
        let mut run = build_run(&config, 1e-5).expect("run");
        while !run.is_done() {
            run.advance(2);
        }
        assert_eq!(run.finish().len(), 10);
    }

    fn error_message(result: Result<WasmBifurcationRunner, wasm_bindgen::JsValue>) -> String {
        result
            .err()
            .and_then(|err| err.as_string())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn runner_rejects_empty_grid() {
        let message = error_message(WasmBifurcationRunner::new(2.5, 4.0, 0.0, 10.0, 1.0, 1e-5));
        assert!(message.contains("n must be at least 1"));
    }

    #[wasm_bindgen_test]
    fn runner_rejects_negative_iterations() {
        let message = error_message(WasmBifurcationRunner::new(2.5, 4.0, 5.0, -1.0, 1.0, 1e-5));
        assert!(message.contains("iterations must be non-negative"));
    }

    #[wasm_bindgen_test]
    fn runner_yields_interleaved_samples() {
        let mut runner =
            WasmBifurcationRunner::new(2.5, 4.0, 5.0, 5.0, 2.0, 1e-5).expect("runner");
        while !runner.is_done() {
            runner.run_steps(2).expect("progress");
        }
        let samples = runner.take_samples().expect("samples");
        assert_eq!(samples.length(), 20);
        assert!(runner.take_samples().is_err());
        assert!(runner.is_done());
    }
}
