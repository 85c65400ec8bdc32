//! One-shot sampling entry points and the payload handed to the renderer.

use feigen_core::sampler::{sample, SampleSet, SweepConfig};
use feigen_core::viewport::{MarkerStyle, Viewport, ViewportBounds, X_LABEL, Y_LABEL};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
pub(crate) struct DiagramPayload {
    pub(crate) config: SweepConfig,
    pub(crate) viewport: Viewport,
    pub(crate) bounds: ViewportBounds,
    pub(crate) title: &'static str,
    pub(crate) x_label: &'static str,
    pub(crate) y_label: &'static str,
    pub(crate) marker: MarkerStyle,
    pub(crate) samples: SampleSet,
}

impl DiagramPayload {
    pub(crate) fn new(config: SweepConfig, viewport: Viewport, samples: SampleSet) -> Self {
        Self {
            config,
            viewport,
            bounds: viewport.bounds(config.r_min, config.r_max),
            title: viewport.title(),
            x_label: X_LABEL,
            y_label: Y_LABEL,
            marker: MarkerStyle::default(),
            samples,
        }
    }
}

/// Counts arrive as JS numbers; anything fractional or non-finite is rejected here.
pub(crate) fn js_count(name: &str, value: f64) -> Result<i64, String> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(format!("{} must be an integer, got {}.", name, value));
    }
    Ok(value as i64)
}

pub(crate) fn sweep_from_js(
    r_min: f64,
    r_max: f64,
    n: f64,
    iterations: f64,
    last: f64,
) -> Result<SweepConfig, String> {
    Ok(SweepConfig {
        r_min,
        r_max,
        n: js_count("n", n)?,
        iterations: js_count("iterations", iterations)?,
        last: js_count("last", last)?,
    })
}

#[wasm_bindgen]
pub fn sample_bifurcation(
    r_min: f64,
    r_max: f64,
    n: f64,
    iterations: f64,
    last: f64,
    zoom: bool,
) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let config =
        sweep_from_js(r_min, r_max, n, iterations, last).map_err(|e| JsValue::from_str(&e))?;
    let samples = sample(
        config.r_min,
        config.r_max,
        config.n,
        config.iterations,
        config.last,
    )
    .map_err(|e| JsValue::from_str(&format!("Bifurcation sampling failed: {}", e)))?;

    let payload = DiagramPayload::new(config, Viewport::from_zoom_flag(zoom), samples);
    to_value(&payload).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[wasm_bindgen]
pub fn viewport_bounds(r_min: f64, r_max: f64, zoom: bool) -> Result<JsValue, JsValue> {
    let bounds = Viewport::from_zoom_flag(zoom).bounds(r_min, r_max);
    to_value(&bounds).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::{js_count, sweep_from_js, DiagramPayload};
    use feigen_core::sampler::{SampleSet, SweepConfig};
    use feigen_core::viewport::Viewport;

    #[test]
    fn js_count_accepts_integral_values() {
        assert_eq!(js_count("n", 12.0), Ok(12));
        assert_eq!(js_count("iterations", -1.0), Ok(-1));
    }

    #[test]
    fn js_count_rejects_fractional_and_non_finite_values() {
        let message = js_count("n", 5.5).expect_err("fractional");
        assert!(message.contains("n must be an integer"));
        assert!(js_count("last", f64::NAN).is_err());
        assert!(js_count("last", f64::INFINITY).is_err());
    }

    #[test]
    fn sweep_from_js_names_offending_count() {
        let message = sweep_from_js(2.5, 4.0, 10.0, 0.5, 1.0).expect_err("fractional");
        assert!(message.contains("iterations"));
        let config = sweep_from_js(2.5, 4.0, 10.0, 20.0, 3.0).expect("config");
        assert_eq!((config.n, config.iterations, config.last), (10, 20, 3));
    }

    #[test]
    fn payload_bounds_follow_viewport() {
        let config = SweepConfig::default();
        let payload = DiagramPayload::new(config, Viewport::Zoom, SampleSet::new());
        assert_eq!(payload.bounds.r_min, 2.5);
        assert!((payload.bounds.r_max - 2.8).abs() < 1e-12);
        assert_eq!(payload.title, "Zoomed Feigenbaum Diagram");
        assert_eq!(payload.marker.alpha, 0.25);
    }
}
