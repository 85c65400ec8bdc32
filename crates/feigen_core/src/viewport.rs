//! Framing presets for rendering a bifurcation diagram.
//!
//! Nothing here influences sampling; a renderer picks a preset and maps the
//! `SampleSet` onto the resulting rectangle.

use serde::{Deserialize, Serialize};

pub const X_LABEL: &str = "r (bifurcation parameter)";
pub const Y_LABEL: &str = "x (population)";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Viewport {
    /// `[r_min, r_max] x [0, 1]`
    #[default]
    Full,
    /// First fifth of the sweep, `x` in `[0.3, 0.7]`.
    Zoom,
}

/// Axis-aligned rectangle in `(r, x)` space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub r_min: f64,
    pub r_max: f64,
    pub x_min: f64,
    pub x_max: f64,
}

impl ViewportBounds {
    /// Inclusive on all edges.
    pub fn contains(&self, r: f64, x: f64) -> bool {
        r >= self.r_min && r <= self.r_max && x >= self.x_min && x <= self.x_max
    }
}

/// Scatter marker hint: single-pixel black points, translucent so that dense
/// attractor bands render darker than sparse chaotic regions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub size_px: f64,
    pub rgb: [u8; 3],
    pub alpha: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            size_px: 1.0,
            rgb: [0, 0, 0],
            alpha: 0.25,
        }
    }
}

impl Viewport {
    pub fn from_zoom_flag(zoom: bool) -> Self {
        if zoom {
            Viewport::Zoom
        } else {
            Viewport::Full
        }
    }

    pub fn bounds(self, r_min: f64, r_max: f64) -> ViewportBounds {
        match self {
            Viewport::Full => ViewportBounds {
                r_min,
                r_max,
                x_min: 0.0,
                x_max: 1.0,
            },
            Viewport::Zoom => ViewportBounds {
                r_min,
                r_max: r_min + (r_max - r_min) / 5.0,
                x_min: 0.3,
                x_max: 0.7,
            },
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Viewport::Full => "Feigenbaum Diagram (Logistic Map)",
            Viewport::Zoom => "Zoomed Feigenbaum Diagram",
        }
    }
}
