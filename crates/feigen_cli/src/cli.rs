use clap::Parser;
use feigen_core::sampler::{SamplerSettings, SweepConfig, DEFAULT_INITIAL_STATE};
use feigen_core::viewport::Viewport;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Sample the logistic map into a bifurcation diagram point cloud")]
pub struct Args {
    /// Lower end of the parameter sweep
    #[arg(long, default_value_t = 2.5, allow_negative_numbers = true)]
    pub r_min: f64,

    /// Upper end of the parameter sweep
    #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
    pub r_max: f64,

    /// Number of parameter values
    #[arg(long, default_value_t = 1000, allow_negative_numbers = true)]
    pub n: i64,

    /// Total iterations applied to every orbit
    #[arg(long, default_value_t = 1000, allow_negative_numbers = true)]
    pub iterations: i64,

    /// Trailing iterations to record
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub last: i64,

    /// Frame the output with the zoomed viewport
    #[arg(long, default_value_t = false)]
    pub zoom: bool,

    /// Shared starting state of every orbit
    #[arg(long, default_value_t = DEFAULT_INITIAL_STATE, allow_negative_numbers = true)]
    pub initial_state: f64,

    /// Pretty-print the JSON document
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Log progress to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn sweep(&self) -> SweepConfig {
        SweepConfig {
            r_min: self.r_min,
            r_max: self.r_max,
            n: self.n,
            iterations: self.iterations,
            last: self.last,
        }
    }

    pub fn settings(&self) -> SamplerSettings {
        SamplerSettings {
            initial_state: self.initial_state,
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::from_zoom_flag(self.zoom)
    }
}
