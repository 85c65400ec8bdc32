//! `feigen`: samples a logistic-map bifurcation diagram and writes it as JSON on stdout.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use feigen_core::sampler::{BifurcationSampler, SampleSet, SweepConfig};
use feigen_core::viewport::{MarkerStyle, Viewport, ViewportBounds, X_LABEL, Y_LABEL};
use serde::Serialize;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

#[derive(Serialize)]
struct DiagramDocument<'a> {
    config: SweepConfig,
    viewport: Viewport,
    bounds: ViewportBounds,
    title: &'static str,
    x_label: &'static str,
    y_label: &'static str,
    marker: MarkerStyle,
    samples: &'a SampleSet,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = args.sweep();
    let sampler = BifurcationSampler::new(&config, args.settings())
        .context("Rejected sweep configuration")?;
    info!(
        grid = sampler.grid().len(),
        window = sampler.window(),
        "sampling logistic map"
    );
    let samples = sampler.sample().context("Rejected sweep configuration")?;

    let viewport = args.viewport();
    let document = DiagramDocument {
        config,
        viewport,
        bounds: viewport.bounds(config.r_min, config.r_max),
        title: viewport.title(),
        x_label: X_LABEL,
        y_label: Y_LABEL,
        marker: MarkerStyle::default(),
        samples: &samples,
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if args.pretty {
        serde_json::to_writer_pretty(&mut out, &document)
    } else {
        serde_json::to_writer(&mut out, &document)
    }
    .context("Failed to serialize samples")?;
    writeln!(out).context("Failed to write samples")?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}
