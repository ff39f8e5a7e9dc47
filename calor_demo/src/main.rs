// Copyright 2025 the Calor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the monthly global land-surface temperature dataset as an SVG heat map.
//!
//! Usage: `calor_demo [URL | PATH]`. Without an argument the reference dataset is fetched.
//! The result is written to `calor_heatmap.svg` with the most recent cell hovered.

mod svg;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use calor_core::{MarkSurface, PointerHandler};
use calor_heatmap::{HeatmapConfig, HeatmapError, HeatmapModel, HeatmapView, HoverSurface};
use reqwest::Client;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::svg::SvgScene;

const DEFAULT_SOURCE: &str = "https://raw.githubusercontent.com/FreeCodeCamp/ProjectReferenceData/master/global-temperature.json";
const OUTPUT_PATH: &str = "calor_heatmap.svg";
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    setup_logging();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let source = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SOURCE.to_owned());
    let payload = load(&source)
        .await
        .with_context(|| format!("failed to load {source}"))?;
    let model = HeatmapModel::from_json_slice(&payload, HeatmapConfig::default())
        .context("failed to build the heat map")?;

    let extent = model.dataset().extent();
    info!(
        samples = model.dataset().len(),
        first_year = extent.first_year,
        last_year = extent.last_year,
        base = model.dataset().base_value(),
        "dataset loaded"
    );

    // Hover the center of the most recent cell, located through hit testing.
    let probe = model
        .layout()
        .cells()
        .last()
        .map(|cell| cell.geometry.rect().center() + model.plot_origin().to_vec2())
        .and_then(|at| Some((model.cell_at(at)?, at)));

    let mut svg = SvgScene::new(model.chart_layout().view);
    let mut view = HeatmapView::new();
    svg.apply_diffs(&view.render(model));

    if let Some((key, at)) = probe {
        view.on_pointer_enter(key.mark_id(), at);
        svg.apply_effects(&view.take_effects());
        info!(year = key.year, month = key.month, "simulated hover");
    }

    std::fs::write(OUTPUT_PATH, svg.to_svg_string())
        .with_context(|| format!("failed to write {OUTPUT_PATH}"))?;
    info!(path = OUTPUT_PATH, marks = svg.len(), "wrote heat map");
    Ok(())
}

async fn load(source: &str) -> Result<Vec<u8>, HeatmapError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch(source).await
    } else {
        std::fs::read(source).map_err(|err| {
            warn!(path = source, %err, "dataset read failed");
            HeatmapError::fetch(err)
        })
    }
}

async fn fetch(url: &str) -> Result<Vec<u8>, HeatmapError> {
    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(HeatmapError::fetch)?;
    info!(url, "fetching dataset");
    let body = async {
        client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await
    }
    .await
    .map_err(|err| {
        warn!(url, %err, "dataset fetch failed");
        HeatmapError::fetch(err)
    })?;
    Ok(body.to_vec())
}
