//! Parity plots (predicted vs. ground truth)

use super::hexbin::HexGrid;
use crate::error::{Error, Result};
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

const CANVAS: (u32, u32) = (800, 800);

fn plot_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Plot(e.to_string())
}

/// How points are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotKind {
    /// One marker per point
    Scatter,
    /// Hexagonal density bins
    #[default]
    Hexbin,
}

impl std::str::FromStr for PlotKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scatter" => Ok(PlotKind::Scatter),
            "hexbin" | "hexabin" => Ok(PlotKind::Hexbin),
            _ => Err(format!("Unknown plot kind: {s}. Valid kinds: scatter, hexbin")),
        }
    }
}

/// Rendering options shared by every parity plot of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotStyle {
    /// Scatter or hexbin
    pub kind: PlotKind,
    /// Axis limits, identical for both axes
    pub limits: (f64, f64),
    /// Hexagons across the axis range
    pub gridsize: usize,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            kind: PlotKind::Hexbin,
            limits: (-12.0, 12.0),
            gridsize: 60,
        }
    }
}

/// One parity plot.
#[derive(Debug, Clone)]
pub struct ParityPlot<'a> {
    /// Chart caption
    pub title: String,
    /// X axis label (ground truth)
    pub xlabel: String,
    /// Y axis label (prediction)
    pub ylabel: String,
    /// Ground-truth values
    pub truth: &'a [f64],
    /// Predicted values
    pub predicted: &'a [f64],
}

impl ParityPlot<'_> {
    /// Render the plot to a PNG file.
    pub fn render(&self, path: &Path, style: &PlotStyle) -> Result<()> {
        if self.truth.len() != self.predicted.len() {
            return Err(Error::LengthMismatch {
                expected: self.truth.len(),
                actual: self.predicted.len(),
            });
        }
        let (lo, hi) = style.limits;

        let root = BitMapBackend::new(path, CANVAS).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(lo..hi, lo..hi)
            .map_err(plot_err)?;

        chart
            .configure_mesh()
            .x_desc(&self.xlabel)
            .y_desc(&self.ylabel)
            .disable_mesh()
            .draw()
            .map_err(plot_err)?;

        let inside = |&(x, y): &(f64, f64)| (lo..=hi).contains(&x) && (lo..=hi).contains(&y);
        let points = self
            .truth
            .iter()
            .copied()
            .zip(self.predicted.iter().copied())
            .filter(inside);

        match style.kind {
            PlotKind::Scatter => {
                chart
                    .draw_series(points.map(|p| Circle::new(p, 2, BLUE.mix(0.4).filled())))
                    .map_err(plot_err)?;
            }
            PlotKind::Hexbin => {
                let grid = HexGrid::new(style.limits, style.gridsize);
                let counts = grid.bin(points);
                let max = counts.values().copied().max().unwrap_or(1) as f64;
                chart
                    .draw_series(counts.iter().map(|(&(q, r), &n)| {
                        // log scale so sparse tails stay visible
                        let t = (n as f64).ln_1p() / max.ln_1p();
                        let color = HSLColor(0.66 * (1.0 - t), 0.85, 0.3 + 0.3 * t);
                        Polygon::new(grid.vertices(q, r).to_vec(), color.filled())
                    }))
                    .map_err(plot_err)?;
            }
        }

        chart
            .draw_series(LineSeries::new(vec![(lo, lo), (hi, hi)], BLACK.stroke_width(1)))
            .map_err(plot_err)?;

        root.present().map_err(plot_err)?;
        Ok(())
    }
}
