//! Parity plot rendering (plotters, PNG output)

mod hexbin;
mod parity;

pub use hexbin::HexGrid;
pub use parity::{ParityPlot, PlotKind, PlotStyle};
