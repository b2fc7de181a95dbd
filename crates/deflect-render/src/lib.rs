//! Plot rendering for the deflector service.
//!
//! One chart kind: a single-series XY line plot with grid mesh, caption and
//! axis labels, rasterized into a fixed-size RGB buffer and PNG-encoded.

pub mod chart;

pub use chart::{render_line_base64, render_line_png, PLOT_HEIGHT, PLOT_WIDTH};
