// ─────────────────────────────────────────────────────────────────────
// SCPN Electron Optics — Chart Renderer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;

use deflect_types::error::{DeflectError, DeflectResult};

/// Raster width of every generated plot [px].
pub const PLOT_WIDTH: u32 = 640;

/// Raster height of every generated plot [px].
pub const PLOT_HEIGHT: u32 = 480;

/// Relative padding applied around the data span on both axes.
const RANGE_PAD_FRAC: f64 = 0.05;

fn validate_series(x: &[f64], y: &[f64]) -> DeflectResult<()> {
    if x.is_empty() || y.is_empty() {
        return Err(DeflectError::Render(
            "series must be non-empty".to_string(),
        ));
    }
    if x.len() != y.len() {
        return Err(DeflectError::Render(format!(
            "series length mismatch: x has {}, y has {}",
            x.len(),
            y.len()
        )));
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(DeflectError::Render(
            "series contains non-finite values".to_string(),
        ));
    }
    Ok(())
}

/// Padded axis range for a value sequence.
///
/// A flat series (the acceleration plot is one) is padded proportionally to
/// its magnitude so the chart never receives an empty or sub-epsilon range.
fn padded_range(values: &[f64]) -> (f64, f64) {
    let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = hi - lo;
    let pad = if span > f64::EPSILON * hi.abs().max(lo.abs()).max(1.0) {
        RANGE_PAD_FRAC * span
    } else {
        0.1 * hi.abs().max(1.0)
    };
    (lo - pad, hi + pad)
}

/// Tick label formatter: plain decimals near unity, scientific elsewhere.
fn axis_label(value: &f64) -> String {
    let magnitude = value.abs();
    if magnitude > 0.0 && (magnitude >= 1.0e4 || magnitude < 1.0e-3) {
        format!("{value:.2e}")
    } else {
        format!("{value:.3}")
    }
}

/// Render one XY line series to a PNG image.
///
/// The drawing surface lives only inside this call: the bitmap backend is
/// scoped so it is released on every exit path before the buffer is encoded.
pub fn render_line_png(
    x: &[f64],
    y: &[f64],
    title: &str,
    x_label: &str,
    y_label: &str,
) -> DeflectResult<Vec<u8>> {
    validate_series(x, y)?;

    let (x_lo, x_hi) = padded_range(x);
    let (y_lo, y_hi) = padded_range(y);

    let mut raster = vec![0u8; (PLOT_WIDTH * PLOT_HEIGHT * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut raster, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| DeflectError::Render(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24).into_font())
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)
            .map_err(|e| DeflectError::Render(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc(x_label)
            .y_desc(y_label)
            .x_label_formatter(&axis_label)
            .y_label_formatter(&axis_label)
            .draw()
            .map_err(|e| DeflectError::Render(e.to_string()))?;

        chart
            .draw_series(LineSeries::new(
                x.iter().zip(y.iter()).map(|(&xv, &yv)| (xv, yv)),
                &BLUE,
            ))
            .map_err(|e| DeflectError::Render(e.to_string()))?;

        root.present()
            .map_err(|e| DeflectError::Render(e.to_string()))?;
    }

    let img = RgbImage::from_raw(PLOT_WIDTH, PLOT_HEIGHT, raster).ok_or_else(|| {
        DeflectError::Render("raster buffer does not match plot dimensions".to_string())
    })?;
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| DeflectError::Render(e.to_string()))?;
    Ok(png)
}

/// Render one XY line series and return the PNG as base64 text.
pub fn render_line_base64(
    x: &[f64],
    y: &[f64],
    title: &str,
    x_label: &str,
    y_label: &str,
) -> DeflectResult<String> {
    let png = render_line_png(x, y, title, x_label, y_label)?;
    Ok(BASE64_STANDARD.encode(png))
}
