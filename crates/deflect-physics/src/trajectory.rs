// ─────────────────────────────────────────────────────────────────────
// SCPN Electron Optics — Trajectory Sampler
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Uniform-grid sampling of the analytic pass kinematics.

use ndarray::Array1;

use deflect_types::config::DeflectorConfig;
use deflect_types::error::DeflectResult;
use deflect_types::state::TrajectorySet;

use crate::kinematics::transit_time_and_acceleration;

/// Samples per pass on the uniform time grid over [0, transit time].
pub const TRAJECTORY_SAMPLES: usize = 100;

/// Sample the pass kinematics at `voltage_v` on the fixed 100-point grid.
///
/// x(t) = V0 t, y(t) = -a_y t^2 / 2, v_y(t) = -a_y t, a_y(t) constant.
pub fn sample_trajectory(
    config: &DeflectorConfig,
    voltage_v: f64,
) -> DeflectResult<TrajectorySet> {
    let (t_transit, a_y) = transit_time_and_acceleration(config, voltage_v)?;
    let t_s = Array1::linspace(0.0, t_transit, TRAJECTORY_SAMPLES);
    let x_m = t_s.mapv(|t| config.beam_speed_m_s * t);
    let y_m = t_s.mapv(|t| -0.5 * a_y * t * t);
    let v_y_m_s = t_s.mapv(|t| -a_y * t);
    let a_y_m_s2 = Array1::from_elem(TRAJECTORY_SAMPLES, a_y);
    Ok(TrajectorySet {
        t_s,
        x_m,
        y_m,
        v_y_m_s,
        a_y_m_s2,
    })
}
