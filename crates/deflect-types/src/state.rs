// ─────────────────────────────────────────────────────────────────────
// SCPN Electron Optics — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::Array1;

/// Sampled kinematics of one electron pass through the deflection gap.
///
/// All arrays share the same length and index the same uniform time grid
/// over [0, transit time]. Produced per request and discarded after
/// rendering; never persisted.
#[derive(Debug, Clone)]
pub struct TrajectorySet {
    /// Sample times [s].
    pub t_s: Array1<f64>,
    /// Longitudinal position x(t) = V0 t [m].
    pub x_m: Array1<f64>,
    /// Transverse displacement y(t) [m].
    pub y_m: Array1<f64>,
    /// Transverse velocity v_y(t) [m/s].
    pub v_y_m_s: Array1<f64>,
    /// Transverse acceleration a_y(t) [m/s^2], constant over the pass.
    pub a_y_m_s2: Array1<f64>,
}

impl TrajectorySet {
    /// Number of samples on the time grid.
    pub fn len(&self) -> usize {
        self.t_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t_s.is_empty()
    }
}
