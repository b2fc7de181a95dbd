// ─────────────────────────────────────────────────────────────────────
// SCPN Electron Optics — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Electron rest mass (kg)
pub const M_ELECTRON: f64 = 9.1093837e-31;

/// Elementary charge (C)
pub const Q_ELEMENTARY: f64 = 1.602e-19;

/// Vacuum permittivity (F/m)
pub const EPSILON_0: f64 = 8.854e-12;

/// Inner electrode radius (m)
pub const INNER_RADIUS_M: f64 = 0.06;

/// Outer electrode radius (m)
pub const OUTER_RADIUS_M: f64 = 0.13;

/// Electrode length along the beam axis (m)
pub const ELECTRODE_LENGTH_M: f64 = 0.21;

/// Initial longitudinal beam speed (m/s)
pub const BEAM_SPEED_M_S: f64 = 3.5e6;
