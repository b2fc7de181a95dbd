// ─────────────────────────────────────────────────────────────────────
// SCPN Electron Optics — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::constants;
use crate::error::{DeflectError, DeflectResult};

/// Immutable parameters of the cylindrical deflector rig.
///
/// Constructed once at startup, validated, then shared read-only with the
/// physics model and the request handler. The defaults are the rig's fixed
/// geometry and beam parameters; changing them requires recompilation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeflectorConfig {
    /// Inner electrode radius r [m].
    pub inner_radius_m: f64,
    /// Outer electrode radius R [m].
    pub outer_radius_m: f64,
    /// Electrode length L along the beam axis [m].
    pub electrode_length_m: f64,
    /// Longitudinal beam entry speed V0 [m/s].
    pub beam_speed_m_s: f64,
    /// Electron mass [kg].
    pub electron_mass_kg: f64,
    /// Elementary charge [C].
    pub elementary_charge_c: f64,
    /// Vacuum permittivity [F/m].
    pub vacuum_permittivity_f_m: f64,
}

impl Default for DeflectorConfig {
    fn default() -> Self {
        DeflectorConfig {
            inner_radius_m: constants::INNER_RADIUS_M,
            outer_radius_m: constants::OUTER_RADIUS_M,
            electrode_length_m: constants::ELECTRODE_LENGTH_M,
            beam_speed_m_s: constants::BEAM_SPEED_M_S,
            electron_mass_kg: constants::M_ELECTRON,
            elementary_charge_c: constants::Q_ELEMENTARY,
            vacuum_permittivity_f_m: constants::EPSILON_0,
        }
    }
}

impl DeflectorConfig {
    /// Radial gap d = R - r [m].
    pub fn gap_m(&self) -> f64 {
        self.outer_radius_m - self.inner_radius_m
    }

    /// ln(R / r) of the electrode radii.
    pub fn ln_radius_ratio(&self) -> f64 {
        (self.outer_radius_m / self.inner_radius_m).ln()
    }

    /// Threshold deflecting voltage V_min [V] derived from the entry kinetic
    /// energy and the electrode geometry.
    ///
    /// V_min = (m_e V0^2 / 2e) / (ln(R/r) / (2 pi eps0 L))
    pub fn threshold_voltage_v(&self) -> f64 {
        let kinetic_term =
            self.electron_mass_kg * self.beam_speed_m_s * self.beam_speed_m_s
                / (2.0 * self.elementary_charge_c);
        let geometry_term =
            self.ln_radius_ratio() / (2.0 * PI * self.vacuum_permittivity_f_m * self.electrode_length_m);
        kinetic_term / geometry_term
    }

    /// Check the geometric and beam invariants.
    ///
    /// Must pass before the process starts serving: a violated invariant makes
    /// the gap or the log-ratio undefined and every downstream quantity
    /// meaningless.
    pub fn validate(&self) -> DeflectResult<()> {
        let fields = [
            ("inner_radius_m", self.inner_radius_m),
            ("outer_radius_m", self.outer_radius_m),
            ("electrode_length_m", self.electrode_length_m),
            ("beam_speed_m_s", self.beam_speed_m_s),
            ("electron_mass_kg", self.electron_mass_kg),
            ("elementary_charge_c", self.elementary_charge_c),
            ("vacuum_permittivity_f_m", self.vacuum_permittivity_f_m),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(DeflectError::ConfigError(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.inner_radius_m <= 0.0 {
            return Err(DeflectError::ConfigError(format!(
                "inner_radius_m must be > 0, got {}",
                self.inner_radius_m
            )));
        }
        if self.outer_radius_m <= self.inner_radius_m {
            return Err(DeflectError::ConfigError(format!(
                "outer_radius_m must exceed inner_radius_m: R={}, r={}",
                self.outer_radius_m, self.inner_radius_m
            )));
        }
        if self.electrode_length_m <= 0.0 {
            return Err(DeflectError::ConfigError(format!(
                "electrode_length_m must be > 0, got {}",
                self.electrode_length_m
            )));
        }
        if self.beam_speed_m_s <= 0.0 {
            return Err(DeflectError::ConfigError(format!(
                "beam_speed_m_s must be > 0, got {}",
                self.beam_speed_m_s
            )));
        }
        if self.electron_mass_kg <= 0.0 {
            return Err(DeflectError::ConfigError(format!(
                "electron_mass_kg must be > 0, got {}",
                self.electron_mass_kg
            )));
        }
        if self.elementary_charge_c <= 0.0 {
            return Err(DeflectError::ConfigError(format!(
                "elementary_charge_c must be > 0, got {}",
                self.elementary_charge_c
            )));
        }
        if self.vacuum_permittivity_f_m <= 0.0 {
            return Err(DeflectError::ConfigError(format!(
                "vacuum_permittivity_f_m must be > 0, got {}",
                self.vacuum_permittivity_f_m
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = DeflectorConfig::default();
        cfg.validate().expect("default rig parameters must validate");
    }

    #[test]
    fn test_derived_gap_and_log_ratio() {
        let cfg = DeflectorConfig::default();
        assert!((cfg.gap_m() - 0.07).abs() < 1e-12);
        assert!((cfg.ln_radius_ratio() - (0.13f64 / 0.06).ln()).abs() < 1e-15);
    }

    #[test]
    fn test_threshold_voltage_matches_closed_form() {
        let cfg = DeflectorConfig::default();
        let kinetic = cfg.electron_mass_kg * cfg.beam_speed_m_s.powi(2)
            / (2.0 * cfg.elementary_charge_c);
        let geometry = cfg.ln_radius_ratio()
            / (2.0 * PI * cfg.vacuum_permittivity_f_m * cfg.electrode_length_m);
        let expected = kinetic / geometry;
        let v_min = cfg.threshold_voltage_v();
        assert!(
            ((v_min - expected) / expected).abs() < 1e-14,
            "threshold voltage drifted from closed form: {v_min} vs {expected}"
        );
        assert!(v_min > 0.0);
    }

    #[test]
    fn test_validate_rejects_inverted_radii() {
        let cfg = DeflectorConfig {
            inner_radius_m: 0.13,
            outer_radius_m: 0.06,
            ..DeflectorConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        match err {
            DeflectError::ConfigError(msg) => {
                assert!(msg.contains("outer_radius_m"), "unexpected message: {msg}")
            }
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_nonpositive_dimensions() {
        for (field, cfg) in [
            (
                "electrode_length_m",
                DeflectorConfig {
                    electrode_length_m: 0.0,
                    ..DeflectorConfig::default()
                },
            ),
            (
                "beam_speed_m_s",
                DeflectorConfig {
                    beam_speed_m_s: -1.0,
                    ..DeflectorConfig::default()
                },
            ),
            (
                "inner_radius_m",
                DeflectorConfig {
                    inner_radius_m: 0.0,
                    ..DeflectorConfig::default()
                },
            ),
        ] {
            let err = cfg.validate().expect_err("invalid config must not validate");
            match err {
                DeflectError::ConfigError(msg) => {
                    assert!(msg.contains(field), "expected {field} in: {msg}")
                }
                other => panic!("Unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_validate_rejects_non_finite_fields() {
        let cfg = DeflectorConfig {
            vacuum_permittivity_f_m: f64::NAN,
            ..DeflectorConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        match err {
            DeflectError::ConfigError(msg) => {
                assert!(msg.contains("finite"), "unexpected message: {msg}")
            }
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = DeflectorConfig::default();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: DeflectorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.inner_radius_m, cfg2.inner_radius_m);
        assert_eq!(cfg.beam_speed_m_s, cfg2.beam_speed_m_s);
        assert_eq!(cfg.vacuum_permittivity_f_m, cfg2.vacuum_permittivity_f_m);
    }
}
