// ─────────────────────────────────────────────────────────────────────
// SCPN Electron Optics — Kinematics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form kinematic quantities for one electron pass.

use deflect_types::config::DeflectorConfig;
use deflect_types::error::{DeflectError, DeflectResult};

/// Transverse acceleration a_y = e (V/d) / m_e [m/s^2].
///
/// Any finite voltage is accepted, with no range bound: V = 0 gives zero
/// acceleration, a negative V deflects toward the opposite electrode.
pub fn transverse_acceleration_m_s2(
    config: &DeflectorConfig,
    voltage_v: f64,
) -> DeflectResult<f64> {
    if !voltage_v.is_finite() {
        return Err(DeflectError::PhysicsViolation(format!(
            "voltage_v must be finite, got {voltage_v}"
        )));
    }
    let field_v_m = voltage_v / config.gap_m();
    Ok(config.elementary_charge_c * field_v_m / config.electron_mass_kg)
}

/// Transit time 2L/V0 [s] across the deflection region.
///
/// Independent of the applied voltage: the longitudinal speed V0 is fixed.
pub fn transit_time_s(config: &DeflectorConfig) -> f64 {
    2.0 * config.electrode_length_m / config.beam_speed_m_s
}

/// Transit time paired with the transverse acceleration at `voltage_v`.
pub fn transit_time_and_acceleration(
    config: &DeflectorConfig,
    voltage_v: f64,
) -> DeflectResult<(f64, f64)> {
    let a_y = transverse_acceleration_m_s2(config, voltage_v)?;
    Ok((transit_time_s(config), a_y))
}

/// Threshold deflecting voltage V_min [V] for the configured rig.
pub fn threshold_voltage_v(config: &DeflectorConfig) -> f64 {
    config.threshold_voltage_v()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rig() -> DeflectorConfig {
        DeflectorConfig::default()
    }

    #[test]
    fn test_acceleration_closed_form() {
        let cfg = rig();
        let v = 1000.0;
        let expected = cfg.elementary_charge_c * v / (cfg.gap_m() * cfg.electron_mass_kg);
        let a = transverse_acceleration_m_s2(&cfg, v).unwrap();
        assert!(
            ((a - expected) / expected).abs() < 1e-14,
            "acceleration drifted from e V / (d m_e): {a} vs {expected}"
        );
    }

    #[test]
    fn test_zero_voltage_gives_zero_acceleration() {
        let a = transverse_acceleration_m_s2(&rig(), 0.0).unwrap();
        assert_eq!(a, 0.0);
    }

    #[test]
    fn test_negative_voltage_flips_sign() {
        let cfg = rig();
        let a_pos = transverse_acceleration_m_s2(&cfg, 250.0).unwrap();
        let a_neg = transverse_acceleration_m_s2(&cfg, -250.0).unwrap();
        assert!(a_pos > 0.0);
        assert!((a_pos + a_neg).abs() < 1e-20);
    }

    #[test]
    fn test_transit_time_matches_geometry() {
        let cfg = rig();
        let t = transit_time_s(&cfg);
        assert!((t - 2.0 * 0.21 / 3.5e6).abs() < 1e-20);
    }

    #[test]
    fn test_non_finite_voltage_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = transverse_acceleration_m_s2(&rig(), bad)
                .expect_err("non-finite voltage must error");
            match err {
                DeflectError::PhysicsViolation(msg) => {
                    assert!(msg.contains("voltage_v"), "unexpected message: {msg}")
                }
                other => panic!("Unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_threshold_voltage_delegates_to_config() {
        let cfg = rig();
        assert_eq!(threshold_voltage_v(&cfg), cfg.threshold_voltage_v());
    }

    proptest! {
        #[test]
        fn prop_transit_time_independent_of_voltage(v in -1.0e6f64..1.0e6) {
            let cfg = rig();
            let (t, _) = transit_time_and_acceleration(&cfg, v).unwrap();
            prop_assert!((t - transit_time_s(&cfg)).abs() < 1e-20);
        }

        #[test]
        fn prop_acceleration_is_linear_in_voltage(v in -1.0e5f64..1.0e5) {
            let cfg = rig();
            let a1 = transverse_acceleration_m_s2(&cfg, v).unwrap();
            let a2 = transverse_acceleration_m_s2(&cfg, 2.0 * v).unwrap();
            prop_assert!((a2 - 2.0 * a1).abs() <= 1e-9 * a1.abs().max(1.0));
        }
    }
}
