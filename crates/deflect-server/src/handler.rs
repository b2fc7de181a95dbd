// ─────────────────────────────────────────────────────────────────────
// SCPN Electron Optics — Request Handler
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One request/response cycle: voltage in, four base64 PNG plots out.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use deflect_physics::trajectory::sample_trajectory;
use deflect_render::render_line_base64;
use deflect_types::config::DeflectorConfig;
use deflect_types::error::DeflectError;

/// Which voltage drives the plotted trajectory.
///
/// `ThresholdLocked` reproduces the rig's observed behavior: the caller's
/// value is discarded and the geometry-derived threshold voltage is applied
/// instead. `CallerSupplied` is the corrected variant; it is selected only by
/// editing `main`, never by runtime input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoltagePolicy {
    #[default]
    ThresholdLocked,
    CallerSupplied,
}

/// Read-only per-process state shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<DeflectorConfig>,
    pub policy: VoltagePolicy,
}

impl AppState {
    pub fn new(config: DeflectorConfig, policy: VoltagePolicy) -> Self {
        AppState {
            config: Arc::new(config),
            policy,
        }
    }

    /// Voltage actually applied for a request asking for `requested_v`.
    pub fn effective_voltage_v(&self, requested_v: f64) -> f64 {
        match self.policy {
            VoltagePolicy::ThresholdLocked => self.config.threshold_voltage_v(),
            VoltagePolicy::CallerSupplied => requested_v,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoltageRequest {
    pub voltage: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrajectoryPlotsResponse {
    pub trajectory_plot: String,
    pub velocity_plot: String,
    pub acceleration_plot: String,
    pub y_t_plot: String,
}

/// Core error surfaced at the HTTP boundary. No local recovery, no partial
/// plot sets: any failure is a 500 carrying the error text.
#[derive(Debug)]
pub struct AppError(DeflectError);

impl From<DeflectError> for AppError {
    fn from(err: DeflectError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

/// `POST /calculate/trajectory`
pub async fn calculate_trajectory(
    State(state): State<AppState>,
    Json(request): Json<VoltageRequest>,
) -> Result<Json<TrajectoryPlotsResponse>, AppError> {
    let applied_v = state.effective_voltage_v(request.voltage);
    tracing::info!(
        requested_v = request.voltage,
        applied_v,
        "computing trajectory plots"
    );

    let set = sample_trajectory(&state.config, applied_v)?;
    let t = set.t_s.to_vec();
    let x = set.x_m.to_vec();
    let y = set.y_m.to_vec();
    let v_y = set.v_y_m_s.to_vec();
    let a_y = set.a_y_m_s2.to_vec();

    let trajectory_plot = render_line_base64(&x, &y, "Trajectory y(x)", "x (m)", "y (m)")?;
    let velocity_plot = render_line_base64(&t, &v_y, "Velocity v_y(t)", "t (s)", "v_y (m/s)")?;
    let acceleration_plot =
        render_line_base64(&t, &a_y, "Acceleration a_y(t)", "t (s)", "a_y (m/s^2)")?;
    let y_t_plot = render_line_base64(&t, &y, "Displacement y(t)", "t (s)", "y (m)")?;

    tracing::debug!(samples = set.len(), "plot set produced");
    Ok(Json(TrajectoryPlotsResponse {
        trajectory_plot,
        velocity_plot,
        acceleration_plot,
        y_t_plot,
    }))
}
