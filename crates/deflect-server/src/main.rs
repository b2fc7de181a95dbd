// ─────────────────────────────────────────────────────────────────────
// SCPN Electron Optics — Server Entry Point
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use deflect_server::app::create_router;
use deflect_server::handler::{AppState, VoltagePolicy};
use deflect_types::config::DeflectorConfig;

const LISTEN_ADDR: &str = "0.0.0.0:8000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DeflectorConfig::default();
    // Invalid rig constants must never reach the socket.
    if let Err(err) = config.validate() {
        tracing::error!(error = %err, "deflector configuration rejected, refusing to start");
        return Err(err.into());
    }
    tracing::info!(
        v_min = config.threshold_voltage_v(),
        gap_m = config.gap_m(),
        "deflector rig configured"
    );

    let state = AppState::new(config, VoltagePolicy::ThresholdLocked);
    let app = create_router(state);

    let addr: SocketAddr = LISTEN_ADDR.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "serving trajectory plots");
    axum::serve(listener, app).await?;
    Ok(())
}
