use anyhow::{anyhow, Result};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::{Mutex, OnceLock};

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Initialize the Prometheus recorder globally and store the handle.
///
/// Calling this again after a successful install is a no-op.
pub fn init_metrics() -> Result<()> {
    // ---
    let _guard = INIT_LOCK
        .lock()
        .map_err(|_| anyhow!("metrics init lock poisoned"))?;

    if HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;
    let _ = HANDLE.set(handle);

    Ok(())
}

/// Render the current metrics in Prometheus text format.
///
/// Empty until [`init_metrics`] has run.
pub fn render_metrics() -> String {
    // ---
    HANDLE.get().map(|handle| handle.render()).unwrap_or_default()
}
