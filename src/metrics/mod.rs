//! Metrics for widget choice requests
//!
//! Metric names follow `dy_widgets_{phase}_{name}`; counters get a `_total`
//! suffix. Recording is a no-op until a recorder is installed.

pub mod repository;

pub use repository::RepositoryMetrics;

use std::sync::Once;
use tracing::{info, warn};

use crate::constants::ENV_METRICS_ADDR;

static INIT: Once = Once::new();

/// Macro to create phase-specific metric names with consistent naming
macro_rules! phase_metric {
    (counter, $phase:literal, $name:literal) => {
        concat!("dy_widgets_", $phase, "_", $name, "_total")
    };
    (histogram, $phase:literal, $name:literal) => {
        concat!("dy_widgets_", $phase, "_", $name)
    };
}

pub(crate) use phase_metric;

/// Install the Prometheus exporter when `DY_METRICS_ADDR` is set.
///
/// Idempotent. Must run inside a Tokio runtime since the exporter serves its
/// HTTP listener on it.
pub fn init_metrics() {
    INIT.call_once(|| {
        let Ok(addr_str) = std::env::var(ENV_METRICS_ADDR) else {
            return;
        };

        let addr = match addr_str.parse::<std::net::SocketAddr>() {
            Ok(addr) => addr,
            Err(e) => {
                warn!("Invalid metrics addr '{}': {}", addr_str, e);
                return;
            }
        };

        match metrics_exporter_prometheus::PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()
        {
            Ok(()) => {
                RepositoryMetrics::describe();
                info!("Prometheus exporter listening at http://{}/metrics", addr);
            }
            Err(e) => warn!("Failed to install Prometheus exporter: {}", e),
        }
    });
}
