//! Overdue Monitor Service
//!
//! Periodically sweeps pending invoices past their due date and marks them
//! overdue.

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use tokio::sync::watch;

use super::billing::BillingService;

/// Configuration for the overdue sweep
#[derive(Debug, Clone)]
pub struct OverdueConfig {
    /// How often to run the sweep (in seconds)
    pub check_interval_secs: u64,
}

impl Default for OverdueConfig {
    fn default() -> Self {
        Self {
            check_interval_secs: 3600, // hourly
        }
    }
}

/// Overdue Monitor Service
///
/// Runs in the background; the only periodic writer in the system.
pub struct OverdueMonitor {
    billing: Arc<BillingService>,
    config: OverdueConfig,
}

impl OverdueMonitor {
    pub fn new(billing: Arc<BillingService>) -> Self {
        Self {
            billing,
            config: OverdueConfig::default(),
        }
    }

    pub fn with_config(mut self, config: OverdueConfig) -> Self {
        self.config = config;
        self
    }

    /// Start the background sweep task. Stops when `shutdown` flips.
    pub fn start(&self, mut shutdown: watch::Receiver<bool>) {
        let billing = self.billing.clone();
        let config = self.config.clone();

        tokio::spawn(async move {
            info!(
                "Overdue monitor started (check interval: {}s)",
                config.check_interval_secs
            );

            let mut interval =
                tokio::time::interval(Duration::from_secs(config.check_interval_secs));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        match billing.refresh_overdue().await {
                            Ok(0) => {}
                            Ok(n) => info!("Overdue sweep marked {} invoice(s)", n),
                            Err(e) => warn!("Overdue sweep error: {}", e),
                        }
                    }
                    _ = shutdown.changed() => {
                        info!("Overdue monitor shutting down");
                        break;
                    }
                }
            }
        });
    }
}
