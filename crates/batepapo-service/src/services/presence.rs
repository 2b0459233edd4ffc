//! Presence sweeper
//!
//! Background task that evicts participants whose heartbeat has gone
//! stale. Each sweep computes a single cutoff, announces the departure of
//! every stale participant with a "sai da sala..." status message, and
//! only then deletes them. The delete re-checks the same cutoff, so a
//! participant whose heartbeat lands between the snapshot and the delete
//! survives and keeps their announcement as room history.

use std::time::Duration;

use chrono::Utc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use batepapo_common::config::PresenceConfig;
use batepapo_core::ChatMessage;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Presence sweeper
///
/// Owns its own `ServiceContext` clone so it can run as a detached task.
pub struct PresenceSweeper {
    ctx: ServiceContext,
    inactivity_threshold: Duration,
    sweep_interval: Duration,
}

impl PresenceSweeper {
    /// Create a new PresenceSweeper
    pub fn new(ctx: ServiceContext, config: &PresenceConfig) -> Self {
        Self {
            ctx,
            inactivity_threshold: config.inactivity_threshold(),
            sweep_interval: config.sweep_interval(),
        }
    }

    /// Run one sweep and return the number of evicted participants
    ///
    /// The cutoff is computed once and reused for the stale snapshot, the
    /// departure announcements, and the delete. A sweep that finds nobody
    /// stale performs no writes at all.
    #[instrument(skip(self))]
    pub async fn sweep_once(&self) -> ServiceResult<u64> {
        let cutoff = Utc::now()
            - chrono::Duration::from_std(self.inactivity_threshold)
                .unwrap_or_else(|_| chrono::Duration::seconds(10));

        let stale = self.ctx.participant_repo().find_stale_before(cutoff).await?;
        if stale.is_empty() {
            debug!("No stale participants");
            return Ok(0);
        }

        // Announce before deleting. A crash here leaves an announced but
        // still-present participant, which the next sweep resolves; the
        // reverse order would lose departures entirely.
        let now = Utc::now();
        for participant in &stale {
            self.ctx
                .message_repo()
                .append(&ChatMessage::departure(&participant.name, now))
                .await?;
        }

        let evicted = self
            .ctx
            .participant_repo()
            .delete_stale_before(cutoff)
            .await?;

        info!(evicted, announced = stale.len(), "Swept stale participants");

        Ok(evicted)
    }

    /// Run the sweep loop until cancelled
    ///
    /// Sweep errors are logged and the loop keeps going; the next tick
    /// retries against the same store.
    pub async fn run(self, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(self.sweep_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick fires immediately; skip it so freshly registered
        // participants get a full interval before the first sweep.
        interval.tick().await;

        info!(
            interval_secs = self.sweep_interval.as_secs(),
            threshold_secs = self.inactivity_threshold.as_secs(),
            "Presence sweeper started"
        );

        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    info!("Presence sweeper stopping");
                    break;
                }
                _ = interval.tick() => {
                    if let Err(e) = self.sweep_once().await {
                        warn!(error = %e, "Sweep failed; will retry on next tick");
                    }
                }
            }
        }
    }
}
