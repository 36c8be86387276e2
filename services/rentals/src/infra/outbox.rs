use std::time::Duration;

use chrono::Utc;

use crate::domain::repository::{DeliveryPort, OutboxRepository};

/// Delivery attempts per event before it is marked permanently failed.
pub const MAX_ATTEMPTS: i32 = 8;

/// Base delay for the exponential retry backoff.
const BACKOFF_BASE_SECS: i64 = 30;

/// Default delivery implementation: logs the event. Real email/WhatsApp
/// senders slot in behind [`DeliveryPort`] without touching the dispatcher.
#[derive(Clone)]
pub struct LogDelivery;

impl DeliveryPort for LogDelivery {
    async fn deliver(&self, kind: &str, payload: &serde_json::Value) -> anyhow::Result<()> {
        tracing::info!(kind, payload = %payload, "delivering notification");
        Ok(())
    }
}

fn backoff(attempts: i32) -> chrono::Duration {
    // 30s, 60s, 120s, ... capped at one hour.
    let secs = BACKOFF_BASE_SECS
        .saturating_mul(1i64 << attempts.clamp(0, 12))
        .min(3600);
    chrono::Duration::seconds(secs)
}

/// Drain one batch of due events. Returns the number of events handled.
pub async fn dispatch_due<O, D>(outbox: &O, delivery: &D) -> usize
where
    O: OutboxRepository,
    D: DeliveryPort,
{
    let now = Utc::now();
    let events = match outbox.due(now, 50).await {
        Ok(events) => events,
        Err(e) => {
            tracing::error!(error = %e, "failed to poll outbox");
            return 0;
        }
    };
    let handled = events.len();

    for event in events {
        match delivery.deliver(&event.kind, &event.payload).await {
            Ok(()) => {
                if let Err(e) = outbox.mark_processed(event.id, Utc::now()).await {
                    tracing::error!(error = %e, event_id = %event.id, "failed to mark processed");
                }
            }
            Err(e) => {
                let attempts = event.attempts + 1;
                let next = if attempts >= MAX_ATTEMPTS {
                    tracing::error!(
                        error = %e,
                        event_id = %event.id,
                        kind = %event.kind,
                        "delivery failed permanently"
                    );
                    None
                } else {
                    tracing::warn!(
                        error = %e,
                        event_id = %event.id,
                        attempts,
                        "delivery failed, will retry"
                    );
                    Some(Utc::now() + backoff(attempts))
                };
                if let Err(e) = outbox
                    .mark_failed(event.id, &e.to_string(), Utc::now(), next)
                    .await
                {
                    tracing::error!(error = %e, event_id = %event.id, "failed to record failure");
                }
            }
        }
    }
    handled
}

/// Background dispatcher loop. Spawned once at startup; polls the outbox at
/// a fixed interval and hands due events to the delivery port. Failures are
/// logged, never propagated to request handlers.
pub async fn run_dispatcher<O, D>(outbox: O, delivery: D, poll_interval: Duration)
where
    O: OutboxRepository,
    D: DeliveryPort,
{
    let mut ticker = tokio::time::interval(poll_interval);
    loop {
        ticker.tick().await;
        dispatch_due(&outbox, &delivery).await;
    }
}
