use std::sync::Arc;

use engine_logging::{engine_debug, engine_warn};
use futures_util::stream::{self, BoxStream, StreamExt};
use joblist_core::JobRecord;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{JobProvider, RefreshSignal};

/// A sequence of full job batches.
pub type JobFeed = BoxStream<'static, Vec<JobRecord>>;

/// Reloads the job list once per refresh tick until `stop` is cancelled.
///
/// Requests from successive ticks may overlap; batches are yielded in the
/// order their requests resolve. A failed request is logged and skipped.
/// Cancelling `stop` ends the tick subscription but does not abort requests
/// already in flight.
pub fn refresh_feed(
    refresh: &RefreshSignal,
    provider: Arc<dyn JobProvider>,
    stop: CancellationToken,
) -> JobFeed {
    let (batch_tx, batch_rx) = mpsc::unbounded_channel();
    let mut ticks = refresh.subscribe();

    tokio::spawn(async move {
        loop {
            tokio::select! {
                biased;
                _ = stop.cancelled() => break,
                alive = ticks.next() => {
                    // Cancellation may land while this poll waits on the tick.
                    if !alive || stop.is_cancelled() {
                        break;
                    }
                    let provider = provider.clone();
                    let batch_tx = batch_tx.clone();
                    tokio::spawn(async move {
                        match provider.load_jobs().await {
                            Ok(batch) => {
                                engine_debug!("Loaded {} jobs", batch.len());
                                let _ = batch_tx.send(batch);
                            }
                            Err(err) => engine_warn!("Loading jobs failed: {}", err),
                        }
                    });
                }
            }
        }
        engine_debug!("Refresh feed unsubscribed");
    });

    stream::unfold(batch_rx, |mut rx| async move {
        rx.recv().await.map(|batch| (batch, rx))
    })
    .boxed()
}
