//! Simulated real-time visitor counter
//!
//! A [`LiveCounter`] holds the current value and publishes changes over a
//! watch channel. [`LiveCounter::start`] spawns a repeating task that applies a
//! delta on every tick and hands back a [`TickerHandle`]; the task stops when
//! the handle is stopped or dropped, so an owning view that goes away takes
//! its ticker with it.

use crate::config::LiveConfig;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::{
    sync::{broadcast, watch},
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};
use tracing::{debug, info};

/// Produces the change applied on each tick
pub trait DeltaSource: Send + 'static {
    /// Next signed change to apply
    fn next_delta(&mut self) -> i64;
}

impl<F> DeltaSource for F
where
    F: FnMut() -> i64 + Send + 'static,
{
    fn next_delta(&mut self) -> i64 {
        self()
    }
}

/// Uniform random walk in `[-max_step, max_step]`
#[derive(Debug)]
pub struct RandomWalk {
    max_step: i64,
    rng: StdRng,
}

impl RandomWalk {
    /// Random walk seeded from the OS
    #[must_use]
    pub fn new(max_step: u32) -> Self {
        Self {
            max_step: i64::from(max_step),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic random walk, for reproducible runs
    #[must_use]
    pub fn seeded(max_step: u32, seed: u64) -> Self {
        Self {
            max_step: i64::from(max_step),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DeltaSource for RandomWalk {
    fn next_delta(&mut self) -> i64 {
        self.rng.gen_range(-self.max_step..=self.max_step)
    }
}

/// Current visitor count, shared with any number of subscribers
#[derive(Debug, Clone)]
pub struct LiveCounter {
    value: Arc<watch::Sender<u64>>,
}

impl LiveCounter {
    /// Create a counter at `initial`
    #[must_use]
    pub fn new(initial: u64) -> Self {
        let (tx, _) = watch::channel(initial);
        Self {
            value: Arc::new(tx),
        }
    }

    /// Current value
    #[must_use]
    pub fn value(&self) -> u64 {
        *self.value.borrow()
    }

    /// Receive every subsequent change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.value.subscribe()
    }

    /// Apply a signed change, saturating at zero, and return the new value
    pub fn apply(&self, delta: i64) -> u64 {
        let mut updated = 0;
        self.value.send_modify(|value| {
            *value = if delta >= 0 {
                value.saturating_add(delta.unsigned_abs())
            } else {
                value.saturating_sub(delta.unsigned_abs())
            };
            updated = *value;
        });
        updated
    }

    /// Start updating the counter every `period`.
    ///
    /// The first update happens one full period after the call.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime or with a zero `period`.
    #[must_use = "dropping the handle stops the ticker immediately"]
    pub fn start<D: DeltaSource>(&self, period: Duration, mut source: D) -> TickerHandle {
        let counter = self.clone();
        let (shutdown_tx, mut shutdown_rx) = broadcast::channel(1);

        info!(period_secs = period.as_secs_f64(), start = self.value(), "Starting live counter");

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let delta = source.next_delta();
                        let value = counter.apply(delta);
                        debug!(delta, value, "Live counter updated");
                    }
                    _ = shutdown_rx.recv() => {
                        debug!("Live counter shutting down");
                        break;
                    }
                }
            }
        });

        TickerHandle {
            shutdown_tx,
            task: Some(task),
        }
    }

    /// Start a random-walk ticker using the configured interval and step
    ///
    /// # Panics
    ///
    /// Same as [`LiveCounter::start`].
    #[must_use = "dropping the handle stops the ticker immediately"]
    pub fn start_from_config(&self, config: &LiveConfig) -> TickerHandle {
        self.start(config.interval(), RandomWalk::new(config.max_step))
    }
}

/// Owner of a running ticker task
#[derive(Debug)]
pub struct TickerHandle {
    shutdown_tx: broadcast::Sender<()>,
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Signal the ticker and wait for it to finish
    pub async fn stop(mut self) {
        let _ = self.shutdown_tx.send(());
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        info!("Live counter stopped");
    }

    /// Whether the ticker task has exited
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            let _ = self.shutdown_tx.send(());
            task.abort();
            debug!("Live counter ticker dropped");
        }
    }
}
