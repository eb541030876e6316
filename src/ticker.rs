//! Periodic tick source for the countdown.
//!
//! A running timer holds exactly one [`TickHandle`]. Dropping the handle
//! cancels the source. Every tick carries the generation of the handle that
//! produced it, so ticks already sitting in the event queue when a handle is
//! released can be recognised as stale and ignored.

use std::sync::mpsc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::ui::events::AppEvent;

/// Countdown cadence.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Something that can start a periodic tick stream.
pub trait TickSource {
    /// Start emitting ticks tagged with `generation`. The stream stops when
    /// the returned handle is dropped.
    fn start(&mut self, generation: u64) -> TickHandle;
}

/// Owned, cancel-on-drop handle for one tick stream.
pub struct TickHandle {
    generation: u64,
    cancel: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl TickHandle {
    pub fn new<F: FnOnce() + Send + 'static>(generation: u64, cancel: F) -> Self {
        Self {
            generation,
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            tracing::debug!(generation = self.generation, "tick source cancelled");
            cancel();
        }
    }
}

/// Tick source backed by a tokio interval task.
pub struct TokioTickSource {
    runtime: Handle,
    period: Duration,
    tx: mpsc::Sender<AppEvent>,
}

impl TokioTickSource {
    pub fn new(runtime: Handle, tx: mpsc::Sender<AppEvent>) -> Self {
        Self::with_period(runtime, TICK_PERIOD, tx)
    }

    pub fn with_period(runtime: Handle, period: Duration, tx: mpsc::Sender<AppEvent>) -> Self {
        Self {
            runtime,
            period,
            tx,
        }
    }
}

impl TickSource for TokioTickSource {
    fn start(&mut self, generation: u64) -> TickHandle {
        let period = self.period;
        let tx = self.tx.clone();
        let task = self.runtime.spawn(async move {
            // First tick one full period after start, like setInterval.
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(AppEvent::TimerTick { generation }).is_err() {
                    tracing::trace!(generation, "tick receiver gone, stopping");
                    break;
                }
            }
        });
        tracing::debug!(generation, period_ms = period.as_millis() as u64, "tick source started");
        TickHandle::new(generation, move || task.abort())
    }
}
