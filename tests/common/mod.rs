//! Shared test utilities and recording doubles.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use pomoclock::alert::{AlertError, AlertSink};
use pomoclock::ticker::{TickHandle, TickSource};
use pomoclock::ui::app::App;
use pomoclock::ui::theme::Theme;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

// -- Alert double -------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AlertLog {
    pub plays: usize,
    pub stops: usize,
}

/// Alert that counts calls, optionally failing every one of them.
pub struct RecordingAlert {
    log: Arc<Mutex<AlertLog>>,
    fail: bool,
}

impl AlertSink for RecordingAlert {
    fn play(&mut self) -> Result<(), AlertError> {
        self.log.lock().plays += 1;
        if self.fail {
            return Err(AlertError::Io(std::io::Error::other("autoplay blocked")));
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), AlertError> {
        self.log.lock().stops += 1;
        if self.fail {
            return Err(AlertError::Io(std::io::Error::other("no audio device")));
        }
        Ok(())
    }
}

// -- Tick source double -------------------------------------------------------

#[derive(Debug, Default)]
pub struct TickLog {
    /// Generations handed out, in order.
    pub started: Vec<u64>,
    /// Generations whose handle was dropped, in order.
    pub cancelled: Vec<u64>,
}

impl TickLog {
    pub fn live(&self) -> Vec<u64> {
        self.started
            .iter()
            .copied()
            .filter(|g| !self.cancelled.contains(g))
            .collect()
    }
}

/// Tick source that never fires on its own; tests deliver ticks by hand.
pub struct ManualTicks {
    log: Arc<Mutex<TickLog>>,
}

impl TickSource for ManualTicks {
    fn start(&mut self, generation: u64) -> TickHandle {
        self.log.lock().started.push(generation);
        let log = Arc::clone(&self.log);
        TickHandle::new(generation, move || log.lock().cancelled.push(generation))
    }
}

// -- App helpers --------------------------------------------------------------

pub struct Harness {
    pub app: App,
    pub alerts: Arc<Mutex<AlertLog>>,
    pub ticks: Arc<Mutex<TickLog>>,
}

impl Harness {
    /// Deliver one tick from the live source, if there is one.
    pub fn tick(&mut self) {
        if let Some(generation) = self.app.ticker_generation() {
            self.app.on_timer_tick(generation);
        }
    }

    pub fn tick_n(&mut self, n: u32) {
        for _ in 0..n {
            self.tick();
        }
    }

    pub fn reset_confirmed(&mut self) {
        self.app.request_reset();
        self.app.accept_reset();
    }
}

pub fn harness() -> Harness {
    build_harness(false)
}

/// Harness whose alert fails on every call.
pub fn harness_with_broken_alert() -> Harness {
    build_harness(true)
}

fn build_harness(fail_alert: bool) -> Harness {
    let alerts = Arc::new(Mutex::new(AlertLog::default()));
    let ticks = Arc::new(Mutex::new(TickLog::default()));
    let app = App::new(
        Theme::White,
        Box::new(ManualTicks {
            log: Arc::clone(&ticks),
        }),
        Box::new(RecordingAlert {
            log: Arc::clone(&alerts),
            fail: fail_alert,
        }),
    );
    Harness { app, alerts, ticks }
}

// -- Config helpers -----------------------------------------------------------

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
