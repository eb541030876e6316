//! The tokio-backed tick source against a paused clock.

use pomoclock::ticker::{TickSource, TokioTickSource, TICK_PERIOD};
use pomoclock::ui::events::AppEvent;
use std::sync::mpsc;

fn drain(rx: &mpsc::Receiver<AppEvent>) -> Vec<u64> {
    rx.try_iter()
        .filter_map(|event| match event {
            AppEvent::TimerTick { generation } => Some(generation),
            _ => None,
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn emits_one_tick_per_period() {
    let (tx, rx) = mpsc::channel();
    let mut source = TokioTickSource::new(tokio::runtime::Handle::current(), tx);
    let handle = source.start(4);

    // Let the task register its interval before moving the clock.
    tokio::task::yield_now().await;
    assert!(drain(&rx).is_empty());

    for _ in 0..3 {
        tokio::time::sleep(TICK_PERIOD).await;
    }
    tokio::task::yield_now().await;
    assert_eq!(drain(&rx), vec![4, 4, 4]);
    drop(handle);
}

#[tokio::test(start_paused = true)]
async fn dropped_handle_stops_ticks() {
    let (tx, rx) = mpsc::channel();
    let mut source = TokioTickSource::new(tokio::runtime::Handle::current(), tx);
    let handle = source.start(1);
    tokio::task::yield_now().await;

    tokio::time::sleep(TICK_PERIOD).await;
    tokio::task::yield_now().await;
    assert_eq!(drain(&rx), vec![1]);

    drop(handle);
    for _ in 0..5 {
        tokio::time::sleep(TICK_PERIOD).await;
    }
    tokio::task::yield_now().await;
    assert!(drain(&rx).is_empty());
}
