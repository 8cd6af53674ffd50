//! Background poll loop.
//!
//! A single named thread wakes up every `interval`, publishes
//! [`AppEvent::Tick`] and pokes the UI thread through a waker closure
//! (for the window this is `egui::Context::request_repaint`). The thread
//! never touches widget state; the pupils are recomputed on the UI thread
//! when it drains the tick.
//!
//! ```text
//! loop {
//!     publish(Tick) ─► waker() ─► wait(interval or stop)
//! }
//! ```

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{EyesError, Result};
use crate::events::{AppEvent, EventPublisher};
use crate::model::{MAX_POLL_INTERVAL_MS, MIN_POLL_INTERVAL_MS};

const THREAD_NAME: &str = "eyes-ticker";

/// Check a poll interval against the accepted range.
pub fn validate_interval(interval: Duration) -> Result<Duration> {
    let min = Duration::from_millis(MIN_POLL_INTERVAL_MS);
    let max = Duration::from_millis(MAX_POLL_INTERVAL_MS);
    if interval < min || interval > max {
        return Err(EyesError::InvalidInterval(interval));
    }
    Ok(interval)
}

/// Handle to the running poll loop. Dropping it stops the loop.
pub struct Ticker {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
    interval: Duration,
}

impl Ticker {
    /// Start the poll loop.
    ///
    /// `waker` runs on the poll thread after every published tick.
    pub fn spawn<W>(interval: Duration, publisher: EventPublisher, waker: W) -> Result<Self>
    where
        W: Fn() + Send + 'static,
    {
        let interval = validate_interval(interval)?;
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || {
                debug!(?interval, "poll loop started");
                loop {
                    publisher.publish(AppEvent::Tick);
                    waker();
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => continue,
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                debug!("poll loop stopped");
            })
            .map_err(EyesError::SpawnTicker)?;

        Ok(Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
            interval,
        })
    }

    /// Interval between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Is the poll thread still running?
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Signal the loop and wait for the thread to exit.
    ///
    /// Calling `stop` more than once is a no-op.
    pub fn stop(&mut self) -> Result<()> {
        // Dropping the sender wakes the loop with `Disconnected`
        self.stop_tx.take();
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| EyesError::TickerPanicked),
            None => Ok(()),
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            warn!("failed to stop poll loop: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_rejects_interval_out_of_range() {
        assert!(validate_interval(Duration::from_millis(0)).is_err());
        assert!(validate_interval(Duration::from_millis(MAX_POLL_INTERVAL_MS + 1)).is_err());
        assert!(validate_interval(Duration::from_millis(30)).is_ok());
    }

    #[test]
    fn test_spawn_rejects_invalid_interval() {
        let bus = EventBus::new();
        let result = Ticker::spawn(Duration::from_secs(10), bus.publisher(), || {});
        assert!(matches!(result, Err(EyesError::InvalidInterval(_))));
    }

    #[test]
    fn test_ticks_and_wakes() {
        let bus = EventBus::new();
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = wakes.clone();

        let mut ticker = Ticker::spawn(Duration::from_millis(5), bus.publisher(), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .expect("ticker should start");

        std::thread::sleep(Duration::from_millis(60));
        ticker.stop().expect("ticker should stop cleanly");

        let ticks = bus
            .drain()
            .into_iter()
            .filter(|e| *e == AppEvent::Tick)
            .count();
        assert!(ticks >= 2, "expected several ticks, got {}", ticks);
        assert_eq!(ticks, wakes.load(Ordering::SeqCst));
    }

    #[test]
    fn test_stop_is_prompt_and_idempotent() {
        let bus = EventBus::new();
        let mut ticker = Ticker::spawn(
            Duration::from_millis(MAX_POLL_INTERVAL_MS),
            bus.publisher(),
            || {},
        )
        .expect("ticker should start");
        assert!(ticker.is_running());

        let started = std::time::Instant::now();
        ticker.stop().expect("first stop");
        assert!(started.elapsed() < Duration::from_millis(MAX_POLL_INTERVAL_MS));
        assert!(!ticker.is_running());
        ticker.stop().expect("second stop is a no-op");
    }

    #[test]
    fn test_no_ticks_after_stop() {
        let bus = EventBus::new();
        let mut ticker = Ticker::spawn(Duration::from_millis(5), bus.publisher(), || {})
            .expect("ticker should start");
        ticker.stop().expect("stop");
        bus.drain();

        std::thread::sleep(Duration::from_millis(20));
        assert!(bus.drain().is_empty());
    }
}
