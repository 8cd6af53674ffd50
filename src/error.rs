//! Error type shared by the library modules.

use std::time::Duration;

use thiserror::Error;

/// Errors raised while configuring or starting the widget.
#[derive(Debug, Error)]
pub enum EyesError {
    /// Poll interval outside [`MIN_POLL_INTERVAL_MS`, `MAX_POLL_INTERVAL_MS`].
    ///
    /// [`MIN_POLL_INTERVAL_MS`]: crate::model::MIN_POLL_INTERVAL_MS
    /// [`MAX_POLL_INTERVAL_MS`]: crate::model::MAX_POLL_INTERVAL_MS
    #[error("poll interval {0:?} is out of range")]
    InvalidInterval(Duration),

    /// Requested window size is not a finite, positive size.
    #[error("invalid window size {width}x{height}")]
    InvalidSize { width: f64, height: f64 },

    /// The background polling thread could not be started.
    #[error("failed to spawn poll thread: {0}")]
    SpawnTicker(#[source] std::io::Error),

    /// The background polling thread panicked before it was joined.
    #[error("poll thread panicked")]
    TickerPanicked,

    /// The native window could not be created or its event loop failed.
    #[error("window error: {0}")]
    Window(String),
}

/// Convenience alias used across the library.
pub type Result<T> = std::result::Result<T, EyesError>;
