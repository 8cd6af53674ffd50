//! Command-line options.
//!
//! The widget keeps no configuration on disk; everything tunable comes in
//! through flags and is validated into [`WidgetOptions`] before any window
//! is created.

use std::time::Duration;

use clap::Parser;

use crate::error::{EyesError, Result};
use crate::model::*;
use crate::ticker::validate_interval;

/// A borderless widget with two eyes that follow the mouse cursor.
#[derive(Parser, Debug, Clone)]
#[command(name = "hello-eyes", version, about)]
pub struct Cli {
    /// Initial window width in logical pixels
    #[arg(long, default_value_t = DEFAULT_CLIENT_WIDTH)]
    pub width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = DEFAULT_CLIENT_HEIGHT)]
    pub height: f64,

    /// Cursor poll interval in milliseconds
    #[arg(long = "interval-ms", default_value_t = DEFAULT_POLL_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Start with the white background (and resize grip) enabled
    #[arg(long)]
    pub background: bool,

    /// Keep the widget above other windows
    #[arg(long)]
    pub always_on_top: bool,
}

/// Validated startup options.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetOptions {
    pub width: f64,
    pub height: f64,
    pub poll_interval: Duration,
    pub background_visible: bool,
    pub always_on_top: bool,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_CLIENT_WIDTH,
            height: DEFAULT_CLIENT_HEIGHT,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            background_visible: false,
            always_on_top: false,
        }
    }
}

impl TryFrom<Cli> for WidgetOptions {
    type Error = EyesError;

    fn try_from(cli: Cli) -> Result<Self> {
        let size_ok = |v: f64| v.is_finite() && (MIN_CLIENT_SIZE..=MAX_CLIENT_SIZE).contains(&v);
        if !size_ok(cli.width) || !size_ok(cli.height) {
            return Err(EyesError::InvalidSize {
                width: cli.width,
                height: cli.height,
            });
        }

        Ok(Self {
            width: cli.width,
            height: cli.height,
            poll_interval: validate_interval(Duration::from_millis(cli.interval_ms))?,
            background_visible: cli.background,
            always_on_top: cli.always_on_top,
        })
    }
}
