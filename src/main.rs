//! Entry point: parse flags, set up logging, open the widget.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use hello_eyes::config::{Cli, WidgetOptions};
use hello_eyes::{logging, ui};

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let options = WidgetOptions::try_from(cli).context("invalid command-line options")?;

    ui::run(options).context("eyes window failed")?;

    info!("eyes closed");
    Ok(())
}
