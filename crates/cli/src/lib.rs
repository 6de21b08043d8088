//! Demonstration caller: runs the standard stock forward and prints each day.

pub mod config;
pub mod report;

pub use config::{Config, ConfigError, OutputFormat};

use std::io::Write;

use gilded_rose_inventory::Inventory;

/// Print day 0 (the initial state) and then `config.days` advanced days.
pub fn run(
    config: &Config,
    mut inventory: Inventory,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    inventory.validate()?;

    for day in 0..=config.days {
        if day > 0 {
            inventory.advance_day();
        }
        match config.format {
            OutputFormat::Text => {
                out.write_all(report::render_text(day, inventory.items()).as_bytes())?
            }
            OutputFormat::Json => {
                writeln!(out, "{}", report::render_json(day, inventory.items())?)?
            }
        }
    }

    tracing::info!(
        days = config.days,
        items = inventory.items().len(),
        "simulation finished"
    );
    Ok(())
}
