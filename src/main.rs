//! Trolley command line.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use trolley::{config::PlanConfig, fixtures::Fixture, observability::init_logging, report::Report};

fn main() -> Result<()> {
    let config = PlanConfig::parse();

    init_logging(&config.logging)?;

    let loaded = Fixture::with_base_path(&config.fixtures_dir)
        .load_list(&config.fixture)
        .with_context(|| format!("failed to load shopping list `{}`", config.fixture))?;

    let optimizer = config.apply(loaded.optimizer(), loaded.list.currency())?;
    let routes = optimizer.optimize(&loaded.list)?;

    info!(
        fixture = %config.fixture,
        items = loaded.list.len(),
        routes = routes.len(),
        "optimised shopping list"
    );

    let mut out = io::stdout().lock();

    Report::new(&routes).write_to(&mut out)?;

    out.flush()?;

    Ok(())
}
