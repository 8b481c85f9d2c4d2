//! Command Line Configuration

use std::path::PathBuf;

use clap::{Args, Parser};
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{fixtures::to_minor_units, optimizer::Optimizer, retailers::available_retailers};

/// Errors raised while applying command line overrides.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The trip cost cannot be represented in minor units.
    #[error("trip cost {0} is out of range")]
    TripCostOutOfRange(Decimal),
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Trolley shopping list optimiser
#[derive(Debug, Parser)]
#[command(name = "trolley", about = "Cheapest stores for a shopping list", long_about = None)]
pub struct PlanConfig {
    /// Shopping list fixture to optimise
    #[arg(short, long, default_value = "weekly")]
    pub fixture: String,

    /// Directory containing `lists/<fixture>.yml`
    #[arg(long, env = "TROLLEY_FIXTURES_DIR", default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,

    /// Trip cost per store in the list currency, e.g. 4.50
    #[arg(long)]
    pub trip_cost: Option<Decimal>,

    /// State code limiting which retailers are considered, e.g. TX
    #[arg(long)]
    pub region: Option<String>,

    /// Number of retailers combined by the bounded split
    #[arg(long)]
    pub split_size: Option<usize>,

    /// Logging settings
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl PlanConfig {
    /// Apply command line overrides on top of `optimizer`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the trip cost cannot be represented in `currency`.
    pub fn apply<'a>(
        &self,
        mut optimizer: Optimizer<'a>,
        currency: &'a Currency,
    ) -> Result<Optimizer<'a>, ConfigError> {
        if let Some(trip_cost) = self.trip_cost {
            let minor_units =
                to_minor_units(trip_cost).ok_or(ConfigError::TripCostOutOfRange(trip_cost))?;

            optimizer = optimizer.with_trip_cost(Money::from_minor(minor_units, currency));
        }

        if let Some(split_size) = self.split_size {
            optimizer = optimizer.with_split_size(split_size);
        }

        if let Some(region) = self.region.as_deref() {
            optimizer = optimizer.with_retailers(available_retailers(Some(region)));
        }

        Ok(optimizer)
    }
}
