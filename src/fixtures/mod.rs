//! Fixtures
//!
//! Shopping lists stored as YAML under `<base>/lists/<name>.yml`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use thiserror::Error;

use crate::{
    fixtures::lists::ListFixture,
    list::{ShoppingList, ShoppingListError},
    optimizer::Optimizer,
    retailers::{RetailerError, available_retailers},
};

pub mod lists;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A price is not in the list currency
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Unknown retailer identifier
    #[error(transparent)]
    Retailer(#[from] RetailerError),

    /// The items do not form a valid shopping list
    #[error("Invalid shopping list: {0}")]
    List(#[from] ShoppingListError),
}

/// A shopping list loaded from a fixture, with the optimiser settings stored alongside it.
#[derive(Debug)]
pub struct LoadedList {
    /// Validated list
    pub list: ShoppingList<'static>,

    /// Trip cost per store, if the fixture sets one
    pub trip_cost: Option<Money<'static, Currency>>,

    /// State code limiting the roster, if the fixture sets one
    pub region: Option<String>,

    /// Bounded split size, if the fixture sets one
    pub split_size: Option<usize>,
}

impl LoadedList {
    /// Optimiser configured from the fixture's settings; unset ones keep their defaults.
    pub fn optimizer(&self) -> Optimizer<'static> {
        let mut optimizer = Optimizer::new();

        if let Some(trip_cost) = self.trip_cost {
            optimizer = optimizer.with_trip_cost(trip_cost);
        }

        if let Some(split_size) = self.split_size {
            optimizer = optimizer.with_split_size(split_size);
        }

        if let Some(region) = self.region.as_deref() {
            optimizer = optimizer.with_retailers(available_retailers(Some(region)));
        }

        optimizer
    }
}

/// Fixture loader
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a loader with the default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Base path fixtures are read from
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Load the shopping list fixture `lists/<name>.yml`.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the file cannot be read or parsed, or if its contents do
    /// not form a valid shopping list.
    #[tracing::instrument(
        name = "fixtures.load_list",
        skip(self),
        fields(path = tracing::field::Empty),
        err
    )]
    pub fn load_list(&self, name: &str) -> Result<LoadedList, FixtureError> {
        let path = self.base_path.join("lists").join(format!("{name}.yml"));

        tracing::Span::current().record("path", tracing::field::display(path.display()));

        let contents = fs::read_to_string(&path)?;

        parse_list(&contents)
    }
}

/// Parse a shopping list fixture from YAML.
///
/// # Errors
///
/// Returns a [`FixtureError`] if the YAML is malformed or describes an invalid list.
pub fn parse_list(contents: &str) -> Result<LoadedList, FixtureError> {
    let fixture: ListFixture = serde_norway::from_str(contents)?;

    fixture.try_into()
}

/// Parse price string (e.g., "2.99 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY", if the amount is not
/// a decimal number, or if the currency code is not recognised.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let minor_units = amount
        .parse::<Decimal>()
        .ok()
        .and_then(to_minor_units)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, parse_currency(code)?))
}

/// Parse an ISO currency code.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] for anything other than GBP, USD or EUR.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code.trim() {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}

/// Convert a decimal amount to minor units, rounding to the nearest cent. Half cents round
/// away from zero.
///
/// Returns `None` if the amount does not fit.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| {
            value
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
        })
}
