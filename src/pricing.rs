//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::routes::OptimizedItem;

/// Errors that can occur while pricing items and trips.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A product of minor units does not fit in an `i64`.
    #[error("amount overflowed: {minor_units} x {factor}")]
    Overflow {
        /// Minor units being multiplied
        minor_units: i64,
        /// Multiplier
        factor: u64,
    },

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Multiplies an amount by a count, exactly, in minor units.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the product cannot be represented.
pub fn multiply<'a>(
    amount: Money<'a, Currency>,
    factor: u64,
) -> Result<Money<'a, Currency>, PricingError> {
    let minor_units = amount.to_minor_units();

    i64::try_from(factor)
        .ok()
        .and_then(|factor| minor_units.checked_mul(factor))
        .map(|product| Money::from_minor(product, amount.currency()))
        .ok_or(PricingError::Overflow {
            minor_units,
            factor,
        })
}

/// Calculates `price * quantity` for one line of a list.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the line total cannot be represented.
pub fn line_total<'a>(
    price: Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, PricingError> {
    multiply(price, u64::from(quantity))
}

/// Calculates the sum of `price * quantity` over a set of assigned items.
///
/// # Errors
///
/// - [`PricingError::Overflow`]: a line total cannot be represented.
/// - [`PricingError::Money`]: money arithmetic or currency mismatch error.
pub fn subtotal<'a>(
    items: &[OptimizedItem<'a>],
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, PricingError> {
    items
        .iter()
        .try_fold(Money::from_minor(0, currency), |acc, item| {
            Ok(acc.add(item.line_total()?)?)
        })
}

/// Calculates the cost of visiting `stores` stores.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the trip cost cannot be represented.
pub fn trip_cost<'a>(
    per_store: Money<'a, Currency>,
    stores: usize,
) -> Result<Money<'a, Currency>, PricingError> {
    let factor = u64::try_from(stores).map_err(|_err| PricingError::Overflow {
        minor_units: per_store.to_minor_units(),
        factor: u64::MAX,
    })?;

    multiply(per_store, factor)
}
