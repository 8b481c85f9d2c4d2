//! Routes
//!
//! Output model of the optimiser: which items to buy where, and what the whole trip costs.

use std::fmt;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::{
    pricing::{PricingError, line_total, subtotal, trip_cost},
    retailers::Retailer,
};

/// The approach that produced a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Buy everything the retailer stocks at that one retailer.
    SingleStore(Retailer),

    /// Buy each item at its cheapest retailer; `stores` is the number of distinct stores used.
    GreedySplit {
        /// Distinct stores used
        stores: usize,
    },

    /// Cheapest full cover of the list using a fixed number of retailers.
    BoundedSplit {
        /// Number of retailers in each candidate combination
        stores: usize,
    },
}

impl Strategy {
    /// Display label, e.g. `single-store` or `3-store-split`.
    pub fn label(&self) -> String {
        match self {
            Strategy::SingleStore(_) => "single-store".to_string(),
            Strategy::GreedySplit { stores } | Strategy::BoundedSplit { stores } => {
                format!("{stores}-store-split")
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// One list item as bought at a particular store.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedItem<'a> {
    /// Item name
    pub name: String,

    /// Units bought
    pub quantity: u32,

    /// Price charged per unit
    pub price: Money<'a, Currency>,

    /// Price per ounce, if known
    pub unit_price: Option<Decimal>,
}

impl<'a> OptimizedItem<'a> {
    /// Create a new assigned item.
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        price: Money<'a, Currency>,
        unit_price: Option<Decimal>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            unit_price,
        }
    }

    /// `price * quantity`
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the line total overflows.
    pub fn line_total(&self) -> Result<Money<'a, Currency>, PricingError> {
        line_total(self.price, self.quantity)
    }
}

/// The part of a list bought at one retailer.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreAssignment<'a> {
    retailer: Retailer,
    items: SmallVec<[OptimizedItem<'a>; 8]>,
    subtotal: Money<'a, Currency>,
}

impl<'a> StoreAssignment<'a> {
    /// Create an assignment, computing its subtotal from the items.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the subtotal cannot be calculated.
    pub fn new(
        retailer: Retailer,
        items: impl IntoIterator<Item = OptimizedItem<'a>>,
        currency: &'a Currency,
    ) -> Result<Self, PricingError> {
        let items: SmallVec<[OptimizedItem<'a>; 8]> = items.into_iter().collect();
        let subtotal = subtotal(&items, currency)?;

        Ok(Self {
            retailer,
            items,
            subtotal,
        })
    }

    /// Retailer the items are bought from
    pub fn retailer(&self) -> Retailer {
        self.retailer
    }

    /// Items bought here
    pub fn items(&self) -> &[OptimizedItem<'a>] {
        &self.items
    }

    /// Sum of `price * quantity` over the items
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }
}

/// A complete way of buying the list.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizedRoute<'a> {
    strategy: Strategy,
    stores: SmallVec<[StoreAssignment<'a>; 4]>,
    total_cost: Money<'a, Currency>,
    savings: Money<'a, Currency>,
    trip_cost: Money<'a, Currency>,
    effective_cost: Money<'a, Currency>,
}

impl<'a> OptimizedRoute<'a> {
    /// Create a route, charging `trip_cost_per_store` once per store.
    ///
    /// Savings start at zero; they are only known once every route for a list is ranked.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] on overflow or currency mismatch.
    pub fn new(
        strategy: Strategy,
        stores: impl IntoIterator<Item = StoreAssignment<'a>>,
        trip_cost_per_store: Money<'a, Currency>,
    ) -> Result<Self, PricingError> {
        let stores: SmallVec<[StoreAssignment<'a>; 4]> = stores.into_iter().collect();
        let currency = trip_cost_per_store.currency();

        let total_cost = stores
            .iter()
            .try_fold(Money::from_minor(0, currency), |acc, store| {
                acc.add(store.subtotal())
            })?;

        let trip_cost = trip_cost(trip_cost_per_store, stores.len())?;
        let effective_cost = total_cost.add(trip_cost)?;

        Ok(Self {
            strategy,
            stores,
            total_cost,
            savings: Money::from_minor(0, currency),
            trip_cost,
            effective_cost,
        })
    }

    /// Approach that produced this route
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Stores visited, each with its items
    pub fn stores(&self) -> &[StoreAssignment<'a>] {
        &self.stores
    }

    /// Number of stores visited
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    /// Number of list items bought on this route
    pub fn item_count(&self) -> usize {
        self.stores.iter().map(|store| store.items().len()).sum()
    }

    /// Sum of the store subtotals
    pub fn total_cost(&self) -> Money<'a, Currency> {
        self.total_cost
    }

    /// How much cheaper this route is than the worst route for the same list
    pub fn savings(&self) -> Money<'a, Currency> {
        self.savings
    }

    /// Trip cost per store times number of stores
    pub fn trip_cost(&self) -> Money<'a, Currency> {
        self.trip_cost
    }

    /// `total_cost + trip_cost`
    pub fn effective_cost(&self) -> Money<'a, Currency> {
        self.effective_cost
    }

    pub(crate) fn set_savings(&mut self, savings: Money<'a, Currency>) {
        self.savings = savings;
    }
}
