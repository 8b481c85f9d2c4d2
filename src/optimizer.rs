//! Shopping List Optimiser
//!
//! Finds the cheapest way to buy a shopping list across one or more retailers, trading item
//! savings against a fixed cost per store visited.

use rusty_money::{Money, MoneyError, iso::Currency};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{Span, debug};

use crate::{
    items::ListItem,
    list::ShoppingList,
    prices::RetailerPrice,
    pricing::PricingError,
    retailers::{Retailer, Roster, available_retailers},
    routes::{OptimizedItem, OptimizedRoute, StoreAssignment, Strategy},
};

pub mod bounded;
pub mod greedy;
pub mod single_store;

pub use self::{
    bounded::BoundedSplitPlanner, greedy::GreedySplitPlanner, single_store::SingleStorePlanner,
};

/// Default trip cost per store, in minor units of the list currency.
pub const DEFAULT_TRIP_COST_MINOR: i64 = 500;

/// Default number of retailers in a bounded split.
pub const DEFAULT_SPLIT_SIZE: usize = 2;

/// Optimiser Errors
#[derive(Debug, Error, PartialEq)]
pub enum OptimizerError {
    /// The trip cost per store is negative.
    #[error("trip cost per store must not be negative, got {minor_units} minor units")]
    NegativeTripCost {
        /// Trip cost in minor units
        minor_units: i64,
    },

    /// Wrapped pricing error.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Stores chosen by a planner, each with the items bought there.
pub type StorePlan<'a> = SmallVec<[StoreAssignment<'a>; 4]>;

/// One candidate way of buying the list, before trip costs are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan<'a> {
    /// Approach that produced the plan
    pub strategy: Strategy,

    /// Stores visited
    pub stores: StorePlan<'a>,
}

/// A strategy for splitting a list across retailers.
pub trait Planner {
    /// Plan purchases of `list` using only retailers in `roster`.
    ///
    /// Returns no plans when the strategy cannot cover the list; missing coverage is never an error.
    ///
    /// # Errors
    ///
    /// Returns an [`OptimizerError`] if money arithmetic fails.
    fn plan<'a>(
        &self,
        list: &ShoppingList<'a>,
        roster: &[Retailer],
    ) -> Result<SmallVec<[Plan<'a>; 1]>, OptimizerError>;
}

/// Shopping list optimiser configuration.
#[derive(Debug, Clone)]
pub struct Optimizer<'a> {
    trip_cost_per_store: Option<Money<'a, Currency>>,
    split_size: usize,
    retailers: Option<Roster>,
}

impl Default for Optimizer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Optimizer<'a> {
    /// Optimiser with the default trip cost, split size and national roster.
    pub fn new() -> Self {
        Self {
            trip_cost_per_store: None,
            split_size: DEFAULT_SPLIT_SIZE,
            retailers: None,
        }
    }

    /// Charge `trip_cost` once per store visited.
    #[must_use]
    pub fn with_trip_cost(mut self, trip_cost: Money<'a, Currency>) -> Self {
        self.trip_cost_per_store = Some(trip_cost);
        self
    }

    /// Number of retailers combined by the bounded split.
    #[must_use]
    pub fn with_split_size(mut self, split_size: usize) -> Self {
        self.split_size = split_size;
        self
    }

    /// Only consider these retailers, in this order. Repeated retailers keep their first position.
    #[must_use]
    pub fn with_retailers(mut self, retailers: impl IntoIterator<Item = Retailer>) -> Self {
        let mut roster = Roster::new();

        for retailer in retailers {
            if !roster.contains(&retailer) {
                roster.push(retailer);
            }
        }

        self.retailers = Some(roster);
        self
    }

    /// Roster of retailers considered; the national roster unless overridden.
    pub fn roster(&self) -> Roster {
        self.retailers
            .clone()
            .unwrap_or_else(|| available_retailers(None))
    }

    /// Trip cost per store for a list in `currency`.
    pub fn trip_cost_per_store(&self, currency: &'a Currency) -> Money<'a, Currency> {
        self.trip_cost_per_store
            .unwrap_or_else(|| Money::from_minor(DEFAULT_TRIP_COST_MINOR, currency))
    }

    /// Evaluate every strategy for `list` and rank the resulting routes.
    ///
    /// Routes are sorted by ascending effective cost (ties keep strategy order) and carry their
    /// savings against the most expensive route. An empty list yields no routes.
    ///
    /// # Errors
    ///
    /// Returns an [`OptimizerError`] if the trip cost is negative or money arithmetic fails.
    #[tracing::instrument(
        name = "optimizer.optimize",
        skip_all,
        fields(
            items = list.len(),
            retailers = tracing::field::Empty,
            routes = tracing::field::Empty
        ),
        err
    )]
    pub fn optimize(
        &self,
        list: &ShoppingList<'a>,
    ) -> Result<Vec<OptimizedRoute<'a>>, OptimizerError> {
        if list.is_empty() {
            return Ok(Vec::new());
        }

        let trip_cost = self.trip_cost_per_store(list.currency());

        if trip_cost.to_minor_units() < 0 {
            return Err(OptimizerError::NegativeTripCost {
                minor_units: trip_cost.to_minor_units(),
            });
        }

        let roster = self.roster();
        let span = Span::current();

        span.record("retailers", roster.len());

        let bounded = BoundedSplitPlanner::new(self.split_size);
        let planners: [&dyn Planner; 3] = [&SingleStorePlanner, &GreedySplitPlanner, &bounded];

        let mut routes = Vec::new();

        for planner in planners {
            for plan in planner.plan(list, &roster)? {
                routes.push(OptimizedRoute::new(plan.strategy, plan.stores, trip_cost)?);
            }
        }

        rank(&mut routes)?;

        span.record("routes", routes.len());

        debug!(
            best = ?routes.first().map(|route| route.strategy().label()),
            "ranked routes"
        );

        Ok(routes)
    }
}

/// Optimise `list` in one call.
///
/// `trip_cost_per_store` defaults to 5.00 in the list currency and `retailers` to the national
/// roster.
///
/// # Errors
///
/// Returns an [`OptimizerError`] if the trip cost is negative or money arithmetic fails.
pub fn optimize_list<'a>(
    list: &ShoppingList<'a>,
    trip_cost_per_store: Option<Money<'a, Currency>>,
    retailers: Option<&[Retailer]>,
) -> Result<Vec<OptimizedRoute<'a>>, OptimizerError> {
    let mut optimizer = Optimizer::new();

    if let Some(trip_cost) = trip_cost_per_store {
        optimizer = optimizer.with_trip_cost(trip_cost);
    }

    if let Some(retailers) = retailers {
        optimizer = optimizer.with_retailers(retailers.iter().copied());
    }

    optimizer.optimize(list)
}

/// Sort routes by effective cost and record each route's savings against the worst one.
///
/// A lone route has nothing to be compared with and keeps zero savings.
///
/// # Errors
///
/// Returns a [`MoneyError`] if the routes are in different currencies.
pub fn rank(routes: &mut [OptimizedRoute<'_>]) -> Result<(), MoneyError> {
    routes.sort_by_key(|route| route.effective_cost().to_minor_units());

    if routes.len() < 2 {
        return Ok(());
    }

    let Some(worst) = routes.last().map(OptimizedRoute::effective_cost) else {
        return Ok(());
    };

    for route in routes.iter_mut() {
        let savings = worst.sub(route.effective_cost())?;
        route.set_savings(savings);
    }

    Ok(())
}

/// Record `item` as bought at the price of `offer`.
pub(crate) fn assign<'a>(item: &ListItem<'a>, offer: &RetailerPrice<'a>) -> OptimizedItem<'a> {
    OptimizedItem::new(item.name(), item.quantity(), offer.price, offer.unit_price)
}
