//! Bounded Split Planner

use rusty_money::{Money, iso::Currency};
use smallvec::{SmallVec, smallvec};
use tracing::debug;

use crate::{
    combinations::{combinations, count},
    list::ShoppingList,
    optimizer::{OptimizerError, Plan, Planner, StorePlan, assign},
    pricing::line_total,
    retailers::Retailer,
    routes::{OptimizedItem, StoreAssignment, Strategy},
};

type ItemGroups<'a> = SmallVec<[(Retailer, SmallVec<[OptimizedItem<'a>; 8]>); 4]>;

/// Finds the cheapest way to buy the whole list from exactly `size` retailers.
///
/// Every `size`-combination of the roster is tried in roster order. A combination that cannot
/// supply every item is rejected outright. Of the rest, the one with the lowest item cost wins,
/// the earliest on ties. Trip cost plays no part: every candidate uses the same number of
/// retailers. Retailers in the winning combination that end up supplying nothing are dropped.
#[derive(Debug, Clone, Copy)]
pub struct BoundedSplitPlanner {
    size: usize,
}

impl BoundedSplitPlanner {
    /// Planner combining `size` retailers.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Number of retailers combined.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Planner for BoundedSplitPlanner {
    fn plan<'a>(
        &self,
        list: &ShoppingList<'a>,
        roster: &[Retailer],
    ) -> Result<SmallVec<[Plan<'a>; 1]>, OptimizerError> {
        debug!(
            size = self.size,
            combinations = count(roster.len(), self.size),
            "evaluating bounded split"
        );

        let mut best: Option<(Money<'a, Currency>, ItemGroups<'a>)> = None;
        let mut rejected = 0usize;

        for combo in combinations(roster, self.size) {
            let Some((cost, groups)) = cover(list, &combo)? else {
                rejected += 1;
                continue;
            };

            let improves = best.as_ref().is_none_or(|(best_cost, _)| {
                cost.to_minor_units() < best_cost.to_minor_units()
            });

            if improves {
                best = Some((cost, groups));
            }
        }

        debug!(rejected, found = best.is_some(), "bounded split evaluated");

        let Some((_, groups)) = best else {
            return Ok(SmallVec::new());
        };

        let stores = groups
            .into_iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(retailer, items)| StoreAssignment::new(retailer, items, list.currency()))
            .collect::<Result<StorePlan<'a>, _>>()?;

        if stores.is_empty() {
            return Ok(SmallVec::new());
        }

        Ok(smallvec![Plan {
            strategy: Strategy::BoundedSplit { stores: self.size },
            stores,
        }])
    }
}

/// Buy every item from the cheaper of the combination's in-stock offers.
///
/// Returns `None` as soon as an item has no in-stock offer from any retailer in `combo`.
fn cover<'a>(
    list: &ShoppingList<'a>,
    combo: &[Retailer],
) -> Result<Option<(Money<'a, Currency>, ItemGroups<'a>)>, OptimizerError> {
    let mut groups: ItemGroups<'a> = combo
        .iter()
        .map(|&retailer| (retailer, SmallVec::new()))
        .collect();

    let mut cost = Money::from_minor(0, list.currency());

    for item in list.iter() {
        let Some(offer) = item.cheapest_offer(|retailer| combo.contains(&retailer)) else {
            return Ok(None);
        };

        cost = cost.add(line_total(offer.price, item.quantity())?)?;

        if let Some((_, items)) = groups
            .iter_mut()
            .find(|(retailer, _)| *retailer == offer.retailer)
        {
            items.push(assign(item, offer));
        }
    }

    Ok(Some((cost, groups)))
}
