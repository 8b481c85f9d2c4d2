//! Greedy Split Planner

use smallvec::{SmallVec, smallvec};
use tracing::debug;

use crate::{
    list::ShoppingList,
    optimizer::{OptimizerError, Plan, Planner, StorePlan, assign},
    retailers::Retailer,
    routes::{OptimizedItem, StoreAssignment, Strategy},
};

type ItemGroups<'a> = SmallVec<[(Retailer, SmallVec<[OptimizedItem<'a>; 8]>); 4]>;

/// Buys every item at its cheapest in-stock retailer, however many stores that takes.
///
/// Items with no in-stock offer in the roster are skipped. Stores appear in the order their
/// first item does.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySplitPlanner;

impl Planner for GreedySplitPlanner {
    fn plan<'a>(
        &self,
        list: &ShoppingList<'a>,
        roster: &[Retailer],
    ) -> Result<SmallVec<[Plan<'a>; 1]>, OptimizerError> {
        let mut groups = ItemGroups::new();
        let mut skipped = 0usize;

        for item in list.iter() {
            let Some(offer) = item.cheapest_offer(|retailer| roster.contains(&retailer)) else {
                skipped += 1;
                continue;
            };

            let assigned = assign(item, offer);

            match groups.iter_mut().find(|(retailer, _)| *retailer == offer.retailer) {
                Some((_, items)) => items.push(assigned),
                None => groups.push((offer.retailer, smallvec![assigned])),
            }
        }

        debug!(stores = groups.len(), skipped, "greedy split planned");

        if groups.is_empty() {
            return Ok(SmallVec::new());
        }

        let stores = groups
            .into_iter()
            .map(|(retailer, items)| StoreAssignment::new(retailer, items, list.currency()))
            .collect::<Result<StorePlan<'a>, _>>()?;

        Ok(smallvec![Plan {
            strategy: Strategy::GreedySplit {
                stores: stores.len()
            },
            stores,
        }])
    }
}
