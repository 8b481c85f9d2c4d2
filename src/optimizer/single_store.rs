//! Single Store Planner

use smallvec::{SmallVec, smallvec};
use tracing::debug;

use crate::{
    list::ShoppingList,
    optimizer::{OptimizerError, Plan, Planner, assign},
    retailers::Retailer,
    routes::{OptimizedItem, StoreAssignment, Strategy},
};

/// Buys everything a retailer stocks at that retailer, one plan per retailer.
///
/// Items the retailer does not stock are left off the plan. Retailers stocking nothing on the
/// list produce no plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleStorePlanner;

impl Planner for SingleStorePlanner {
    fn plan<'a>(
        &self,
        list: &ShoppingList<'a>,
        roster: &[Retailer],
    ) -> Result<SmallVec<[Plan<'a>; 1]>, OptimizerError> {
        let mut plans = SmallVec::new();

        for &retailer in roster {
            let items: SmallVec<[OptimizedItem<'a>; 8]> = list
                .iter()
                .filter_map(|item| item.offer_from(retailer).map(|offer| assign(item, offer)))
                .collect();

            if items.is_empty() {
                debug!(%retailer, "retailer stocks nothing on the list");
                continue;
            }

            if items.len() < list.len() {
                debug!(
                    %retailer,
                    missing = list.len() - items.len(),
                    "single-store route covers part of the list"
                );
            }

            let store = StoreAssignment::new(retailer, items, list.currency())?;

            plans.push(Plan {
                strategy: Strategy::SingleStore(retailer),
                stores: smallvec![store],
            });
        }

        Ok(plans)
    }
}
