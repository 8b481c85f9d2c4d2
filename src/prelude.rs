//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    combinations::{Combination, combinations},
    fixtures::{Fixture, FixtureError, LoadedList},
    items::ListItem,
    list::{ShoppingList, ShoppingListError},
    optimizer::{
        BoundedSplitPlanner, GreedySplitPlanner, Optimizer, OptimizerError, Plan, Planner,
        SingleStorePlanner, optimize_list, rank,
    },
    prices::RetailerPrice,
    pricing::PricingError,
    report::{Report, ReportError},
    retailers::{
        Availability, Retailer, RetailerConfig, RetailerError, Roster, available_retailers,
    },
    routes::{OptimizedItem, OptimizedRoute, StoreAssignment, Strategy},
    search::{RetailerSearch, SearchError, SearchQuery, collect_offers, price_list_item},
};
