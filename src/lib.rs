//! Trolley
//!
//! Trolley is a shopping list cost optimiser: given each item's current prices at a set of
//! retailers, it works out the cheapest stores to visit, weighing item savings against a fixed
//! cost per trip.

pub mod combinations;
pub mod config;
pub mod fixtures;
pub mod items;
pub mod list;
pub mod observability;
pub mod optimizer;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod report;
pub mod retailers;
pub mod routes;
pub mod search;
