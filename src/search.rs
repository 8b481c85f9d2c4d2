//! Retailer Search
//!
//! Gathers the offers for one shopping list item from a set of retailer search adapters. A
//! failing adapter contributes no offers; it never fails the item.

use thiserror::Error;
use tracing::{debug, warn};

use crate::{items::ListItem, prices::RetailerPrice, retailers::Retailer};

/// Errors a retailer search adapter can report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The adapter did not answer in time.
    #[error("{0} search timed out")]
    Timeout(Retailer),

    /// The retailer rejected or failed the request.
    #[error("{retailer} search failed: {message}")]
    Upstream {
        /// Retailer queried
        retailer: Retailer,
        /// Failure description
        message: String,
    },
}

/// What to search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text product query
    pub query: String,

    /// State code to scope prices and availability to
    pub region: Option<String>,
}

impl SearchQuery {
    /// Create a query, optionally scoped to a region.
    pub fn new(query: impl Into<String>, region: Option<&str>) -> Self {
        Self {
            query: query.into(),
            region: region.map(str::to_string),
        }
    }
}

/// A source of current offers from one retailer.
#[cfg_attr(test, mockall::automock)]
pub trait RetailerSearch {
    /// Retailer this adapter searches.
    fn retailer(&self) -> Retailer;

    /// Search the retailer's catalogue.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] if the retailer cannot be searched.
    fn search(&self, query: &SearchQuery) -> Result<Vec<RetailerPrice<'static>>, SearchError>;
}

/// Query every adapter and merge their offers, in adapter order.
///
/// Failed adapters are logged and skipped. Offers attributed to a retailer other than the
/// adapter's own are dropped.
pub fn collect_offers(
    adapters: &[&dyn RetailerSearch],
    query: &SearchQuery,
) -> Vec<RetailerPrice<'static>> {
    let mut offers = Vec::new();

    for adapter in adapters {
        let retailer = adapter.retailer();

        match adapter.search(query) {
            Ok(found) => {
                let before = offers.len();

                offers.extend(found.into_iter().filter(|offer| offer.retailer == retailer));

                debug!(
                    %retailer,
                    query = %query.query,
                    offers = offers.len() - before,
                    "search succeeded"
                );
            }
            Err(error) => {
                warn!(
                    %retailer,
                    query = %query.query,
                    %error,
                    "search failed; treating as no offers"
                );
            }
        }
    }

    offers
}

/// Build a list item priced by every adapter.
pub fn price_list_item(
    name: &str,
    quantity: u32,
    adapters: &[&dyn RetailerSearch],
    region: Option<&str>,
) -> ListItem<'static> {
    let query = SearchQuery::new(name, region);

    ListItem::new(name, quantity, collect_offers(adapters, &query))
}
