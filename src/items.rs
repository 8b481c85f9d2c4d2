//! Items

use smallvec::SmallVec;

use crate::{prices::RetailerPrice, retailers::Retailer};

/// One line of a shopping list, with the offers gathered for it.
#[derive(Clone, Debug, PartialEq)]
pub struct ListItem<'a> {
    name: String,
    quantity: u32,
    prices: SmallVec<[RetailerPrice<'a>; 4]>,
}

impl<'a> ListItem<'a> {
    /// Creates a new list item with the given offers
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        prices: impl IntoIterator<Item = RetailerPrice<'a>>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            prices: prices.into_iter().collect(),
        }
    }

    /// Returns the item name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of units wanted
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns every offer, including out-of-stock ones
    pub fn prices(&self) -> &[RetailerPrice<'a>] {
        &self.prices
    }

    /// Returns the first in-stock offer from `retailer`
    pub fn offer_from(&self, retailer: Retailer) -> Option<&RetailerPrice<'a>> {
        self.prices
            .iter()
            .find(|price| price.is_available_at(retailer))
    }

    /// Returns the cheapest in-stock offer from a retailer accepted by `filter`.
    ///
    /// The first offer wins when prices tie.
    pub fn cheapest_offer(
        &self,
        mut filter: impl FnMut(Retailer) -> bool,
    ) -> Option<&RetailerPrice<'a>> {
        self.prices
            .iter()
            .filter(|price| price.in_stock && filter(price.retailer))
            .min_by_key(|price| price.price.to_minor_units())
    }
}
