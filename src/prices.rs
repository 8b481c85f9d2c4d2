//! Prices

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::retailers::Retailer;

/// One retailer's current offer for a list item.
#[derive(Debug, Clone, PartialEq)]
pub struct RetailerPrice<'a> {
    /// Retailer making the offer
    pub retailer: Retailer,

    /// Shelf price for one unit of the item
    pub price: Money<'a, Currency>,

    /// Price per ounce, when the retailer publishes one
    pub unit_price: Option<Decimal>,

    /// Product page
    pub url: Option<String>,

    /// Whether the item can currently be bought here
    pub in_stock: bool,
}

impl<'a> RetailerPrice<'a> {
    /// Creates an in-stock offer with no unit price or URL.
    pub fn new(retailer: Retailer, price: Money<'a, Currency>) -> Self {
        Self {
            retailer,
            price,
            unit_price: None,
            url: None,
            in_stock: true,
        }
    }

    /// Creates an offer that is currently out of stock.
    pub fn out_of_stock(retailer: Retailer, price: Money<'a, Currency>) -> Self {
        Self {
            in_stock: false,
            ..Self::new(retailer, price)
        }
    }

    /// Sets the price per ounce.
    #[must_use]
    pub fn with_unit_price(mut self, unit_price: Decimal) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    /// Sets the product page.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Whether this offer is in stock at `retailer`.
    pub fn is_available_at(&self, retailer: Retailer) -> bool {
        self.in_stock && self.retailer == retailer
    }
}
