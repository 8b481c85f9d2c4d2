//! Shopping List Fixtures

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, LoadedList, parse_currency, parse_price},
    items::ListItem,
    list::ShoppingList,
    prices::RetailerPrice,
    retailers::Retailer,
};

/// Shopping list fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ListFixture {
    /// List currency code (e.g., "USD")
    pub currency: String,

    /// Trip cost per store (e.g., "5.00 USD")
    #[serde(default)]
    pub trip_cost: Option<String>,

    /// State code limiting the roster
    #[serde(default)]
    pub region: Option<String>,

    /// Bounded split size
    #[serde(default)]
    pub split_size: Option<usize>,

    /// Items on the list
    pub items: Vec<ItemFixture>,
}

/// List item fixture from YAML
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Item name
    pub name: String,

    /// Units wanted
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Offers for the item
    #[serde(default)]
    pub prices: Vec<PriceFixture>,
}

/// Retailer offer fixture from YAML
#[derive(Debug, Deserialize)]
pub struct PriceFixture {
    /// Retailer identifier (e.g., "walmart")
    pub retailer: String,

    /// Price per unit (e.g., "2.99 USD")
    pub price: String,

    /// Price per unit of measure, informational
    #[serde(default)]
    pub unit_price: Option<String>,

    /// Product page
    #[serde(default)]
    pub url: Option<String>,

    /// Whether the retailer has the item in stock
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_quantity() -> u32 {
    1
}

fn default_in_stock() -> bool {
    true
}

impl TryFrom<ListFixture> for LoadedList {
    type Error = FixtureError;

    fn try_from(fixture: ListFixture) -> Result<Self, Self::Error> {
        let currency = parse_currency(&fixture.currency)?;

        let trip_cost = fixture
            .trip_cost
            .as_deref()
            .map(|trip_cost| money_in(trip_cost, currency))
            .transpose()?;

        let items = fixture
            .items
            .into_iter()
            .map(|item| item.into_list_item(currency))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LoadedList {
            list: ShoppingList::with_items(items, currency)?,
            trip_cost,
            region: fixture.region,
            split_size: fixture.split_size,
        })
    }
}

impl ItemFixture {
    /// Convert to a `ListItem` priced in `currency`
    ///
    /// # Errors
    ///
    /// Returns an error if an offer names an unknown retailer, or has a malformed or foreign
    /// price.
    pub fn into_list_item(
        self,
        currency: &'static Currency,
    ) -> Result<ListItem<'static>, FixtureError> {
        let prices = self
            .prices
            .into_iter()
            .map(|price| price.into_retailer_price(currency))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ListItem::new(self.name, self.quantity, prices))
    }
}

impl PriceFixture {
    /// Convert to a `RetailerPrice` in `currency`
    ///
    /// # Errors
    ///
    /// Returns an error if the retailer is unknown, or the price is malformed or foreign.
    pub fn into_retailer_price(
        self,
        currency: &'static Currency,
    ) -> Result<RetailerPrice<'static>, FixtureError> {
        let retailer: Retailer = self.retailer.parse()?;
        let price = money_in(&self.price, currency)?;

        let mut offer = if self.in_stock {
            RetailerPrice::new(retailer, price)
        } else {
            RetailerPrice::out_of_stock(retailer, price)
        };

        if let Some(unit_price) = self.unit_price.as_deref() {
            let unit_price = unit_price
                .trim()
                .parse::<Decimal>()
                .map_err(|_err| FixtureError::InvalidPrice(unit_price.to_string()))?;

            offer = offer.with_unit_price(unit_price);
        }

        if let Some(url) = self.url {
            offer = offer.with_url(url);
        }

        Ok(offer)
    }
}

/// Parse `s` as a price that must be in `currency`.
fn money_in(
    s: &str,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, FixtureError> {
    let (minor_units, found) = parse_price(s)?;

    if found != currency {
        return Err(FixtureError::CurrencyMismatch(
            currency.iso_alpha_code.to_string(),
            found.iso_alpha_code.to_string(),
        ));
    }

    Ok(Money::from_minor(minor_units, currency))
}
