//! Shopping List

use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{items::ListItem, retailers::Retailer};

/// Errors related to shopping list construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShoppingListError {
    /// An item asks for zero units (item index).
    #[error("Item {0} has a quantity of zero")]
    ZeroQuantity(usize),

    /// An offer has a negative price (item index, retailer).
    #[error("Item {0} has a negative price at {1}")]
    NegativePrice(usize, Retailer),

    /// An offer's currency differs from the list currency (item index, offer currency, list currency).
    #[error("Item {0} has currency {1}, but list has currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),
}

/// A validated shopping list.
///
/// Every quantity is positive, every price is non-negative and every offer is in the list currency.
#[derive(Debug)]
pub struct ShoppingList<'a> {
    items: Vec<ListItem<'a>>,
    currency: &'static Currency,
}

impl<'a> ShoppingList<'a> {
    /// Create a new, empty shopping list.
    pub fn new(currency: &'static Currency) -> Self {
        ShoppingList {
            items: Vec::new(),
            currency,
        }
    }

    /// Create a new shopping list with the given items.
    ///
    /// # Errors
    ///
    /// Returns a `ShoppingListError` if an item has a zero quantity, or an offer has a negative
    /// price or a foreign currency.
    pub fn with_items(
        items: impl Into<Vec<ListItem<'a>>>,
        currency: &'static Currency,
    ) -> Result<Self, ShoppingListError> {
        let items = items.into();

        items
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| validate_item(i, item, currency))?;

        Ok(ShoppingList { items, currency })
    }

    /// Add an item to the list.
    ///
    /// # Errors
    ///
    /// Returns a `ShoppingListError` if the item fails validation; the list is left unchanged.
    pub fn push(&mut self, item: ListItem<'a>) -> Result<(), ShoppingListError> {
        validate_item(self.items.len(), &item, self.currency)?;

        self.items.push(item);

        Ok(())
    }

    /// Iterate over the items in the list.
    pub fn iter(&self) -> impl Iterator<Item = &ListItem<'a>> {
        self.items.iter()
    }

    /// Get the items in the list.
    pub fn items(&self) -> &[ListItem<'a>] {
        &self.items
    }

    /// Get the number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the list.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

fn validate_item(
    index: usize,
    item: &ListItem<'_>,
    currency: &'static Currency,
) -> Result<(), ShoppingListError> {
    if item.quantity() == 0 {
        return Err(ShoppingListError::ZeroQuantity(index));
    }

    item.prices().iter().try_for_each(|offer| {
        let offer_currency = offer.price.currency();

        if offer_currency != currency {
            Err(ShoppingListError::CurrencyMismatch(
                index,
                offer_currency.iso_alpha_code,
                currency.iso_alpha_code,
            ))
        } else if offer.price.to_minor_units() < 0 {
            Err(ShoppingListError::NegativePrice(index, offer.retailer))
        } else {
            Ok(())
        }
    })
}

#[cfg(test)]
mod tests {
    use rusty_money::{
        Money,
        iso::{GBP, USD},
    };
    use testresult::TestResult;

    use crate::prices::RetailerPrice;

    use super::*;

    fn test_items<'a>() -> [ListItem<'a>; 2] {
        [
            ListItem::new(
                "Milk",
                1,
                [RetailerPrice::new(Retailer::Walmart, Money::from_minor(300, USD))],
            ),
            ListItem::new(
                "Bread",
                2,
                [RetailerPrice::new(Retailer::Target, Money::from_minor(250, USD))],
            ),
        ]
    }

    #[test]
    fn new_list_is_empty() {
        let list = ShoppingList::new(USD);

        assert!(list.is_empty());
        assert_eq!(list.currency(), USD);
    }

    #[test]
    fn with_items_succeeds_for_valid_items() -> TestResult {
        let list = ShoppingList::with_items(test_items(), USD)?;

        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().map(ListItem::name).collect::<Vec<_>>(), ["Milk", "Bread"]);

        Ok(())
    }

    #[test]
    fn with_items_rejects_zero_quantity() {
        let items = [ListItem::new("Eggs", 0, [])];

        let result = ShoppingList::with_items(items, USD);

        assert_eq!(result.err(), Some(ShoppingListError::ZeroQuantity(0)));
    }

    #[test]
    fn with_items_rejects_negative_price() {
        let mut items = test_items().to_vec();
        items.push(ListItem::new(
            "Eggs",
            1,
            [RetailerPrice::new(Retailer::Costco, Money::from_minor(-1, USD))],
        ));

        let result = ShoppingList::with_items(items, USD);

        assert_eq!(
            result.err(),
            Some(ShoppingListError::NegativePrice(2, Retailer::Costco))
        );
    }

    #[test]
    fn with_items_rejects_currency_mismatch() {
        let items = [ListItem::new(
            "Tea",
            1,
            [RetailerPrice::new(Retailer::Amazon, Money::from_minor(300, GBP))],
        )];

        let result = ShoppingList::with_items(items, USD);

        assert_eq!(
            result.err(),
            Some(ShoppingListError::CurrencyMismatch(
                0,
                GBP.iso_alpha_code,
                USD.iso_alpha_code
            ))
        );
    }

    #[test]
    fn push_validates_with_next_index() -> TestResult {
        let mut list = ShoppingList::with_items(test_items(), USD)?;

        let result = list.push(ListItem::new("Eggs", 0, []));

        assert_eq!(result, Err(ShoppingListError::ZeroQuantity(2)));
        assert_eq!(list.len(), 2);

        list.push(ListItem::new("Eggs", 12, []))?;

        assert_eq!(list.len(), 3);

        Ok(())
    }

    #[test]
    fn free_items_are_allowed() -> TestResult {
        let items = [ListItem::new(
            "Sample",
            1,
            [RetailerPrice::new(Retailer::Costco, Money::from_minor(0, USD))],
        )];

        assert_eq!(ShoppingList::with_items(items, USD)?.len(), 1);

        Ok(())
    }
}
