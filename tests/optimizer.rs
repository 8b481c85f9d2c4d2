//! Integration tests for the shopping list optimiser.
//!
//! Every list is checked against the route invariants: effective cost is item cost plus trip
//! cost, trip cost is charged once per store, routes are sorted by effective cost and savings
//! are measured against the most expensive route.

use rusty_money::{
    Money,
    iso::{Currency, USD},
};
use testresult::TestResult;

use trolley::prelude::*;

fn usd<'a>(minor: i64) -> Money<'a, Currency> {
    Money::from_minor(minor, USD)
}

fn offer<'a>(retailer: Retailer, minor: i64) -> RetailerPrice<'a> {
    RetailerPrice::new(retailer, usd(minor))
}

fn assert_route_invariants(
    routes: &[OptimizedRoute<'_>],
    trip_cost_per_store: i64,
) -> TestResult {
    for route in routes {
        let stores = i64::try_from(route.store_count())?;

        assert_eq!(
            route.effective_cost().to_minor_units(),
            route.total_cost().to_minor_units() + route.trip_cost().to_minor_units(),
            "effective cost must be total plus trip cost"
        );
        assert_eq!(
            route.trip_cost().to_minor_units(),
            trip_cost_per_store * stores,
            "trip cost must be charged once per store"
        );

        let subtotals: i64 = route
            .stores()
            .iter()
            .map(|store| store.subtotal().to_minor_units())
            .sum();

        assert_eq!(
            route.total_cost().to_minor_units(),
            subtotals,
            "total cost must be the sum of store subtotals"
        );
    }

    let effective: Vec<i64> = routes
        .iter()
        .map(|route| route.effective_cost().to_minor_units())
        .collect();

    assert!(
        effective.windows(2).all(|pair| pair.first() <= pair.get(1)),
        "routes must be sorted by effective cost: {effective:?}"
    );

    if routes.len() > 1 {
        let worst = effective.last().copied().ok_or("missing worst route")?;

        for route in routes {
            assert_eq!(
                route.savings().to_minor_units(),
                worst - route.effective_cost().to_minor_units(),
                "savings must be measured against the worst route"
            );
        }
    }

    Ok(())
}

fn strategies(routes: &[OptimizedRoute<'_>]) -> Vec<Strategy> {
    routes.iter().map(OptimizedRoute::strategy).collect()
}

fn find<'r, 'a>(
    routes: &'r [OptimizedRoute<'a>],
    strategy: Strategy,
) -> Option<&'r OptimizedRoute<'a>> {
    routes.iter().find(|route| route.strategy() == strategy)
}

#[test]
fn empty_list_has_no_routes() -> TestResult {
    let routes = optimize_list(&ShoppingList::new(USD), None, None)?;

    assert!(routes.is_empty());

    Ok(())
}

#[test]
fn single_item_at_single_store() -> TestResult {
    let list = ShoppingList::with_items(
        [ListItem::new("Milk", 2, [offer(Retailer::Walmart, 300)])],
        USD,
    )?;

    let routes = optimize_list(&list, Some(usd(500)), None)?;
    let walmart = find(&routes, Strategy::SingleStore(Retailer::Walmart))
        .ok_or("missing walmart route")?;

    assert_eq!(walmart.total_cost(), usd(600));
    assert_eq!(walmart.trip_cost(), usd(500));
    assert_eq!(walmart.effective_cost(), usd(1100));

    assert_route_invariants(&routes, 500)?;

    Ok(())
}

#[test]
fn split_across_two_stores_without_trip_cost() -> TestResult {
    let list = ShoppingList::with_items(
        [
            ListItem::new(
                "Milk",
                1,
                [offer(Retailer::Walmart, 200), offer(Retailer::Target, 300)],
            ),
            ListItem::new(
                "Bread",
                1,
                [offer(Retailer::Walmart, 400), offer(Retailer::Target, 100)],
            ),
        ],
        USD,
    )?;

    let routes = optimize_list(&list, Some(usd(0)), None)?;

    let greedy =
        find(&routes, Strategy::GreedySplit { stores: 2 }).ok_or("missing greedy route")?;
    let bounded =
        find(&routes, Strategy::BoundedSplit { stores: 2 }).ok_or("missing bounded route")?;

    assert_eq!(greedy.total_cost(), usd(300));
    assert_eq!(bounded.total_cost(), usd(300));
    assert_eq!(greedy.strategy().label(), "2-store-split");

    // Greedy is evaluated before the bounded split, so it ranks first on the tie.
    assert_eq!(
        strategies(&routes).first(),
        Some(&Strategy::GreedySplit { stores: 2 })
    );

    assert_route_invariants(&routes, 0)?;

    Ok(())
}

#[test]
fn out_of_stock_offer_emits_no_route() -> TestResult {
    let list = ShoppingList::with_items(
        [ListItem::new(
            "Milk",
            2,
            [RetailerPrice::out_of_stock(Retailer::Walmart, usd(300))],
        )],
        USD,
    )?;

    let routes = optimize_list(&list, Some(usd(500)), None)?;

    assert!(routes.is_empty());

    Ok(())
}

#[test]
fn greedy_label_counts_distinct_stores() -> TestResult {
    let list = ShoppingList::with_items(
        [
            ListItem::new(
                "Milk",
                1,
                [offer(Retailer::Walmart, 200), offer(Retailer::Target, 250)],
            ),
            ListItem::new(
                "Bread",
                1,
                [offer(Retailer::Target, 150), offer(Retailer::Kroger, 175)],
            ),
            ListItem::new(
                "Coffee",
                1,
                [offer(Retailer::Amazon, 699), offer(Retailer::Walmart, 798)],
            ),
        ],
        USD,
    )?;

    let routes = optimize_list(&list, None, None)?;
    let greedy =
        find(&routes, Strategy::GreedySplit { stores: 3 }).ok_or("missing greedy route")?;

    assert_eq!(greedy.strategy().label(), "3-store-split");
    assert_eq!(greedy.store_count(), 3);
    assert_eq!(greedy.total_cost(), usd(1049));

    assert_route_invariants(&routes, 500)?;

    Ok(())
}

#[test]
fn multi_route_results_are_ranked_and_last_saves_nothing() -> TestResult {
    let list = ShoppingList::with_items(
        [
            ListItem::new(
                "Eggs",
                1,
                [
                    offer(Retailer::Walmart, 297),
                    offer(Retailer::Costco, 499),
                    offer(Retailer::Target, 319),
                ],
            ),
            ListItem::new(
                "Bananas",
                3,
                [offer(Retailer::TraderJoes, 29), offer(Retailer::Walmart, 58)],
            ),
        ],
        USD,
    )?;

    let routes = optimize_list(&list, None, None)?;

    assert!(routes.len() >= 2, "expected several routes");
    assert_eq!(routes.last().map(OptimizedRoute::savings), Some(usd(0)));

    assert_route_invariants(&routes, 500)?;

    Ok(())
}

#[test]
fn out_of_stock_retailer_is_never_assigned() -> TestResult {
    let list = ShoppingList::with_items(
        [
            ListItem::new(
                "Milk",
                1,
                [
                    RetailerPrice::out_of_stock(Retailer::Costco, usd(100)),
                    offer(Retailer::Walmart, 300),
                    offer(Retailer::Target, 320),
                ],
            ),
            ListItem::new(
                "Butter",
                1,
                [offer(Retailer::Costco, 400), offer(Retailer::Walmart, 450)],
            ),
        ],
        USD,
    )?;

    let routes = optimize_list(&list, Some(usd(100)), None)?;

    for route in &routes {
        for store in route.stores() {
            if store.retailer() == Retailer::Costco {
                assert!(
                    store.items().iter().all(|item| item.name != "Milk"),
                    "{} bought out of stock milk at costco",
                    route.strategy()
                );
            }
        }
    }

    assert_route_invariants(&routes, 100)?;

    Ok(())
}

#[test]
fn routes_only_use_the_roster() -> TestResult {
    let list = ShoppingList::with_items(
        [
            ListItem::new(
                "Brisket",
                1,
                [offer(Retailer::Heb, 597), offer(Retailer::Costco, 649)],
            ),
            ListItem::new(
                "Tortillas",
                1,
                [offer(Retailer::Heb, 298), offer(Retailer::Walmart, 327)],
            ),
        ],
        USD,
    )?;

    let national = optimize_list(&list, None, None)?;

    assert!(
        national
            .iter()
            .flat_map(OptimizedRoute::stores)
            .all(|store| store.retailer() != Retailer::Heb),
        "regional retailer used outside its region"
    );

    let roster = available_retailers(Some("TX"));
    let texas = optimize_list(&list, None, Some(roster.as_slice()))?;
    let heb = find(&texas, Strategy::SingleStore(Retailer::Heb)).ok_or("missing heb route")?;

    assert_eq!(heb.total_cost(), usd(895));

    Ok(())
}

#[test]
fn bounded_split_requires_full_coverage() -> TestResult {
    let list = ShoppingList::with_items(
        [
            ListItem::new("Milk", 1, [offer(Retailer::Walmart, 200)]),
            ListItem::new("Bread", 1, [offer(Retailer::Target, 150)]),
            ListItem::new("Coffee", 1, [offer(Retailer::Amazon, 699)]),
        ],
        USD,
    )?;

    let routes = optimize_list(&list, None, None)?;

    assert!(
        routes
            .iter()
            .all(|route| !matches!(route.strategy(), Strategy::BoundedSplit { .. })),
        "no pair covers the whole list"
    );

    let wider = Optimizer::new().with_split_size(3).optimize(&list)?;

    assert!(find(&wider, Strategy::BoundedSplit { stores: 3 }).is_some());

    assert_route_invariants(&wider, 500)?;

    Ok(())
}

#[test]
fn greedy_never_picks_a_dearer_offer() -> TestResult {
    let list = ShoppingList::with_items(
        [
            ListItem::new(
                "Cereal",
                2,
                [
                    offer(Retailer::Kroger, 389),
                    offer(Retailer::Walmart, 344),
                    offer(Retailer::Target, 359),
                ],
            ),
            ListItem::new(
                "Yogurt",
                4,
                [offer(Retailer::WholeFoods, 129), offer(Retailer::Kroger, 99)],
            ),
        ],
        USD,
    )?;

    let routes = optimize_list(&list, None, None)?;
    let greedy = routes
        .iter()
        .find(|route| matches!(route.strategy(), Strategy::GreedySplit { .. }))
        .ok_or("missing greedy route")?;

    for store in greedy.stores() {
        for assigned in store.items() {
            let item = list
                .iter()
                .find(|item| item.name() == assigned.name)
                .ok_or("assigned item not on list")?;

            let cheapest = item
                .prices()
                .iter()
                .filter(|offer| offer.in_stock)
                .map(|offer| offer.price.to_minor_units())
                .min();

            assert_eq!(Some(assigned.price.to_minor_units()), cheapest);
        }
    }

    Ok(())
}
