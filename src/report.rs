//! Report
//!
//! Renders ranked routes as a table followed by a shopping plan per route.

use std::io;

use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::routes::{OptimizedRoute, StoreAssignment};

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error
    #[error("IO error")]
    Io,
}

/// Ranked routes ready to be printed.
#[derive(Debug, Clone, Copy)]
pub struct Report<'r, 'a> {
    routes: &'r [OptimizedRoute<'a>],
}

impl<'r, 'a> Report<'r, 'a> {
    /// Report over `routes`, which should already be ranked.
    pub fn new(routes: &'r [OptimizedRoute<'a>]) -> Self {
        Self { routes }
    }

    /// Routes in the report.
    pub fn routes(&self) -> &'r [OptimizedRoute<'a>] {
        self.routes
    }

    /// Writes the report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        if self.routes.is_empty() {
            return writeln!(out, "No routes to compare.").map_err(|_err| ReportError::Io);
        }

        write_route_table(&mut out, self.routes)?;

        for (rank, route) in self.routes.iter().enumerate() {
            write_route_plan(&mut out, rank + 1, route)?;
        }

        Ok(())
    }
}

fn write_route_table(
    out: &mut impl io::Write,
    routes: &[OptimizedRoute<'_>],
) -> Result<(), ReportError> {
    let mut builder = Builder::default();

    builder.push_record([
        "#",
        "Strategy",
        "Stores",
        "Items",
        "Total",
        "Trip Cost",
        "Effective Cost",
        "Savings",
    ]);

    for (rank, route) in routes.iter().enumerate() {
        builder.push_record([
            format!("{}", rank + 1),
            route.strategy().label(),
            store_names(route.stores()),
            format!("{}", route.item_count()),
            format!("{}", route.total_cost()),
            format!("{}", route.trip_cost()),
            format!("{}", route.effective_cost()),
            format!("{}", route.savings()),
        ]);
    }

    let mut table = builder.build();

    table.with(Theme::from(Style::modern_rounded()));
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..8), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| ReportError::Io)
}

fn write_route_plan(
    out: &mut impl io::Write,
    rank: usize,
    route: &OptimizedRoute<'_>,
) -> Result<(), ReportError> {
    writeln!(out, "\n#{rank} {}", route.strategy()).map_err(|_err| ReportError::Io)?;

    for store in route.stores() {
        writeln!(
            out,
            "  {}: {} ({} item{})",
            store.retailer().display_name(),
            store.subtotal(),
            store.items().len(),
            if store.items().len() == 1 { "" } else { "s" }
        )
        .map_err(|_err| ReportError::Io)?;

        for item in store.items() {
            let unit_price = item
                .unit_price
                .map(|unit_price| format!(" [{unit_price}/oz]"))
                .unwrap_or_default();

            writeln!(
                out,
                "    {} x{} @ {}{unit_price}",
                item.name, item.quantity, item.price
            )
            .map_err(|_err| ReportError::Io)?;
        }
    }

    Ok(())
}

fn store_names(stores: &[StoreAssignment<'_>]) -> String {
    let names: SmallVec<[&str; 4]> = stores
        .iter()
        .map(|store| store.retailer().display_name())
        .collect();

    names.join(", ")
}
