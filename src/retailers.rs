//! Retailers

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Errors related to retailer identifiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RetailerError {
    /// The identifier does not name a known retailer.
    #[error("Unknown retailer: {0}")]
    Unknown(String),
}

/// A known retailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Retailer {
    /// Amazon
    Amazon,
    /// Walmart
    Walmart,
    /// Target
    Target,
    /// Costco
    Costco,
    /// Kroger
    Kroger,
    /// Whole Foods
    WholeFoods,
    /// Publix
    Publix,
    /// H-E-B
    Heb,
    /// Wegmans
    Wegmans,
    /// Aldi
    Aldi,
    /// Trader Joe's
    TraderJoes,
}

/// Where a retailer operates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Available in every region.
    National,

    /// Available only in the listed state codes.
    Regional(&'static [&'static str]),
}

/// Static configuration for a retailer.
#[derive(Debug, Clone, Copy)]
pub struct RetailerConfig {
    /// Retailer identity
    pub retailer: Retailer,

    /// Human readable name
    pub display_name: &'static str,

    /// Service area
    pub availability: Availability,
}

/// Number of known retailers.
pub const RETAILER_COUNT: usize = 11;

const WALMART: RetailerConfig = RetailerConfig {
    retailer: Retailer::Walmart,
    display_name: "Walmart",
    availability: Availability::National,
};

const TARGET: RetailerConfig = RetailerConfig {
    retailer: Retailer::Target,
    display_name: "Target",
    availability: Availability::National,
};

const AMAZON: RetailerConfig = RetailerConfig {
    retailer: Retailer::Amazon,
    display_name: "Amazon",
    availability: Availability::National,
};

const COSTCO: RetailerConfig = RetailerConfig {
    retailer: Retailer::Costco,
    display_name: "Costco",
    availability: Availability::National,
};

const KROGER: RetailerConfig = RetailerConfig {
    retailer: Retailer::Kroger,
    display_name: "Kroger",
    availability: Availability::National,
};

const WHOLE_FOODS: RetailerConfig = RetailerConfig {
    retailer: Retailer::WholeFoods,
    display_name: "Whole Foods",
    availability: Availability::National,
};

const PUBLIX: RetailerConfig = RetailerConfig {
    retailer: Retailer::Publix,
    display_name: "Publix",
    availability: Availability::Regional(&["FL", "GA", "AL", "SC", "TN", "NC", "VA"]),
};

const HEB: RetailerConfig = RetailerConfig {
    retailer: Retailer::Heb,
    display_name: "H-E-B",
    availability: Availability::Regional(&["TX"]),
};

const WEGMANS: RetailerConfig = RetailerConfig {
    retailer: Retailer::Wegmans,
    display_name: "Wegmans",
    availability: Availability::Regional(&["NY", "PA", "NJ", "VA", "MD", "MA", "NC", "DE"]),
};

const ALDI: RetailerConfig = RetailerConfig {
    retailer: Retailer::Aldi,
    display_name: "Aldi",
    availability: Availability::Regional(&[
        "IL", "IN", "OH", "PA", "NY", "MI", "WI", "IA", "MO", "MN", "GA", "FL", "NC", "SC", "VA",
        "MD", "NJ", "CT", "KS", "NE", "NH", "KY", "TN", "AL", "OK", "WV", "DE", "SD", "ND", "LA",
        "AR",
    ]),
};

const TRADER_JOES: RetailerConfig = RetailerConfig {
    retailer: Retailer::TraderJoes,
    display_name: "Trader Joe's",
    availability: Availability::National,
};

/// Retailer configurations in roster order.
pub const RETAILERS: [RetailerConfig; RETAILER_COUNT] = [
    WALMART,
    TARGET,
    AMAZON,
    COSTCO,
    KROGER,
    WHOLE_FOODS,
    PUBLIX,
    HEB,
    WEGMANS,
    ALDI,
    TRADER_JOES,
];

/// A roster of retailers, in roster order.
pub type Roster = SmallVec<[Retailer; RETAILER_COUNT]>;

impl Retailer {
    /// Identifier used in fixtures and serialised output.
    pub fn id(self) -> &'static str {
        match self {
            Retailer::Amazon => "amazon",
            Retailer::Walmart => "walmart",
            Retailer::Target => "target",
            Retailer::Costco => "costco",
            Retailer::Kroger => "kroger",
            Retailer::WholeFoods => "wholefoods",
            Retailer::Publix => "publix",
            Retailer::Heb => "heb",
            Retailer::Wegmans => "wegmans",
            Retailer::Aldi => "aldi",
            Retailer::TraderJoes => "traderjoes",
        }
    }

    /// Static configuration for this retailer.
    pub fn config(self) -> &'static RetailerConfig {
        match self {
            Retailer::Amazon => &AMAZON,
            Retailer::Walmart => &WALMART,
            Retailer::Target => &TARGET,
            Retailer::Costco => &COSTCO,
            Retailer::Kroger => &KROGER,
            Retailer::WholeFoods => &WHOLE_FOODS,
            Retailer::Publix => &PUBLIX,
            Retailer::Heb => &HEB,
            Retailer::Wegmans => &WEGMANS,
            Retailer::Aldi => &ALDI,
            Retailer::TraderJoes => &TRADER_JOES,
        }
    }

    /// Human readable name, e.g. "Whole Foods".
    pub fn display_name(self) -> &'static str {
        self.config().display_name
    }

    /// Whether the retailer serves the given state code.
    pub fn serves(self, region: &str) -> bool {
        match self.config().availability {
            Availability::National => true,
            Availability::Regional(states) => {
                let region = region.trim();

                states.iter().any(|state| state.eq_ignore_ascii_case(region))
            }
        }
    }
}

impl fmt::Display for Retailer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Retailer {
    type Err = RetailerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();

        RETAILERS
            .iter()
            .map(|config| config.retailer)
            .find(|retailer| retailer.id().eq_ignore_ascii_case(needle))
            .ok_or_else(|| RetailerError::Unknown(s.to_string()))
    }
}

/// Returns the retailers eligible for a region, in roster order.
///
/// National retailers are always included. Regional retailers are included only when
/// `region` (a state code, case-insensitive) is in their service list.
pub fn available_retailers(region: Option<&str>) -> Roster {
    RETAILERS
        .iter()
        .filter(|config| match config.availability {
            Availability::National => true,
            Availability::Regional(_) => region.is_some_and(|r| config.retailer.serves(r)),
        })
        .map(|config| config.retailer)
        .collect()
}
