use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// Industry segment a sender compares against.
///
/// Serializes as its slug, so JSON output can be fed back to `FromStr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Industry {
    AllEcommerce,
    ApparelAndAccessories,
    FoodAndBeverage,
    HealthAndBeauty,
    Jewelry,
    Other,
}

impl Industry {
    /// Every industry, in selector order.
    pub const ALL: [Industry; 6] = [
        Industry::AllEcommerce,
        Industry::ApparelAndAccessories,
        Industry::FoodAndBeverage,
        Industry::HealthAndBeauty,
        Industry::Jewelry,
        Industry::Other,
    ];

    /// Human label, as published alongside the benchmarks.
    pub fn label(self) -> &'static str {
        match self {
            Industry::AllEcommerce => "All ecommerce",
            Industry::ApparelAndAccessories => "Apparel and accessories",
            Industry::FoodAndBeverage => "Food and beverage",
            Industry::HealthAndBeauty => "Health and beauty",
            Industry::Jewelry => "Jewelry",
            Industry::Other => "Other",
        }
    }

    /// Kebab-case slug for command lines and CSV files.
    pub fn slug(self) -> &'static str {
        match self {
            Industry::AllEcommerce => "all-ecommerce",
            Industry::ApparelAndAccessories => "apparel-and-accessories",
            Industry::FoodAndBeverage => "food-and-beverage",
            Industry::HealthAndBeauty => "health-and-beauty",
            Industry::Jewelry => "jewelry",
            Industry::Other => "other",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Industry {
    type Err = TableError;

    /// Accepts the label or the slug, case-insensitive. Spaces, dashes and
    /// underscores are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Industry::ALL
            .into_iter()
            .find(|industry| normalize(industry.slug()) == wanted)
            .ok_or_else(|| TableError::UnknownIndustry(s.trim().to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            ' ' | '_' => '-',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
