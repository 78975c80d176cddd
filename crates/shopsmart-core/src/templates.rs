//! Fixed templates for bulk-loading the list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CartError;

const ESSENTIALS: &[&str] = &[
    "Milk",
    "Bread",
    "Eggs",
    "Cheese",
    "Butter",
    "Chicken",
    "Ground Beef",
    "Rice",
    "Pasta",
    "Onions",
    "Garlic",
    "Salt",
];

const PRODUCE: &[&str] = &[
    "Bananas",
    "Apples",
    "Oranges",
    "Grapes",
    "Lettuce",
    "Tomatoes",
    "Carrots",
    "Broccoli",
    "Potatoes",
    "Bell Peppers",
];

const BBQ: &[&str] = &[
    "Burger Patties",
    "Hot Dogs",
    "Buns",
    "Ketchup",
    "Mustard",
    "Cheese Slices",
    "Lettuce",
    "Tomatoes",
    "Pickles",
    "Chips",
    "Soda",
    "Beer",
    "Charcoal",
    "BBQ Sauce",
    "Aluminum Foil",
];

const BREAKFAST: &[&str] = &[
    "Eggs",
    "Bacon",
    "Sausage",
    "Pancake Mix",
    "Syrup",
    "Orange Juice",
    "Coffee",
    "Cereal",
];

const SNACKS: &[&str] = &[
    "Chips",
    "Cookies",
    "Crackers",
    "Popcorn",
    "Candy",
    "Nuts",
    "Granola Bars",
    "Fruit Snacks",
    "Pretzels",
    "Ice Cream",
];

const HEALTHY: &[&str] = &[
    "Salad Mix",
    "Chicken Breast",
    "Salmon",
    "Quinoa",
    "Greek Yogurt",
    "Almonds",
    "Avocado",
    "Spinach",
    "Blueberries",
    "Sweet Potatoes",
    "Olive Oil",
    "Green Tea",
];

/// A named, ordered list of item names that replaces the current list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    Essentials,
    Produce,
    Bbq,
    Breakfast,
    Snacks,
    Healthy,
}

impl Template {
    /// Every template, in catalog order.
    pub const ALL: [Template; 6] = [
        Template::Essentials,
        Template::Produce,
        Template::Bbq,
        Template::Breakfast,
        Template::Snacks,
        Template::Healthy,
    ];

    /// Stable lowercase key used on the command line and in JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Essentials => "essentials",
            Self::Produce => "produce",
            Self::Bbq => "bbq",
            Self::Breakfast => "breakfast",
            Self::Snacks => "snacks",
            Self::Healthy => "healthy",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Essentials => "Essentials",
            Self::Produce => "Produce",
            Self::Bbq => "BBQ Party",
            Self::Breakfast => "Breakfast",
            Self::Snacks => "Snacks",
            Self::Healthy => "Healthy",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Essentials => "\u{1F95B}", // 🥛
            Self::Produce => "\u{1F96C}",    // 🥬
            Self::Bbq => "\u{1F354}",        // 🍔
            Self::Breakfast => "\u{1F95E}",  // 🥞
            Self::Snacks => "\u{1F37F}",     // 🍿
            Self::Healthy => "\u{1F957}",    // 🥗
        }
    }

    /// Item names in load order.
    pub fn items(&self) -> &'static [&'static str] {
        match self {
            Self::Essentials => ESSENTIALS,
            Self::Produce => PRODUCE,
            Self::Bbq => BBQ,
            Self::Breakfast => BREAKFAST,
            Self::Snacks => SNACKS,
            Self::Healthy => HEALTHY,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Template {
    type Err = CartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|template| template.key() == wanted)
            .ok_or_else(|| CartError::UnknownTemplate(value.trim().to_string()))
    }
}
