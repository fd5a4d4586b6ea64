//! Category vocabulary and random item generation.
//!
//! Each food category maps to a fixed list of (key, allowed values)
//! pairs. Property values are chosen uniformly and independently per
//! key; a category outside the table falls back to a single
//! `Custom: "Unknown item"` property instead of failing.

use rand::Rng;

use crate::model::{ItemProperty, OrderItem};

/// The fixed set of food categories items are drawn from.
pub const CATEGORIES: [&str; 5] = ["Burger", "Pizza", "Shake", "Salad", "Pasta"];

/// One row of a category's vocabulary: a property key and the values it
/// may take.
struct PropertyRow {
    key: &'static str,
    values: &'static [&'static str],
}

const BURGER: &[PropertyRow] = &[
    PropertyRow { key: "Size", values: &["Small", "Large"] },
    PropertyRow { key: "Extras", values: &["Cheese", "Bacon", "Lettuce"] },
];

const PIZZA: &[PropertyRow] = &[
    PropertyRow { key: "Size", values: &["Small", "Medium", "Large"] },
    PropertyRow { key: "Toppings", values: &["Pepperoni", "Mushrooms", "Olives"] },
    PropertyRow { key: "Crust", values: &["Thin", "Thick"] },
];

const SHAKE: &[PropertyRow] = &[
    PropertyRow { key: "Flavor", values: &["Chocolate", "Vanilla", "Strawberry"] },
    PropertyRow { key: "Size", values: &["Small", "Medium", "Large"] },
];

const SALAD: &[PropertyRow] = &[
    PropertyRow { key: "Dressing", values: &["Ranch", "Caesar", "Balsamic"] },
    PropertyRow { key: "Protein", values: &["Chicken", "Tofu", "None"] },
];

const PASTA: &[PropertyRow] = &[
    PropertyRow { key: "Type", values: &["Spaghetti", "Fettuccine", "Penne"] },
    PropertyRow { key: "Sauce", values: &["Marinara", "Alfredo", "Pesto"] },
];

fn vocabulary(category: &str) -> Option<&'static [PropertyRow]> {
    match category {
        "Burger" => Some(BURGER),
        "Pizza" => Some(PIZZA),
        "Shake" => Some(SHAKE),
        "Salad" => Some(SALAD),
        "Pasta" => Some(PASTA),
        _ => None,
    }
}

/// Produces the random property set for a category.
///
/// Unrecognized categories yield exactly one `Custom` property rather
/// than an error.
pub fn properties_for(category: &str, rng: &mut impl Rng) -> Vec<ItemProperty> {
    match vocabulary(category) {
        Some(rows) => rows
            .iter()
            .map(|row| {
                let value = row.values[rng.gen_range(0..row.values.len())];
                ItemProperty::new(row.key, value)
            })
            .collect(),
        None => vec![ItemProperty::new("Custom", "Unknown item")],
    }
}

/// Picks a random category and attaches its random property set.
pub fn random_item(rng: &mut impl Rng) -> OrderItem {
    let name = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
    OrderItem {
        name: name.to_string(),
        properties: properties_for(name, rng),
    }
}

/// Builds the item list for one order: 1 to 3 items, duplicates allowed.
pub fn random_items(rng: &mut impl Rng) -> Vec<OrderItem> {
    let count = rng.gen_range(1..=3);
    (0..count).map(|_| random_item(rng)).collect()
}
