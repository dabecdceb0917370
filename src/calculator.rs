//! Crafting cost, marketplace fee and profit calculation

use std::collections::HashMap;

use crate::models::{IngredientLine, Item, PricingResult, Recipe};

pub const MIN_QUANTITY: u32 = 1;
pub const MAX_QUANTITY: u32 = 100;

/// Marketplace fee charged on gross batch revenue
pub const FEE_RATE: f64 = 0.03;
pub const FEE_PERCENT: u32 = 3;

/// Clamp a raw batch quantity into `[MIN_QUANTITY, MAX_QUANTITY]`.
///
/// Non-finite values and anything below 1 become 1; fractions truncate.
pub fn normalize_quantity(raw: f64) -> u32 {
    if !raw.is_finite() || raw < MIN_QUANTITY as f64 {
        MIN_QUANTITY
    } else if raw > MAX_QUANTITY as f64 {
        MAX_QUANTITY
    } else {
        raw.trunc() as u32
    }
}

/// Non-finite and negative prices are treated as zero.
pub fn normalize_sell_price(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 { raw } else { 0.0 }
}

/// Round to the nearest integer, ties toward positive infinity.
pub fn round_currency(value: f64) -> f64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded + 0.0 // no negative zero
}

/// Price a batch of `quantity` units of `recipe` sold at `sell_price` each.
///
/// Ingredients whose item is missing from `items` are skipped and add
/// nothing to the cost.
pub fn compute_pricing(
    recipe: &Recipe,
    items: &HashMap<String, Item>,
    quantity: f64,
    sell_price: f64,
) -> PricingResult {
    let quantity = normalize_quantity(quantity);
    let sell_price = normalize_sell_price(sell_price);
    let batch = quantity as f64;

    let mut unit_cost = 0.0;
    let mut per_ingredient = Vec::with_capacity(recipe.ingredients.len());

    for ingredient in &recipe.ingredients {
        let Some(item) = items.get(&ingredient.id) else {
            tracing::debug!(
                "skipping ingredient '{}' of '{}': not in catalog",
                ingredient.id,
                recipe.label_key
            );
            continue;
        };

        let line_cost = item.value * ingredient.quantity as f64;
        unit_cost += line_cost;

        per_ingredient.push(IngredientLine {
            id: ingredient.id.clone(),
            display_quantity: ingredient.quantity as u64 * quantity as u64,
            display_cost: line_cost * batch,
        });
    }

    let total_cost = unit_cost * batch;
    let revenue = sell_price * batch;
    let fee = round_currency(revenue * FEE_RATE);
    let profit = round_currency(revenue - total_cost - fee);

    PricingResult {
        quantity,
        sell_price,
        revenue,
        unit_cost,
        total_cost,
        fee,
        profit,
        per_ingredient,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ingredient, ProfitClass};
    use proptest::prelude::*;

    fn item(id: &str, value: f64) -> Item {
        Item {
            id: id.to_string(),
            label_key: format!("items.{}", id),
            sprite: format!("img/{}.png", id),
            value,
        }
    }

    fn catalog() -> HashMap<String, Item> {
        [item("A", 10.0), item("B", 5.0)]
            .into_iter()
            .map(|i| (i.id.clone(), i))
            .collect()
    }

    fn recipe(ingredients: &[(&str, u32)]) -> Recipe {
        Recipe {
            label_key: "recipes.R".to_string(),
            sprite: "img/R.png".to_string(),
            level: 1,
            cooldown: 30.0,
            ingredients: ingredients
                .iter()
                .map(|(id, quantity)| Ingredient {
                    id: id.to_string(),
                    quantity: *quantity,
                })
                .collect(),
        }
    }

    #[test]
    fn worked_example() {
        let result = compute_pricing(&recipe(&[("A", 2), ("B", 3)]), &catalog(), 4.0, 100.0);
        assert_eq!(result.unit_cost, 35.0);
        assert_eq!(result.total_cost, 140.0);
        assert_eq!(result.fee, 12.0);
        assert_eq!(result.profit, 248.0);
        assert_eq!(result.classification(), ProfitClass::Positive);

        assert_eq!(
            result.per_ingredient,
            vec![
                IngredientLine { id: "A".to_string(), display_quantity: 8, display_cost: 80.0 },
                IngredientLine { id: "B".to_string(), display_quantity: 12, display_cost: 60.0 },
            ]
        );
    }

    #[test]
    fn unresolved_ingredient_is_skipped() {
        let result = compute_pricing(&recipe(&[("A", 2), ("C", 9), ("B", 3)]), &catalog(), 1.0, 0.0);
        assert_eq!(result.unit_cost, 35.0);
        let ids: Vec<_> = result.per_ingredient.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["A", "B"]);
    }

    #[test]
    fn quantity_is_clamped() {
        assert_eq!(normalize_quantity(-5.0), 1);
        assert_eq!(normalize_quantity(0.0), 1);
        assert_eq!(normalize_quantity(500.0), 100);
        assert_eq!(normalize_quantity(f64::NAN), 1);
        assert_eq!(normalize_quantity(f64::INFINITY), 1);
        assert_eq!(normalize_quantity(42.0), 42);
        assert_eq!(normalize_quantity(7.9), 7);
    }

    #[test]
    fn sell_price_defaults_to_zero() {
        assert_eq!(normalize_sell_price(f64::NAN), 0.0);
        assert_eq!(normalize_sell_price(-10.0), 0.0);
        assert_eq!(normalize_sell_price(12.5), 12.5);
    }

    #[test]
    fn rounding_ties_go_up() {
        assert_eq!(round_currency(2.5), 3.0);
        assert_eq!(round_currency(2.4), 2.0);
        assert_eq!(round_currency(-2.5), -2.0);
        assert_eq!(round_currency(-2.6), -3.0);
        assert!(round_currency(-0.4).is_sign_positive());
    }

    #[test]
    fn loss_and_break_even() {
        let r = recipe(&[("A", 2), ("B", 3)]);
        let loss = compute_pricing(&r, &catalog(), 1.0, 10.0);
        assert_eq!(loss.fee, 0.0);
        assert_eq!(loss.profit, -25.0);
        assert_eq!(loss.classification(), ProfitClass::Negative);

        let empty = compute_pricing(&recipe(&[]), &catalog(), 3.0, 0.0);
        assert_eq!(empty.profit, 0.0);
        assert_eq!(empty.classification(), ProfitClass::Neutral);
    }

    #[test]
    fn fee_is_rounded_on_gross_revenue() {
        // 7 * 3 * 0.03 = 0.63
        let result = compute_pricing(&recipe(&[]), &catalog(), 3.0, 7.0);
        assert_eq!(result.revenue, 21.0);
        assert_eq!(result.fee, 1.0);
        assert_eq!(result.profit, 20.0);
    }

    proptest! {
        #[test]
        fn clamped_quantity_stays_in_range(raw in proptest::num::f64::ANY) {
            let q = normalize_quantity(raw);
            prop_assert!((MIN_QUANTITY..=MAX_QUANTITY).contains(&q));
        }

        #[test]
        fn in_range_quantities_pass_through(q in 1u32..=100) {
            prop_assert_eq!(normalize_quantity(q as f64), q);
        }

        #[test]
        fn totals_follow_the_formulas(
            a in 0u32..1000,
            b in 0u32..1000,
            qa in 1u32..20,
            qb in 1u32..20,
            quantity in 1u32..=100,
            price in 0u32..100_000,
        ) {
            let mut items = HashMap::new();
            items.insert("A".to_string(), item("A", a as f64));
            items.insert("B".to_string(), item("B", b as f64));
            let r = recipe(&[("A", qa), ("B", qb), ("missing", 5)]);
            let result = compute_pricing(&r, &items, quantity as f64, price as f64);

            let unit = (a * qa + b * qb) as f64;
            let batch = quantity as f64;
            let price = price as f64;
            prop_assert_eq!(result.unit_cost, unit);
            prop_assert_eq!(result.total_cost, unit * batch);
            prop_assert_eq!(result.fee, round_currency(price * batch * FEE_RATE));
            prop_assert_eq!(result.profit, round_currency(price * batch - unit * batch - result.fee));
            prop_assert_eq!(result.per_ingredient.len(), 2);

            let class = result.classification();
            prop_assert_eq!(class == ProfitClass::Positive, result.profit > 0.0);
            prop_assert_eq!(class == ProfitClass::Negative, result.profit < 0.0);
            prop_assert_eq!(class == ProfitClass::Neutral, result.profit == 0.0);
        }
    }
}
