//! Data models for craftable recipes, items and pricing results

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub label_key: String,
    pub sprite: String,
    pub value: f64, // Marketplace value of one unit
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    pub quantity: u32, // Consumed per single unit of output
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub label_key: String,
    pub sprite: String,
    pub level: u32,
    pub cooldown: f64, // Seconds
    pub ingredients: Vec<Ingredient>,
}

/// One resolved ingredient scaled to the requested batch
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientLine {
    pub id: String,
    pub display_quantity: u64,
    pub display_cost: f64,
}

/// Result of pricing a batch of one recipe
#[derive(Debug, Clone, PartialEq)]
pub struct PricingResult {
    pub quantity: u32,
    pub sell_price: f64,
    pub revenue: f64,
    pub unit_cost: f64,
    pub total_cost: f64,
    pub fee: f64,
    pub profit: f64,
    pub per_ingredient: Vec<IngredientLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitClass {
    Positive,
    Negative,
    Neutral,
}

impl ProfitClass {
    pub fn of(profit: f64) -> Self {
        if profit > 0.0 {
            ProfitClass::Positive
        } else if profit < 0.0 {
            ProfitClass::Negative
        } else {
            ProfitClass::Neutral
        }
    }
}

impl PricingResult {
    pub fn classification(&self) -> ProfitClass {
        ProfitClass::of(self.profit)
    }
}
