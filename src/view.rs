//! Render-ready view data and its terminal output

use std::fmt;

use crate::models::ProfitClass;

/// One line of the localized recipe list
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeEntry {
    pub position: usize,
    pub name: String,
    pub sprite: String,
    pub meta: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientRow {
    pub name: String,
    pub sprite: String,
    pub quantity: String,
    pub cost: String,
}

/// Labels for the pricing panel in the active language
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLabels {
    pub ingredients: String,
    pub quantity: String,
    pub sell_price: String,
    pub revenue: String,
    pub unit_cost: String,
    pub total_cost: String,
    pub fee: String,
    pub profit: String,
}

/// Everything shown for the selected recipe
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub name: String,
    pub sprite: String,
    pub level: String,
    pub cooldown: String,
    pub ingredients: Vec<IngredientRow>,
    pub quantity: u32,
    pub sell_price: String,
    pub revenue: String,
    pub unit_cost: String,
    pub total_cost: String,
    pub fee: String,
    pub profit: String,
    pub profit_class: ProfitClass,
    pub labels: PanelLabels,
}

impl ProfitClass {
    fn marker(&self) -> &'static str {
        match self {
            ProfitClass::Positive => "▲",
            ProfitClass::Negative => "▼",
            ProfitClass::Neutral => "=",
        }
    }
}

impl fmt::Display for RecipeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}. {:<30} {:<24} [{}]", self.position, self.name, self.meta, self.sprite)
    }
}

impl fmt::Display for PanelView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} === [{}]", self.name, self.sprite)?;
        writeln!(f, "{} | {}", self.level, self.cooldown)?;
        writeln!(f)?;

        writeln!(f, "{}:", self.labels.ingredients)?;
        for row in &self.ingredients {
            writeln!(
                f,
                "  {:<24} {:>8} {:>16}  [{}]",
                row.name, row.quantity, row.cost, row.sprite
            )?;
        }
        writeln!(f)?;

        let l = &self.labels;
        writeln!(f, "  {:<22} {:>16}", l.quantity, self.quantity)?;
        writeln!(f, "  {:<22} {:>16}", l.sell_price, self.sell_price)?;
        writeln!(f, "  {:<22} {:>16}", l.revenue, self.revenue)?;
        writeln!(f, "  {:<22} {:>16}", l.unit_cost, self.unit_cost)?;
        writeln!(f, "  {:<22} {:>16}", l.total_cost, self.total_cost)?;
        writeln!(f, "  {:<22} {:>16}", l.fee, self.fee)?;
        writeln!(
            f,
            "  {:<22} {:>16} {}",
            l.profit,
            self.profit,
            self.profit_class.marker()
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_entry_line() {
        let entry = RecipeEntry {
            position: 2,
            name: "Sword".to_string(),
            sprite: "img/sword.png".to_string(),
            meta: "Level 3 — 45s".to_string(),
        };
        let line = entry.to_string();
        assert!(line.starts_with("  2. Sword"));
        assert!(line.contains("Level 3 — 45s"));
        assert!(line.ends_with("[img/sword.png]"));
    }

    #[test]
    fn panel_marks_profit_class() {
        let labels = PanelLabels {
            ingredients: "Ingredients".to_string(),
            quantity: "Quantity".to_string(),
            sell_price: "Sell price".to_string(),
            revenue: "Revenue".to_string(),
            unit_cost: "Unit cost".to_string(),
            total_cost: "Total cost".to_string(),
            fee: "Fee (3%)".to_string(),
            profit: "Profit".to_string(),
        };
        let panel = PanelView {
            name: "Sword".to_string(),
            sprite: String::new(),
            level: "Level 1".to_string(),
            cooldown: "30s".to_string(),
            ingredients: Vec::new(),
            quantity: 1,
            sell_price: "B 1.00".to_string(),
            revenue: "B 1.00".to_string(),
            unit_cost: "B 5.00".to_string(),
            total_cost: "B 5.00".to_string(),
            fee: "B 0.00".to_string(),
            profit: "B -4.00".to_string(),
            profit_class: ProfitClass::Negative,
            labels,
        };
        let text = panel.to_string();
        assert!(text.starts_with("=== Sword === []"));
        assert!(text.contains("Fee (3%)"));
        assert!(text.trim_end().ends_with("B -4.00 ▼"));
    }
}
