//! Recipe and item catalog loaded from static JSON data

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{CraftError, Result};
use crate::models::{Item, Recipe};

pub const RECIPES_FILE: &str = "recipes.json";
pub const ITEMS_FILE: &str = "items.json";

#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    recipes: Vec<Recipe>,
    items: HashMap<String, Item>,
}

impl CatalogStore {
    /// Build the store; a later item with a repeated id replaces the earlier one.
    pub fn from_parts(recipes: Vec<Recipe>, items: Vec<Item>) -> Self {
        let items = items.into_iter().map(|item| (item.id.clone(), item)).collect();
        Self { recipes, items }
    }

    /// Load `recipes.json` and `items.json` from `data_dir`
    pub fn load(data_dir: &Path) -> Result<Self> {
        let recipes: Vec<Recipe> = read_json(&data_dir.join(RECIPES_FILE))?;
        let items: Vec<Item> = read_json(&data_dir.join(ITEMS_FILE))?;
        tracing::info!(
            recipes = recipes.len(),
            items = items.len(),
            "catalog loaded from {}",
            data_dir.display()
        );
        Ok(Self::from_parts(recipes, items))
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn items(&self) -> &HashMap<String, Item> {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Find a recipe by 1-based position, full label key, or the last
    /// segment of its label key (case-insensitive).
    pub fn find_recipe(&self, selector: &str) -> Result<usize> {
        let selector = selector.trim();

        if let Ok(position) = selector.parse::<usize>() {
            if (1..=self.recipes.len()).contains(&position) {
                return Ok(position - 1);
            }
        }

        if let Some(index) = self.recipes.iter().position(|r| r.label_key == selector) {
            return Ok(index);
        }

        self.recipes
            .iter()
            .position(|r| {
                r.label_key
                    .rsplit('.')
                    .next()
                    .is_some_and(|last| last.eq_ignore_ascii_case(selector))
            })
            .ok_or_else(|| CraftError::RecipeNotFound {
                selector: selector.to_string(),
            })
    }

    pub fn recipe(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| CraftError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| CraftError::json(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    fn item(id: &str, value: f64) -> Item {
        Item {
            id: id.to_string(),
            label_key: format!("items.{}", id),
            sprite: String::new(),
            value,
        }
    }

    fn recipe(key: &str) -> Recipe {
        Recipe {
            label_key: key.to_string(),
            sprite: String::new(),
            level: 0,
            cooldown: 0.0,
            ingredients: vec![Ingredient {
                id: "wood".to_string(),
                quantity: 1,
            }],
        }
    }

    fn store() -> CatalogStore {
        CatalogStore::from_parts(
            vec![recipe("recipes.plank"), recipe("recipes.Chair")],
            vec![item("wood", 1.0), item("nail", 2.0), item("wood", 3.0)],
        )
    }

    #[test]
    fn duplicate_item_id_keeps_last() {
        let store = store();
        assert_eq!(store.items().len(), 2);
        assert_eq!(store.item("wood").map(|i| i.value), Some(3.0));
        assert!(store.item("stone").is_none());
    }

    #[test]
    fn find_recipe_by_position_key_or_name() {
        let store = store();
        assert_eq!(store.find_recipe("1").unwrap(), 0);
        assert_eq!(store.find_recipe("recipes.Chair").unwrap(), 1);
        assert_eq!(store.find_recipe("chair").unwrap(), 1);
        assert_eq!(store.find_recipe(" PLANK ").unwrap(), 0);
    }

    #[test]
    fn find_recipe_reports_unknown_selector() {
        let store = store();
        assert!(matches!(
            store.find_recipe("3"),
            Err(CraftError::RecipeNotFound { .. })
        ));
        assert!(store.find_recipe("table").is_err());
    }

    #[test]
    fn load_reads_both_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(RECIPES_FILE),
            r#"[{"labelKey":"recipes.plank","sprite":"p.png","level":1,"cooldown":10,
                "ingredients":[{"id":"wood","quantity":2}]}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(ITEMS_FILE),
            r#"[{"id":"wood","labelKey":"items.wood","sprite":"w.png","value":4}]"#,
        )
        .unwrap();

        let store = CatalogStore::load(dir.path()).unwrap();
        assert_eq!(store.recipes().len(), 1);
        assert_eq!(store.item("wood").map(|i| i.value), Some(4.0));
    }

    #[test]
    fn load_fails_on_missing_or_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(CatalogStore::load(dir.path()), Err(CraftError::Io { .. })));

        fs::write(dir.path().join(RECIPES_FILE), "[]").unwrap();
        fs::write(dir.path().join(ITEMS_FILE), "{ not json").unwrap();
        assert!(matches!(CatalogStore::load(dir.path()), Err(CraftError::Json { .. })));
    }
}
