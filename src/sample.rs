//! Sample data set for trying the calculator without game data

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use crate::catalog::{ITEMS_FILE, RECIPES_FILE};
use crate::error::{CraftError, Result};
use crate::locales::{self, Language, LOCALES_DIR};
use crate::models::{Ingredient, Item, Recipe};

fn item(id: &str, value: f64) -> Item {
    Item {
        id: id.to_string(),
        label_key: format!("items.{}", id),
        sprite: format!("img/items/{}.png", id),
        value,
    }
}

fn ingredient(id: &str, quantity: u32) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        quantity,
    }
}

pub fn sample_items() -> Vec<Item> {
    vec![
        item("iron_ingot", 10.0),
        item("leather", 5.0),
        item("oak_plank", 2.5),
    ]
}

pub fn sample_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            label_key: "recipes.sword".to_string(),
            sprite: "img/recipes/sword.png".to_string(),
            level: 1,
            cooldown: 30.0,
            // gemstone is intentionally absent from the item list
            ingredients: vec![
                ingredient("iron_ingot", 2),
                ingredient("gemstone", 1),
                ingredient("leather", 3),
            ],
        },
        Recipe {
            label_key: "recipes.shield".to_string(),
            sprite: "img/recipes/shield.png".to_string(),
            level: 4,
            cooldown: 90.0,
            ingredients: vec![ingredient("oak_plank", 6), ingredient("iron_ingot", 1)],
        },
    ]
}

struct Strings {
    title: &'static str,
    level: &'static str,
    seconds: &'static str,
    fee: &'static str,
    error: &'static str,
    ingredients: &'static str,
    quantity: &'static str,
    sell_price: &'static str,
    revenue: &'static str,
    unit_cost: &'static str,
    total_cost: &'static str,
    profit: &'static str,
    names: [&'static str; 5], // sword, shield, iron_ingot, leather, oak_plank
}

fn strings(lang: Language) -> Strings {
    match lang {
        Language::Pt => Strings {
            title: "Calculadora de Criação",
            level: "Nível",
            seconds: "s",
            fee: "Taxa do mercado ({percent}%)",
            error: "Erro ao carregar os dados.",
            ingredients: "Ingredientes",
            quantity: "Quantidade",
            sell_price: "Preço de venda",
            revenue: "Receita bruta",
            unit_cost: "Custo unitário",
            total_cost: "Custo total",
            profit: "Lucro",
            names: ["Espada de Ferro", "Escudo", "Lingote de Ferro", "Couro", "Tábua de Carvalho"],
        },
        Language::En => Strings {
            title: "Crafting Calculator",
            level: "Level",
            seconds: "s",
            fee: "Marketplace fee ({percent}%)",
            error: "Failed to load data.",
            ingredients: "Ingredients",
            quantity: "Quantity",
            sell_price: "Sell price",
            revenue: "Gross revenue",
            unit_cost: "Unit cost",
            total_cost: "Total cost",
            profit: "Profit",
            names: ["Iron Sword", "Shield", "Iron Ingot", "Leather", "Oak Plank"],
        },
        Language::Es => Strings {
            title: "Calculadora de Fabricación",
            level: "Nivel",
            seconds: "s",
            fee: "Comisión del mercado ({percent}%)",
            error: "Error al cargar los datos.",
            ingredients: "Ingredientes",
            quantity: "Cantidad",
            sell_price: "Precio de venta",
            revenue: "Ingresos brutos",
            unit_cost: "Coste unitario",
            total_cost: "Coste total",
            profit: "Beneficio",
            names: ["Espada de Hierro", "Escudo", "Lingote de Hierro", "Cuero", "Tablón de Roble"],
        },
        Language::Pl => Strings {
            title: "Kalkulator Rzemiosła",
            level: "Poziom",
            seconds: " s",
            fee: "Opłata rynkowa ({percent}%)",
            error: "Nie udało się wczytać danych.",
            ingredients: "Składniki",
            quantity: "Ilość",
            sell_price: "Cena sprzedaży",
            revenue: "Przychód brutto",
            unit_cost: "Koszt jednostkowy",
            total_cost: "Koszt całkowity",
            profit: "Zysk",
            names: ["Żelazny Miecz", "Tarcza", "Sztabka Żelaza", "Skóra", "Deska Dębowa"],
        },
    }
}

pub fn sample_locale(lang: Language) -> Value {
    let s = strings(lang);
    let [sword, shield, iron, leather, plank] = s.names;
    json!({
        "app": { "title": s.title },
        "ui": {
            "levelLabel": s.level,
            "secondsSuffix": s.seconds,
            "feeLabel": s.fee,
            "loadingError": s.error,
            "ingredients": s.ingredients,
            "quantity": s.quantity,
            "sellPrice": s.sell_price,
            "revenue": s.revenue,
            "unitCost": s.unit_cost,
            "totalCost": s.total_cost,
            "profit": s.profit
        },
        "currency": { "berry": { "symbol": "Ƀ" } },
        "recipes": { "sword": sword, "shield": shield },
        "items": { "iron_ingot": iron, "leather": leather, "oak_plank": plank }
    })
}

fn write_pretty<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(|e| CraftError::json(path, e))?;
    fs::write(path, text).map_err(|e| CraftError::io(path, e))
}

/// Write items, recipes and all four locale files into `data_dir`
pub fn write_sample_data(data_dir: &Path) -> Result<()> {
    let locales_dir = data_dir.join(LOCALES_DIR);
    fs::create_dir_all(&locales_dir).map_err(|e| CraftError::io(&locales_dir, e))?;

    write_pretty(&data_dir.join(ITEMS_FILE), &sample_items())?;
    write_pretty(&data_dir.join(RECIPES_FILE), &sample_recipes())?;
    for lang in Language::ALL {
        write_pretty(&locales::locale_path(data_dir, lang), &sample_locale(lang))?;
    }

    tracing::info!("sample data written to {}", data_dir.display());
    Ok(())
}
