//! Session state: catalog, active language and selected recipe
//!
//! `Session` is the single owner of everything that changes while the
//! calculator runs. Pricing is recomputed from scratch for every panel.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::calculator::{self, FEE_PERCENT};
use crate::catalog::CatalogStore;
use crate::error::{CraftError, Result};
use crate::formatter::CurrencyFormatter;
use crate::input::InputParser;
use crate::locales::{self, Language};
use crate::models::Recipe;
use crate::translator::Translator;
use crate::view::{IngredientRow, PanelLabels, PanelView, RecipeEntry};

/// Startup failed; `message` is the localized loading error.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StartupError {
    pub message: String,
    #[source]
    pub source: CraftError,
}

pub struct Session {
    data_dir: PathBuf,
    catalog: CatalogStore,
    translator: Translator,
    formatter: CurrencyFormatter,
    language: Option<Language>,
    selected: Option<usize>,
    parser: InputParser,
}

impl Session {
    /// Load the locale for `language`, then the catalog.
    pub fn start(data_dir: &Path, language: Language) -> std::result::Result<Self, StartupError> {
        let fail = |translator: &Translator, source: CraftError| {
            tracing::debug!("startup failed: {}", source);
            StartupError {
                message: translator.t("ui.loadingError"),
                source,
            }
        };

        let parser = InputParser::new().map_err(|e| fail(&Translator::unloaded(), e))?;
        let translator = Translator::unloaded();
        let mut session = Self {
            data_dir: data_dir.to_path_buf(),
            catalog: CatalogStore::default(),
            formatter: CurrencyFormatter::from_translations(language.locale_tag(), &translator),
            translator,
            language: None,
            selected: None,
            parser,
        };

        session
            .switch_language(language)
            .map_err(|e| fail(&session.translator, e))?;
        session.catalog = CatalogStore::load(data_dir).map_err(|e| fail(&session.translator, e))?;
        Ok(session)
    }

    /// Language of the loaded translations; `None` only while starting.
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn title(&self) -> String {
        self.translator.t("app.title")
    }

    /// Replace the translation tree with the one for `language`.
    ///
    /// Returns `false` when `language` is already active. On a load error the
    /// previous language stays in place.
    pub fn switch_language(&mut self, language: Language) -> Result<bool> {
        if self.language == Some(language) {
            return Ok(false);
        }

        let tree = locales::load_locale(&self.data_dir, language)?;
        self.translator = Translator::new(tree);
        self.formatter = CurrencyFormatter::from_translations(language.locale_tag(), &self.translator);
        self.language = Some(language);
        tracing::info!("switched language to {}", language);
        Ok(true)
    }

    pub fn select_recipe(&mut self, selector: &str) -> Result<&Recipe> {
        let index = self.catalog.find_recipe(selector)?;
        self.selected = Some(index);
        self.catalog.recipe(index).ok_or_else(|| CraftError::RecipeNotFound {
            selector: selector.to_string(),
        })
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.selected.and_then(|i| self.catalog.recipe(i))
    }

    fn seconds(&self, cooldown: f64) -> String {
        format!("{}{}", cooldown, self.translator.t("ui.secondsSuffix"))
    }

    fn level(&self, level: u32) -> String {
        format!("{} {}", self.translator.t("ui.levelLabel"), level)
    }

    pub fn recipe_list(&self) -> Vec<RecipeEntry> {
        self.catalog
            .recipes()
            .iter()
            .enumerate()
            .map(|(i, recipe)| RecipeEntry {
                position: i + 1,
                name: self.translator.t(&recipe.label_key),
                sprite: recipe.sprite.clone(),
                meta: format!("{} — {}", self.level(recipe.level), self.seconds(recipe.cooldown)),
            })
            .collect()
    }

    fn labels(&self) -> PanelLabels {
        let t = &self.translator;
        PanelLabels {
            ingredients: t.t("ui.ingredients"),
            quantity: t.t("ui.quantity"),
            sell_price: t.t("ui.sellPrice"),
            revenue: t.t("ui.revenue"),
            unit_cost: t.t("ui.unitCost"),
            total_cost: t.t("ui.totalCost"),
            fee: t.t_with("ui.feeLabel", &[("percent", &FEE_PERCENT)]),
            profit: t.t("ui.profit"),
        }
    }

    /// Price the selected recipe for the raw quantity and sell price text.
    ///
    /// Returns `None` when no recipe is selected.
    pub fn panel(&self, quantity_raw: &str, sell_price_raw: &str) -> Option<PanelView> {
        let recipe = self.selected()?;
        let quantity = self.parser.parse_int(quantity_raw);
        let sell_price = self.parser.parse_decimal(sell_price_raw);
        let pricing = calculator::compute_pricing(recipe, self.catalog.items(), quantity, sell_price);

        let ingredients = pricing
            .per_ingredient
            .iter()
            .filter_map(|line| {
                let item = self.catalog.item(&line.id)?;
                Some(IngredientRow {
                    name: self.translator.t(&item.label_key),
                    sprite: item.sprite.clone(),
                    quantity: format!("× {}", line.display_quantity),
                    cost: self.formatter.format(line.display_cost),
                })
            })
            .collect();

        let fmt = &self.formatter;
        Some(PanelView {
            name: self.translator.t(&recipe.label_key),
            sprite: recipe.sprite.clone(),
            level: self.level(recipe.level),
            cooldown: self.seconds(recipe.cooldown),
            ingredients,
            quantity: pricing.quantity,
            sell_price: fmt.format(pricing.sell_price),
            revenue: fmt.format(pricing.revenue),
            unit_cost: fmt.format(pricing.unit_cost),
            total_cost: fmt.format(pricing.total_cost),
            fee: fmt.format(pricing.fee),
            profit: fmt.format(pricing.profit),
            profit_class: pricing.classification(),
            labels: self.labels(),
        })
    }
}
