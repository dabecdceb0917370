//! Supported languages and their translation files
//!
//! Each language lives in `<data_dir>/locales/<code>.json` as a nested
//! translation tree.

use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::catalog::read_json;
use crate::error::{CraftError, Result};
use crate::formatter::LocaleTag;
use crate::translator::TranslationTree;

pub const LOCALES_DIR: &str = "locales";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Language {
    #[default]
    Pt,
    En,
    Es,
    Pl,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::Pt, Language::En, Language::Es, Language::Pl];

    pub fn parse(code: &str) -> Result<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "pt" => Ok(Language::Pt),
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            "pl" => Ok(Language::Pl),
            _ => Err(CraftError::UnknownLanguage {
                code: code.to_string(),
            }),
        }
    }

    /// Parse a stored code, falling back to the default language.
    pub fn parse_or_default(code: Option<&str>) -> Self {
        code.and_then(|c| Self::parse(c).ok()).unwrap_or_default()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
            Language::Es => "es",
            Language::Pl => "pl",
        }
    }

    pub fn locale_tag(&self) -> LocaleTag {
        LocaleTag::for_language(self.code())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub fn locale_path(data_dir: &Path, lang: Language) -> PathBuf {
    data_dir.join(LOCALES_DIR).join(format!("{}.json", lang.code()))
}

/// Read the full translation tree for `lang`
pub fn load_locale(data_dir: &Path, lang: Language) -> Result<TranslationTree> {
    let path = locale_path(data_dir, lang);
    let tree: TranslationTree = read_json(&path)?;
    tracing::info!("loaded locale {} from {}", lang, path.display());
    Ok(tree)
}

/// Find which supported languages have a locale file under `data_dir`
pub fn discover(data_dir: &Path) -> Result<Vec<Language>> {
    let dir = data_dir.join(LOCALES_DIR);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(&dir).max_depth(1).follow_links(true) {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");
        match Language::parse(stem) {
            Ok(lang) => found.push(lang),
            Err(_) => tracing::debug!("ignoring unsupported locale file {}", path.display()),
        }
    }

    found.sort();
    found.dedup();
    Ok(found)
}
