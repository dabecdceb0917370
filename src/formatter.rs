//! Locale-aware currency formatting

use num_format::{Locale, ToFormattedString};

use crate::translator::Translator;

/// Translation path holding the currency glyph
pub const CURRENCY_SYMBOL_KEY: &str = "currency.berry.symbol";
pub const FALLBACK_SYMBOL: &str = "Ƀ";

/// Number formatting locales the calculator renders in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleTag {
    PtBr,
    EnUs,
    EsEs,
    PlPl,
}

impl LocaleTag {
    /// Map a language code to its locale tag, `en-US` for anything unknown.
    pub fn for_language(code: &str) -> Self {
        match code {
            "pt" => LocaleTag::PtBr,
            "en" => LocaleTag::EnUs,
            "es" => LocaleTag::EsEs,
            "pl" => LocaleTag::PlPl,
            _ => LocaleTag::EnUs,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LocaleTag::PtBr => "pt-BR",
            LocaleTag::EnUs => "en-US",
            LocaleTag::EsEs => "es-ES",
            LocaleTag::PlPl => "pl-PL",
        }
    }

    fn num_locale(&self) -> Locale {
        match self {
            LocaleTag::PtBr => Locale::pt,
            LocaleTag::EnUs => Locale::en,
            LocaleTag::EsEs => Locale::es,
            LocaleTag::PlPl => Locale::pl,
        }
    }

    // es-ES and pl-PL leave four-digit integers ungrouped
    fn groups_from(&self) -> u64 {
        match self {
            LocaleTag::EnUs | LocaleTag::PtBr => 1_000,
            LocaleTag::EsEs | LocaleTag::PlPl => 10_000,
        }
    }
}

/// Format `amount` with exactly two fraction digits in `locale`'s conventions.
///
/// Non-finite input formats as zero. Cents are rounded half away from zero
/// on the binary value, so an amount whose decimal form ends in exactly
/// half a cent (e.g. 1.005) may land one cent away from a formatter that
/// rounds the decimal text.
pub fn format_number(amount: f64, locale: LocaleTag) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let cents = (amount.abs() * 100.0).round() as u64;
    let negative = amount < 0.0 && cents > 0;

    let loc = locale.num_locale();
    let whole = cents / 100;
    let grouped = if whole >= locale.groups_from() {
        whole.to_formatted_string(&loc)
    } else {
        whole.to_string()
    };

    let sign = if negative { "-" } else { "" };
    format!("{}{}{}{:02}", sign, grouped, loc.decimal(), cents % 100)
}

/// Format `amount` as `"{symbol} {number}"`.
pub fn format_currency(amount: f64, locale: LocaleTag, symbol: &str) -> String {
    format!("{} {}", symbol, format_number(amount, locale))
}

/// Currency formatter bound to the active language
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    locale: LocaleTag,
    symbol: String,
}

impl CurrencyFormatter {
    pub fn new(locale: LocaleTag, symbol: impl Into<String>) -> Self {
        Self {
            locale,
            symbol: symbol.into(),
        }
    }

    /// Build from the loaded translations, falling back to the default glyph.
    pub fn from_translations(locale: LocaleTag, translator: &Translator) -> Self {
        let symbol = translator
            .get(CURRENCY_SYMBOL_KEY)
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_SYMBOL);
        Self::new(locale, symbol)
    }

    pub fn format(&self, amount: f64) -> String {
        format_currency(amount, self.locale, &self.symbol)
    }
}
