//! Preference database schema and operations

use rusqlite::{Connection, OptionalExtension};

use crate::error::Result;
use crate::locales::Language;

/// Key the active language is stored under
pub const LANGUAGE_KEY: &str = "lang";

/// Initialize the database schema
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS preferences (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

pub fn get_preference(conn: &Connection, key: &str) -> Result<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM preferences WHERE key = ?1", [key], |row| row.get(0))
        .optional()?;
    Ok(value)
}

/// Insert or replace a preference
pub fn set_preference(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)",
        (key, value),
    )?;
    Ok(())
}

/// Stored language, or the default when absent or unrecognized
pub fn load_language(conn: &Connection) -> Result<Language> {
    let stored = get_preference(conn, LANGUAGE_KEY)?;
    let lang = Language::parse_or_default(stored.as_deref());
    if let Some(code) = stored.as_deref().filter(|c| Language::parse(c).is_err()) {
        tracing::warn!("ignoring stored language '{}', using {}", code, lang);
    }
    Ok(lang)
}

pub fn store_language(conn: &Connection, lang: Language) -> Result<()> {
    set_preference(conn, LANGUAGE_KEY, lang.code())
}
