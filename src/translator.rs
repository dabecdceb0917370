//! Dotted key path lookup against a loaded translation tree

use std::fmt::Display;

use serde_json::{Map, Value};

/// Nested key -> string structure for one language
pub type TranslationTree = Map<String, Value>;

/// Resolve `key_path` against `tree`, substituting `{name}` placeholders.
///
/// Returns `key_path` unchanged when no tree is loaded, when a segment is
/// missing, or when the path ends on something other than a non-empty string.
pub fn resolve(tree: Option<&TranslationTree>, key_path: &str, params: &[(&str, &dyn Display)]) -> String {
    let Some(text) = tree.and_then(|tree| lookup(tree, key_path)) else {
        tracing::debug!("missing translation key '{}'", key_path);
        return key_path.to_string();
    };

    let mut result = text.to_string();
    for (name, value) in params {
        result = result.replace(&format!("{{{}}}", name), &value.to_string());
    }
    result
}

fn lookup<'a>(tree: &'a TranslationTree, key_path: &str) -> Option<&'a str> {
    let mut segments = key_path.split('.');
    let mut node = tree.get(segments.next()?)?;
    for segment in segments {
        node = node.as_object()?.get(segment)?;
    }
    node.as_str().filter(|s| !s.is_empty())
}

/// Holds the active translation tree
#[derive(Debug, Clone, Default)]
pub struct Translator {
    tree: Option<TranslationTree>,
}

impl Translator {
    pub fn new(tree: TranslationTree) -> Self {
        Self { tree: Some(tree) }
    }

    /// A translator with nothing loaded; every key resolves to itself.
    pub fn unloaded() -> Self {
        Self::default()
    }

    pub fn t(&self, key_path: &str) -> String {
        resolve(self.tree.as_ref(), key_path, &[])
    }

    pub fn t_with(&self, key_path: &str, params: &[(&str, &dyn Display)]) -> String {
        resolve(self.tree.as_ref(), key_path, params)
    }

    /// Exact lookup without the key fallback.
    pub fn get(&self, key_path: &str) -> Option<&str> {
        self.tree.as_ref().and_then(|tree| lookup(tree, key_path))
    }
}
