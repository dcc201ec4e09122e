//! # Text-to-Emoji Resolver
//!
//! A fixed word → emoji dictionary consulted before any todo is created.
//! The table is assembled once at startup (builtins plus `[mappings]`
//! from the config file) and never mutated afterwards.
//!
//! Lookup is case-insensitive and absence is an explicit `None` — the
//! caller branches on presence instead of assuming a hit.

use std::collections::HashMap;

use log::info;

/// The builtin dictionary. Lowercase word → emoji glyph.
const BUILTIN: &[(&str, &str)] = &[
    ("hamburguesa", "🍔"),
    ("pizza", "🍕"),
    ("sushi", "🍣"),
    ("sandia", "🍉"),
    ("manzana", "🍎"),
    ("limon", "🍋"),
    ("tomate", "🍅"),
    ("pepino", "🥒"),
];

/// Immutable word → emoji mapping, fixed at process start.
pub struct EmojiTable {
    map: HashMap<String, String>,
}

impl EmojiTable {
    /// The builtin table, nothing else.
    pub fn builtin() -> Self {
        let map = BUILTIN
            .iter()
            .map(|(word, emoji)| (word.to_string(), emoji.to_string()))
            .collect();
        Self { map }
    }

    /// Builtin table with user-defined mappings merged over it.
    /// Custom entries win on key collision; keys are lowercased so
    /// config casing never matters.
    pub fn with_custom(custom: &HashMap<String, String>) -> Self {
        let mut table = Self::builtin();
        for (word, emoji) in custom {
            table.map.insert(word.to_lowercase(), emoji.clone());
        }
        if !custom.is_empty() {
            info!("loaded {} custom emoji mapping(s)", custom.len());
        }
        table
    }

    /// Resolve raw input text to its emoji glyph.
    ///
    /// The lookup key is the lowercased input, falling back to the
    /// original string when lowercasing yields an empty string. That
    /// lowercase-or-original precedence is one contract inherited from
    /// the source behavior, not two separate rules.
    ///
    /// Returns `None` for unknown words and for mappings that trim to
    /// empty — callers treat both as "do not create".
    pub fn resolve(&self, raw: &str) -> Option<&str> {
        let lowered = raw.to_lowercase();
        let key = if lowered.is_empty() { raw } else { &lowered };
        self.map
            .get(key)
            .map(|emoji| emoji.trim())
            .filter(|emoji| !emoji.is_empty())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
