//! Per-language pair and comment tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::comment::{CommentRule, default_insert_space};
use crate::error::{Error, Result};
use crate::pairs::{ClosingPairsRules, ResolvedClosingPairs};

/// Resolved rules for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageRules {
    pub closing_pairs: ResolvedClosingPairs,
    pub comments: Option<CommentRule>,
}

/// One entry of an external rule table.
///
/// ```json
/// { "language": "rust", "aliases": ["rs"],
///   "closingPairs": [["(", ")"], ["\"", "\""]],
///   "lineComment": "//", "blockComment": ["/*", "*/"], "insertSpace": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    pub language: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub closing_pairs: ClosingPairsRules,
    #[serde(default)]
    pub line_comment: Option<String>,
    #[serde(default)]
    pub block_comment: Option<(String, String)>,
    #[serde(default = "default_insert_space")]
    pub insert_space: bool,
}

impl LanguageEntry {
    fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() || self.aliases.iter().any(|a| a.trim().is_empty()) {
            return Err(Error::invalid_rule(&self.language, "empty language id"));
        }
        if self.line_comment.as_deref() == Some("") {
            return Err(Error::invalid_rule(&self.language, "empty line comment token"));
        }
        if let Some((open, close)) = &self.block_comment
            && (open.is_empty() || close.is_empty())
        {
            return Err(Error::invalid_rule(&self.language, "empty block comment delimiter"));
        }
        Ok(())
    }

    fn rules(&self) -> LanguageRules {
        let comments = (self.line_comment.is_some() || self.block_comment.is_some()).then(|| {
            CommentRule {
                line_comment: self.line_comment.clone(),
                block_comment: self.block_comment.clone(),
                insert_space: self.insert_space,
            }
        });
        LanguageRules {
            closing_pairs: self.closing_pairs.resolve(),
            comments,
        }
    }
}

struct Builtin {
    names: &'static [&'static str],
    /// Concatenated `open close` characters.
    pairs: &'static str,
    line: Option<&'static str>,
    block: Option<(&'static str, &'static str)>,
}

const C_PAIRS: &str = "()[]{}\"\"''";
const SLASHES: Option<&str> = Some("//");
const C_BLOCK: Option<(&str, &str)> = Some(("/*", "*/"));

#[rustfmt::skip]
const BUILTINS: &[Builtin] = &[
    Builtin { names: &["c", "h"], pairs: C_PAIRS, line: SLASHES, block: C_BLOCK },
    Builtin { names: &["cpp", "c++", "hpp"], pairs: C_PAIRS, line: SLASHES, block: C_BLOCK },
    Builtin { names: &["csharp", "cs"], pairs: C_PAIRS, line: SLASHES, block: C_BLOCK },
    Builtin { names: &["css"], pairs: C_PAIRS, line: None, block: C_BLOCK },
    Builtin { names: &["dart"], pairs: C_PAIRS, line: SLASHES, block: C_BLOCK },
    Builtin { names: &["go", "golang"], pairs: "()[]{}\"\"''``", line: SLASHES, block: C_BLOCK },
    Builtin { names: &["java"], pairs: C_PAIRS, line: SLASHES, block: C_BLOCK },
    Builtin { names: &["json"], pairs: "()[]{}\"\"", line: None, block: None },
    Builtin {
        names: &["javascript", "js", "jsx", "mjs"],
        pairs: "()[]{}\"\"''``",
        line: SLASHES,
        block: C_BLOCK,
    },
    Builtin {
        names: &["typescript", "ts", "tsx"],
        pairs: "()[]{}\"\"''``",
        line: SLASHES,
        block: C_BLOCK,
    },
    Builtin { names: &["php"], pairs: C_PAIRS, line: SLASHES, block: C_BLOCK },
    Builtin { names: &["python", "py"], pairs: C_PAIRS, line: Some("#"), block: None },
    Builtin { names: &["rust", "rs"], pairs: "()[]{}\"\"", line: SLASHES, block: C_BLOCK },
    Builtin { names: &["ruby", "rb"], pairs: C_PAIRS, line: Some("#"), block: None },
    Builtin { names: &["sql"], pairs: "()[]\"\"''", line: Some("--"), block: C_BLOCK },
];

impl Builtin {
    fn entry(&self) -> LanguageEntry {
        let chars: Vec<char> = self.pairs.chars().collect();
        LanguageEntry {
            language: self.names[0].to_string(),
            aliases: self.names[1..].iter().map(|s| s.to_string()).collect(),
            closing_pairs: ClosingPairsRules::new(chars.chunks(2).map(|p| (p[0], p[1]))),
            line_comment: self.line.map(str::to_string),
            block_comment: self.block.map(|(o, c)| (o.to_string(), c.to_string())),
            insert_space: true,
        }
    }
}

/// Immutable lookup from language id to its rules.
///
/// Ids are matched case-insensitively. Build once at configuration time and
/// share freely.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: HashMap<String, LanguageRules>,
}

impl LanguageRegistry {
    /// An empty registry: no language gets pair or comment behaviour.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for builtin in BUILTINS {
            registry.insert_entry(&builtin.entry());
        }
        registry
    }

    /// Parses a JSON array of [`LanguageEntry`] values.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut registry = Self::new();
        registry.extend_from_json(json)?;
        Ok(registry)
    }

    /// Overlays a JSON table on this registry. Later entries replace earlier
    /// ones for the same id. Nothing is applied when any entry is invalid.
    pub fn extend_from_json(&mut self, json: &str) -> Result<()> {
        let entries: Vec<LanguageEntry> = serde_json::from_str(json)?;
        self.extend(entries)
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = LanguageEntry>) -> Result<()> {
        let entries: Vec<LanguageEntry> = entries.into_iter().collect();
        for entry in &entries {
            entry.validate()?;
        }
        for entry in &entries {
            self.insert_entry(entry);
        }
        tracing::debug!(
            target: "textarea_keys::languages",
            entries = entries.len(),
            languages = self.languages.len(),
            "loaded language rules"
        );
        Ok(())
    }

    fn insert_entry(&mut self, entry: &LanguageEntry) {
        let rules = entry.rules();
        for alias in &entry.aliases {
            self.insert(alias, rules.clone());
        }
        self.insert(&entry.language, rules);
    }

    pub fn insert(&mut self, language: &str, rules: LanguageRules) {
        self.languages.insert(language.trim().to_ascii_lowercase(), rules);
    }

    pub fn get(&self, language: &str) -> Option<&LanguageRules> {
        self.languages.get(&language.trim().to_ascii_lowercase())
    }

    pub fn contains(&self, language: &str) -> bool {
        self.get(language).is_some()
    }

    /// Registered ids and aliases, in no particular order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
