//! English noun singularization.
//!
//! Relation names are derived from table names (`students` -> `student`).
//! The [`Inflector`] holds three tables, consulted in this order:
//! 1. uncountable words, returned unchanged
//! 2. irregular plurals, matched on the end of the word
//! 3. suffix rules, first match wins
//!
//! Words that are already singular fall through every table and come back
//! as they were.

use regex_lite::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

/// Errors that can occur while extending an inflector.
#[derive(Debug, Error)]
pub enum InflectError {
    #[error("invalid singular rule '{pattern}': {message}")]
    InvalidRule { pattern: String, message: String },
}

/// Result type for inflector construction.
pub type InflectResult<T> = Result<T, InflectError>;

/// Suffix rules, highest priority first. Replacements use `${n}` captures.
const SINGULAR_RULES: &[(&str, &str)] = &[
    (r"(?i)(quiz)zes$", "${1}"),
    (r"(?i)(matr)ices$", "${1}ix"),
    (r"(?i)(vert|ind)ices$", "${1}ex"),
    (r"(?i)^(ox)en$", "${1}"),
    (r"(?i)(alias|status)(es)?$", "${1}"),
    (r"(?i)(octop|vir)(i|us)$", "${1}us"),
    (r"(?i)^(a)x[ie]s$", "${1}xis"),
    (r"(?i)(cris|test)(is|es)$", "${1}is"),
    (r"(?i)(shoe)s$", "${1}"),
    (r"(?i)(o)es$", "${1}"),
    (r"(?i)(bus)(es)?$", "${1}"),
    (r"(?i)(m|l)ice$", "${1}ouse"),
    (r"(?i)(x|ch|ss|sh|zz)es$", "${1}"),
    (r"(?i)(m)ovies$", "${1}ovie"),
    (r"(?i)(s)eries$", "${1}eries"),
    (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
    (r"(?i)(lea|loa|thie)ves$", "${1}f"),
    (r"(?i)([lr])ves$", "${1}f"),
    (r"(?i)(tive)s$", "${1}"),
    (r"(?i)(hive)s$", "${1}"),
    (r"(?i)([^f])ves$", "${1}fe"),
    (r"(?i)(^analy)(sis|ses)$", "${1}sis"),
    (
        r"(?i)((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
        "${1}sis",
    ),
    (r"(?i)([ti])a$", "${1}um"),
    (r"(?i)(n)ews$", "${1}ews"),
    (r"(?i)(ss|us|is)$", "${1}"),
    (r"(?i)s$", ""),
];

/// Irregular (singular, plural) pairs.
const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("cow", "kine"),
    ("zombie", "zombies"),
];

const UNCOUNTABLES: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "moose",
    "deer",
    "news",
    "jeans",
    "police",
];

/// A compiled suffix rule.
#[derive(Debug, Clone)]
struct Rule {
    pattern: Regex,
    replacement: String,
}

/// Singularizes English nouns.
#[derive(Debug, Clone)]
pub struct Inflector {
    /// Suffix rules, highest priority first.
    rules: Vec<Rule>,
    /// (singular, plural) pairs, plural stored lowercase.
    irregulars: Vec<(String, String)>,
    /// Lowercase words with no distinct plural.
    uncountables: HashSet<String>,
}

impl Default for Inflector {
    fn default() -> Self {
        Self::english()
    }
}

impl Inflector {
    /// An inflector with the built-in English tables.
    pub fn english() -> Self {
        let rules = SINGULAR_RULES
            .iter()
            .map(|(pattern, replacement)| Rule {
                pattern: Regex::new(pattern).expect("built-in singular rule compiles"),
                replacement: (*replacement).to_string(),
            })
            .collect();

        Self {
            rules,
            irregulars: IRREGULARS
                .iter()
                .map(|(singular, plural)| (singular.to_string(), plural.to_string()))
                .collect(),
            uncountables: UNCOUNTABLES.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// An inflector with no tables at all; every word is returned unchanged.
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            irregulars: Vec::new(),
            uncountables: HashSet::new(),
        }
    }

    /// Add a suffix rule that takes precedence over every existing rule.
    pub fn with_rule(
        mut self,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> InflectResult<Self> {
        let pattern = pattern.into();
        let compiled = Regex::new(&pattern).map_err(|e| InflectError::InvalidRule {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        self.rules.insert(
            0,
            Rule {
                pattern: compiled,
                replacement: replacement.into(),
            },
        );
        Ok(self)
    }

    /// Add an irregular pair. Later pairs shadow earlier ones.
    pub fn with_irregular(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        let plural = plural.into().to_lowercase();
        self.irregulars.retain(|(_, p)| *p != plural);
        self.irregulars.push((singular.into(), plural));
        self
    }

    /// Add a word that is its own plural.
    pub fn with_uncountable(mut self, word: impl Into<String>) -> Self {
        self.uncountables.insert(word.into().to_lowercase());
        self
    }

    /// Returns true if `word` has no distinct plural.
    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.contains(&word.to_lowercase())
    }

    /// Singular form of `word`.
    pub fn singularize(&self, word: &str) -> String {
        if word.is_empty() || self.is_uncountable(word) {
            return word.to_string();
        }

        if let Some((split, singular)) = self.irregular_tail(word) {
            let (head, tail) = word.split_at(split);
            tracing::trace!(word, singular = %singular, "irregular plural");
            return format!("{}{}", head, match_leading_case(tail, singular));
        }

        for rule in &self.rules {
            if rule.pattern.is_match(word) {
                let singular = rule.pattern.replace(word, rule.replacement.as_str());
                tracing::trace!(word, rule = rule.pattern.as_str(), singular = %singular, "singular rule matched");
                return singular.into_owned();
            }
        }

        word.to_string()
    }

    /// The longest irregular plural ending `word`, as (byte offset, singular).
    ///
    /// Irregulars apply to the tail of compounds (`sales_people`, `grandchildren`).
    /// On equal length the later pair wins.
    fn irregular_tail(&self, word: &str) -> Option<(usize, &str)> {
        self.irregulars
            .iter()
            .filter_map(|(singular, plural)| {
                let split = word.len().checked_sub(plural.len())?;
                let tail = word.get(split..)?;
                (tail.to_lowercase() == *plural).then_some((split, singular.as_str()))
            })
            .max_by_key(|(split, _)| word.len() - split)
    }
}

/// Copy the case of `source`'s first letter onto `target`.
fn match_leading_case(source: &str, target: &str) -> String {
    let upper = source.chars().next().is_some_and(char::is_uppercase);
    let mut chars = target.chars();
    match chars.next() {
        Some(first) if upper => first.to_uppercase().chain(chars).collect(),
        _ => target.to_string(),
    }
}

static ENGLISH: LazyLock<Inflector> = LazyLock::new(Inflector::english);

/// Singularize with the built-in English tables.
pub fn singularize(word: &str) -> String {
    ENGLISH.singularize(word)
}
