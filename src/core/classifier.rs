//! Content classification.
//!
//! A message body is checked against two independent rule families:
//!
//! | Family | Rules |
//! |--------|-------|
//! | Laugh | `ha` syllables, `hehe`, `lol`, `lmao`, 😂 🤣 💀 |
//! | ILY | "i love you", "love u", `ily`, transliterated phrases |
//!
//! Matching is case-insensitive and looks anywhere in the body. Word-based
//! laugh rules and `ily` are anchored on word boundaries, so "Yamaha" or
//! "family" never count.
//!
//! # Example
//!
//! ```
//! use chatpulse::core::classifier::classify;
//!
//! let c = classify("hahaha love u");
//! assert!(c.is_laugh);
//! assert!(c.is_ily);
//!
//! assert!(!classify("Yamaha motorcycles are great").is_laugh);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Which family a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Laugh,
    Ily,
}

/// A single named pattern.
pub struct Rule {
    name: &'static str,
    family: Family,
    regex: Regex,
}

impl Rule {
    fn new(name: &'static str, family: Family, pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            family,
            regex: Regex::new(&format!("(?i){pattern}"))?,
        })
    }

    /// Short identifier of the rule, e.g. `"lol"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The family this rule contributes to.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Returns `true` if the rule matches anywhere in `body`.
    pub fn matches(&self, body: &str) -> bool {
        self.regex.is_match(body)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("family", &self.family)
            .field("pattern", &self.regex.as_str())
            .finish()
    }
}

/// Rule definitions: name, family, pattern.
///
/// Transliterated ILY phrases are a fixed list and are matched literally.
const RULE_DEFINITIONS: &[(&str, Family, &str)] = &[
    // "haha", "ahaha", "hahaha"; needs at least "hah"
    ("ha", Family::Laugh, r"\ba*ha+h[ha]*\b"),
    ("hehe", Family::Laugh, r"\b(?:h+e+){2,}\b"),
    ("lol", Family::Laugh, r"\bl+o+l+\b"),
    ("lmao", Family::Laugh, r"\bl+m+a+o+\b"),
    ("tears-of-joy", Family::Laugh, "\u{1F602}"),
    ("rofl", Family::Laugh, "\u{1F923}"),
    ("skull", Family::Laugh, "\u{1F480}"),
    ("i-love-you", Family::Ily, r"i love you"),
    ("love-u", Family::Ily, r"love u"),
    ("ily", Family::Ily, r"\bily\b"),
    ("bahebak", Family::Ily, r"bahebak"),
    ("bahebek", Family::Ily, r"bahebek"),
    ("bamoot-feek", Family::Ily, r"bamoot feek"),
    ("bamoot-feeki", Family::Ily, r"bamoot feeki"),
];

/// Result of classifying one message body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub is_laugh: bool,
    pub is_ily: bool,
}

impl Classification {
    /// Returns `true` if neither family matched.
    pub fn is_neutral(&self) -> bool {
        !self.is_laugh && !self.is_ily
    }
}

/// The ordered, compiled rule list for both families.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compiles the built-in rules.
    pub fn new() -> Result<Self, regex::Error> {
        let rules = RULE_DEFINITIONS
            .iter()
            .map(|&(name, family, pattern)| Rule::new(name, family, pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Returns all rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the rules of one family.
    pub fn family_rules(&self, family: Family) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |r| r.family == family)
    }

    /// Returns the laugh rules.
    pub fn laugh_rules(&self) -> impl Iterator<Item = &Rule> {
        self.family_rules(Family::Laugh)
    }

    /// Returns the ILY rules.
    pub fn ily_rules(&self) -> impl Iterator<Item = &Rule> {
        self.family_rules(Family::Ily)
    }

    /// Looks up a rule by name.
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Classifies a message body.
    ///
    /// Each family is a single boolean regardless of how many of its rules
    /// or tokens match.
    pub fn classify(&self, body: &str) -> Classification {
        Classification {
            is_laugh: self.laugh_rules().any(|r| r.matches(body)),
            is_ily: self.ily_rules().any(|r| r.matches(body)),
        }
    }

    /// Returns the names of every rule that matches `body`.
    pub fn matching_rules(&self, body: &str) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|r| r.matches(body))
            .map(|r| r.name)
            .collect()
    }
}

static DEFAULT_RULES: LazyLock<RuleSet> =
    LazyLock::new(|| RuleSet::new().expect("built-in classifier rules are valid"));

/// Returns the shared built-in rule set.
pub fn default_rules() -> &'static RuleSet {
    &DEFAULT_RULES
}

/// Classifies a message body with the built-in rules.
pub fn classify(body: &str) -> Classification {
    DEFAULT_RULES.classify(body)
}
