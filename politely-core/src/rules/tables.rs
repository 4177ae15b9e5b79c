//! Frozen lookup tables
//!
//! Every table keeps its entries in load order. For the honorific,
//! abbreviation and irregular tables that order is the priority in which
//! entries are tried.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Register a sentence is conjugated into, ordered from least to most formal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PolitenessLevel {
    /// Casual style (-어)
    Casual = 1,
    /// Polite style (-어요)
    Polite = 2,
    /// Formal style (-습니다)
    Formal = 3,
}

impl PolitenessLevel {
    /// All levels, least formal first
    pub const ALL: [PolitenessLevel; 3] = [
        PolitenessLevel::Casual,
        PolitenessLevel::Polite,
        PolitenessLevel::Formal,
    ];

    /// Numeric level (1..=3)
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Human-readable name of the register
    pub fn label(self) -> &'static str {
        match self {
            PolitenessLevel::Casual => "casual style (-어)",
            PolitenessLevel::Polite => "polite style (-어요)",
            PolitenessLevel::Formal => "formal style (-습니다)",
        }
    }
}

impl TryFrom<u8> for PolitenessLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PolitenessLevel::Casual),
            2 => Ok(PolitenessLevel::Polite),
            3 => Ok(PolitenessLevel::Formal),
            other => Err(format!("politeness level must be 1, 2 or 3, got {other}")),
        }
    }
}

impl From<PolitenessLevel> for u8 {
    fn from(level: PolitenessLevel) -> Self {
        level.value()
    }
}

impl fmt::Display for PolitenessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Politeness level and rationale for one (listener, environment) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolitenessRule {
    /// Who the sentence is addressed to
    pub listener: String,
    /// Social context of the conversation
    pub environment: String,
    /// Register to conjugate into
    pub level: PolitenessLevel,
    /// Why this register fits
    pub reason: String,
}

/// Politeness rules keyed by (listener, environment)
#[derive(Debug, Clone, Default)]
pub struct PolitenessTable {
    rules: Vec<PolitenessRule>,
    index: HashMap<(String, String), usize>,
}

impl PolitenessTable {
    /// Build from rules, rejecting duplicate keys
    pub fn new(rules: Vec<PolitenessRule>) -> Result<Self, String> {
        let mut index = HashMap::with_capacity(rules.len());
        for (position, rule) in rules.iter().enumerate() {
            let key = (rule.listener.clone(), rule.environment.clone());
            if index.insert(key, position).is_some() {
                return Err(format!(
                    "duplicate politeness rule for listener '{}' in environment '{}'",
                    rule.listener, rule.environment
                ));
            }
        }
        Ok(Self { rules, index })
    }

    /// Rule for a (listener, environment) pair
    pub fn lookup(&self, listener: &str, environment: &str) -> Option<&PolitenessRule> {
        self.index
            .get(&(listener.to_string(), environment.to_string()))
            .map(|&position| &self.rules[position])
    }

    /// Listener categories in first-appearance order
    pub fn listeners(&self) -> Vec<&str> {
        unique_in_order(self.rules.iter().map(|rule| rule.listener.as_str()))
    }

    /// Environment categories in first-appearance order
    pub fn environments(&self) -> Vec<&str> {
        unique_in_order(self.rules.iter().map(|rule| rule.environment.as_str()))
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

/// A morpheme span and its replacement at each politeness level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HonorificPattern {
    /// `+`-joined signature span to look for
    pub key: String,
    /// Replacement span for the casual style
    pub casual: String,
    /// Replacement span for the polite style
    pub polite: String,
    /// Replacement span for the formal style
    pub formal: String,
}

impl HonorificPattern {
    /// Replacement span for a level
    pub fn replacement(&self, level: PolitenessLevel) -> &str {
        match level {
            PolitenessLevel::Casual => &self.casual,
            PolitenessLevel::Polite => &self.polite,
            PolitenessLevel::Formal => &self.formal,
        }
    }
}

/// Honorific patterns in priority order
#[derive(Debug, Clone, Default)]
pub struct HonorificTable {
    patterns: Vec<HonorificPattern>,
}

impl HonorificTable {
    /// Build from patterns in priority order
    pub fn new(patterns: Vec<HonorificPattern>) -> Self {
        Self { patterns }
    }

    /// Patterns in priority order
    pub fn iter(&self) -> impl Iterator<Item = &HonorificPattern> {
        self.patterns.iter()
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the table has no patterns
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Literal substring replacement rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubstitutionRule {
    /// Substring to look for
    pub key: String,
    /// Replacement for every occurrence of `key`
    pub value: String,
}

/// Substitution rules in priority order (abbreviations, irregulars)
#[derive(Debug, Clone, Default)]
pub struct SubstitutionTable {
    rules: Vec<SubstitutionRule>,
}

impl SubstitutionTable {
    /// Build from rules in priority order
    pub fn new(rules: Vec<SubstitutionRule>) -> Self {
        Self { rules }
    }

    /// Rules in priority order
    pub fn iter(&self) -> impl Iterator<Item = &SubstitutionRule> {
        self.rules.iter()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
