//! Per-invocation pipeline state
//!
//! A [`PipelineRun`] is created fresh for every call to
//! [`Styler::process`](crate::Styler::process), threaded through the stages
//! by value and handed back to the caller. It is never shared between
//! invocations.

use serde::Serialize;
use std::fmt;

use crate::rules::{PolitenessLevel, PolitenessRule};
use crate::token::Token;

/// Pipeline states, in the only order they can be visited
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Start,
    Preprocessed,
    Analyzed,
    Validated,
    Conjugated,
    Abbreviated,
    Normalized,
    Done,
}

impl Stage {
    /// Whether entering this stage appends a history snapshot
    pub fn records_history(self) -> bool {
        matches!(
            self,
            Stage::Validated | Stage::Conjugated | Stage::Abbreviated | Stage::Normalized
        )
    }

    /// Lower-case name
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Start => "start",
            Stage::Preprocessed => "preprocessed",
            Stage::Analyzed => "analyzed",
            Stage::Validated => "validated",
            Stage::Conjugated => "conjugated",
            Stage::Abbreviated => "abbreviated",
            Stage::Normalized => "normalized",
            Stage::Done => "done",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Snapshot of the running text when a stage was entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub stage: Stage,
    pub text: String,
}

/// A (pattern, replacement) pair that was applied
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Substitution {
    pub pattern: String,
    pub replacement: String,
}

impl Substitution {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Set of applied substitutions, iterated in first-application order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Substitutions(Vec<Substitution>);

impl Substitutions {
    /// Record a pair; pairs already present are ignored
    pub fn record(&mut self, pattern: &str, replacement: &str) {
        let seen = self
            .0
            .iter()
            .any(|s| s.pattern == pattern && s.replacement == replacement);
        if !seen {
            self.0.push(Substitution::new(pattern, replacement));
        }
    }

    pub fn contains(&self, pattern: &str, replacement: &str) -> bool {
        self.0
            .iter()
            .any(|s| s.pattern == pattern && s.replacement == replacement)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Substitution> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Substitutions {
    type Item = &'a Substitution;
    type IntoIter = std::slice::Iter<'a, Substitution>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// State of one styling invocation
#[derive(Debug, Clone, Serialize)]
pub struct PipelineRun {
    input: String,
    rule: PolitenessRule,
    stage: Stage,
    /// Whether preprocessing appended the sentence-final period
    appended_period: bool,
    #[serde(rename = "output")]
    text: String,
    tokens: Vec<Token>,
    history: Vec<HistoryEntry>,
    conjugations: Substitutions,
    abbreviations: Substitutions,
    irregulars: Substitutions,
}

impl PipelineRun {
    pub(crate) fn new(input: &str, rule: PolitenessRule) -> Self {
        Self {
            input: input.to_string(),
            rule,
            stage: Stage::Start,
            appended_period: false,
            text: input.to_string(),
            tokens: Vec::new(),
            history: Vec::with_capacity(4),
            conjugations: Substitutions::default(),
            abbreviations: Substitutions::default(),
            irregulars: Substitutions::default(),
        }
    }

    /// Sentence as given by the caller
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Final styled sentence once the run is done, the running text before
    pub fn output(&self) -> &str {
        &self.text
    }

    /// Listener the sentence is addressed to
    pub fn listener(&self) -> &str {
        &self.rule.listener
    }

    /// Environment the sentence is spoken in
    pub fn environment(&self) -> &str {
        &self.rule.environment
    }

    /// Resolved politeness level
    pub fn level(&self) -> PolitenessLevel {
        self.rule.level
    }

    /// Rationale for the resolved level
    pub fn reason(&self) -> &str {
        &self.rule.reason
    }

    /// Last stage entered
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Tokens returned by the analyzer
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Snapshots after validation, conjugation, abbreviation and
    /// irregular normalization, in that order
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Honorific patterns applied by the conjugation stage
    pub fn conjugations(&self) -> &Substitutions {
        &self.conjugations
    }

    /// Abbreviation rules applied
    pub fn abbreviations(&self) -> &Substitutions {
        &self.abbreviations
    }

    /// Irregular-form rules applied
    pub fn irregulars(&self) -> &Substitutions {
        &self.irregulars
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn appended_period(&self) -> bool {
        self.appended_period
    }

    pub(crate) fn mark_appended_period(&mut self) {
        self.appended_period = true;
    }

    pub(crate) fn set_tokens(&mut self, tokens: Vec<Token>) {
        self.tokens = tokens;
    }

    pub(crate) fn conjugations_mut(&mut self) -> &mut Substitutions {
        &mut self.conjugations
    }

    pub(crate) fn abbreviations_mut(&mut self) -> &mut Substitutions {
        &mut self.abbreviations
    }

    pub(crate) fn irregulars_mut(&mut self) -> &mut Substitutions {
        &mut self.irregulars
    }

    /// Enter `stage`, snapshotting the running text when it is one of the
    /// four recorded stages
    pub(crate) fn advance(&mut self, stage: Stage) {
        debug_assert!(stage > self.stage, "stages only move forward");
        self.stage = stage;
        if stage.records_history() {
            self.history.push(HistoryEntry {
                stage,
                text: self.text.clone(),
            });
        }
    }
}
