//! Pipeline orchestrator
//!
//! [`Styler`] holds the shared, read-only inputs (rule tables, analyzer,
//! configuration) and runs the fixed stage list over a fresh
//! [`PipelineRun`] for every call. Nothing is mutated on the styler itself,
//! so one instance can serve concurrent callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::analyzer::Analyzer;
use crate::error::{Result, StylerError};
use crate::rules::RuleTables;
use crate::run::{PipelineRun, Stage};
use crate::stages::{StageContext, PIPELINE};

/// What happens to the period appended during preprocessing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunctuationPolicy {
    /// Leave it in the output
    #[default]
    Keep,
    /// Strip it from the output when the caller's sentence had none
    RestoreOriginal,
}

/// Styler configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylerConfig {
    /// Handling of the period appended during preprocessing
    #[serde(default)]
    pub punctuation: PunctuationPolicy,
}

/// Conjugates sentences into the register fitting a listener and environment
pub struct Styler {
    tables: Arc<RuleTables>,
    analyzer: Arc<dyn Analyzer>,
    config: StylerConfig,
}

impl fmt::Debug for Styler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Styler")
            .field("tables", &self.tables)
            .field("analyzer", &"<dyn Analyzer>")
            .field("config", &self.config)
            .finish()
    }
}

impl Styler {
    /// Create a styler over the embedded rule tables
    pub fn new(analyzer: impl Analyzer + 'static) -> Result<Self> {
        Self::builder().analyzer(analyzer).build()
    }

    /// Create a styler over explicit tables
    pub fn with_tables(tables: Arc<RuleTables>, analyzer: impl Analyzer + 'static) -> Self {
        Self {
            tables,
            analyzer: Arc::new(analyzer),
            config: StylerConfig::default(),
        }
    }

    /// Start building a styler
    pub fn builder() -> StylerBuilder {
        StylerBuilder::new()
    }

    /// Style a sentence and return only the final text
    pub fn run(&self, sentence: &str, listener: &str, environment: &str) -> Result<String> {
        let run = self.process(sentence, listener, environment)?;
        Ok(run.output().to_string())
    }

    /// Style a sentence and return the full run for explanation
    pub fn process(
        &self,
        sentence: &str,
        listener: &str,
        environment: &str,
    ) -> Result<PipelineRun> {
        let rule = self.tables.resolve(listener, environment)?.clone();
        tracing::debug!(
            listener,
            environment,
            level = rule.level.value(),
            "resolved politeness level"
        );

        let ctx = StageContext {
            tables: &self.tables,
            analyzer: self.analyzer.as_ref(),
        };

        let mut run = PipelineRun::new(sentence, rule);
        for (stage, step) in PIPELINE {
            run = step(&ctx, run)?;
            run.advance(stage);
            tracing::debug!(stage = %stage, text = %run.output(), "entered stage");
        }

        self.finish(&mut run);
        Ok(run)
    }

    fn finish(&self, run: &mut PipelineRun) {
        if self.config.punctuation == PunctuationPolicy::RestoreOriginal
            && run.appended_period()
        {
            if let Some(stripped) = run.text().strip_suffix('.') {
                let stripped = stripped.to_string();
                run.set_text(stripped);
            }
        }
        run.advance(Stage::Done);
    }

    /// Listener categories known to the politeness rules
    pub fn listeners(&self) -> Vec<&str> {
        self.tables.listeners()
    }

    /// Environment categories known to the politeness rules
    pub fn environments(&self) -> Vec<&str> {
        self.tables.environments()
    }

    /// Rule tables in use
    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    /// Current configuration
    pub fn config(&self) -> &StylerConfig {
        &self.config
    }
}

/// Builder for [`Styler`]
#[derive(Default)]
pub struct StylerBuilder {
    tables: Option<Arc<RuleTables>>,
    rules_dir: Option<PathBuf>,
    analyzer: Option<Arc<dyn Analyzer>>,
    config: StylerConfig,
}

impl StylerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use already loaded tables
    pub fn tables(mut self, tables: Arc<RuleTables>) -> Self {
        self.tables = Some(tables);
        self
    }

    /// Load tables from a directory instead of the embedded defaults
    pub fn rules_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.rules_dir = Some(dir.into());
        self
    }

    /// Set the morphological analyzer
    pub fn analyzer(mut self, analyzer: impl Analyzer + 'static) -> Self {
        self.analyzer = Some(Arc::new(analyzer));
        self
    }

    /// Set the punctuation policy
    pub fn punctuation(mut self, policy: PunctuationPolicy) -> Self {
        self.config.punctuation = policy;
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: StylerConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the styler
    pub fn build(self) -> Result<Styler> {
        let analyzer = self.analyzer.ok_or_else(|| {
            StylerError::Configuration("an analyzer is required".to_string())
        })?;

        let tables = match (self.tables, self.rules_dir) {
            (Some(tables), _) => tables,
            (None, Some(dir)) => Arc::new(RuleTables::from_dir(dir)?),
            (None, None) => RuleTables::embedded()?,
        };

        Ok(Styler {
            tables,
            analyzer,
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Pretagged;

    #[test]
    fn test_builder_requires_analyzer() {
        match Styler::builder().build() {
            Err(StylerError::Configuration(msg)) => assert!(msg.contains("analyzer")),
            other => panic!("Expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_pair_fails_before_analysis() {
        let styler = Styler::new(
            |_: &str| -> std::result::Result<Vec<crate::Token>, crate::AnalyzerError> {
                panic!("analyzer must not be called")
            },
        )
        .unwrap();

        assert!(matches!(
            styler.process("밥 먹어", "cat", "formal"),
            Err(StylerError::UnknownRuleKey { .. })
        ));
    }

    #[test]
    fn test_history_has_four_entries() {
        let styler = Styler::new(Pretagged).unwrap();
        let run = styler
            .process("밥/NNG+을/JKO 먹/VV+어/EF", "friend", "formal")
            .unwrap();

        let stages: Vec<_> = run.history().iter().map(|entry| entry.stage).collect();
        assert_eq!(
            stages,
            vec![
                Stage::Validated,
                Stage::Conjugated,
                Stage::Abbreviated,
                Stage::Normalized
            ]
        );
        assert_eq!(run.stage(), Stage::Done);
        assert_eq!(run.output(), "밥을 먹어요.");
    }

    #[test]
    fn test_restore_original_punctuation() {
        let styler = Styler::builder()
            .analyzer(Pretagged)
            .punctuation(PunctuationPolicy::RestoreOriginal)
            .build()
            .unwrap();

        let run = styler
            .process("밥/NNG+을/JKO 먹/VV+어/EF", "friend", "formal")
            .unwrap();
        assert_eq!(run.output(), "밥을 먹어요");
        // history still shows the appended period
        assert_eq!(run.history()[3].text, "밥을 먹어요.");

        let asked = styler
            .run("밥/NNG+을/JKO 먹/VV+어/EF?", "friend", "formal")
            .unwrap();
        assert_eq!(asked, "밥을 먹어요?");
    }

    #[test]
    fn test_explicit_final_punctuation_is_not_doubled() {
        let styler = Styler::new(Pretagged).unwrap();
        let run = styler
            .process("밥/NNG+을/JKO 먹/VV+어/EF+?/SF", "friend", "formal")
            .unwrap();

        assert_eq!(run.history()[0].text, "밥/NNG+을/JKO 먹/VV+어/EF+?/SF");
        assert_eq!(run.output(), "밥을 먹어요?");
    }

    #[test]
    fn test_config_deserialize() {
        let config: StylerConfig = toml::from_str(r#"punctuation = "restore_original""#).unwrap();
        assert_eq!(config.punctuation, PunctuationPolicy::RestoreOriginal);

        let default: StylerConfig = toml::from_str("").unwrap();
        assert_eq!(default.punctuation, PunctuationPolicy::Keep);
    }
}
