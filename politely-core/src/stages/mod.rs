//! Pipeline stages
//!
//! Each stage is a plain function that takes the run state by value and
//! returns it updated, or fails. [`PIPELINE`] lists them in the order the
//! styler executes them, paired with the state each one leads to.

pub mod cleanup;
pub mod conjugate;
pub mod preprocess;
pub mod validate;

use crate::analyzer::Analyzer;
use crate::error::{Result, StylerError};
use crate::rules::RuleTables;
use crate::run::{PipelineRun, Stage};
use crate::token::Token;

/// Read-only inputs shared by every stage of one invocation
pub(crate) struct StageContext<'a> {
    pub tables: &'a RuleTables,
    pub analyzer: &'a dyn Analyzer,
}

pub(crate) type StageFn = fn(&StageContext<'_>, PipelineRun) -> Result<PipelineRun>;

/// Stages in execution order, each with the state it enters on success
pub(crate) const PIPELINE: [(Stage, StageFn); 6] = [
    (Stage::Preprocessed, preprocess::run),
    (Stage::Analyzed, analyze),
    (Stage::Validated, validate::run),
    (Stage::Conjugated, conjugate::run),
    (Stage::Abbreviated, cleanup::abbreviate),
    (Stage::Normalized, cleanup::normalize_irregulars),
];

/// Space-joined signatures of the analyzed tokens
pub fn render_signatures(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::signature)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Hand the preprocessed sentence to the external analyzer
fn analyze(ctx: &StageContext<'_>, mut run: PipelineRun) -> Result<PipelineRun> {
    let tokens = ctx
        .analyzer
        .analyze(run.text())
        .map_err(StylerError::Analyzer)?;

    run.set_text(render_signatures(&tokens));
    run.set_tokens(tokens);
    Ok(run)
}
