//! Abbreviation and irregular-form passes
//!
//! Both passes walk their table in order and replace every occurrence of a
//! key that appears in the current text.

use super::StageContext;
use crate::error::Result;
use crate::rules::SubstitutionTable;
use crate::run::{PipelineRun, Substitutions};

/// Apply literal substitutions in table order, recording the ones that fired
pub fn apply_substitutions(
    text: &str,
    table: &SubstitutionTable,
    applied: &mut Substitutions,
) -> String {
    let mut out = text.to_string();
    for rule in table.iter() {
        if out.contains(rule.key.as_str()) {
            out = out.replace(rule.key.as_str(), &rule.value);
            applied.record(&rule.key, &rule.value);
            tracing::trace!(key = %rule.key, value = %rule.value, "applied substitution");
        }
    }
    out
}

pub(crate) fn abbreviate(ctx: &StageContext<'_>, mut run: PipelineRun) -> Result<PipelineRun> {
    let mut applied = Substitutions::default();
    let text = apply_substitutions(run.text(), ctx.tables.abbreviations(), &mut applied);
    *run.abbreviations_mut() = applied;
    run.set_text(text);
    Ok(run)
}

pub(crate) fn normalize_irregulars(
    ctx: &StageContext<'_>,
    mut run: PipelineRun,
) -> Result<PipelineRun> {
    let mut applied = Substitutions::default();
    let text = apply_substitutions(run.text(), ctx.tables.irregulars(), &mut applied);
    *run.irregulars_mut() = applied;
    run.set_text(text);
    Ok(run)
}
