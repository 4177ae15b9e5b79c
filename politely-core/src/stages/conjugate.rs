//! Honorific conjugation
//!
//! Every honorific pattern is tried against each token's signature in table
//! order. Each match is replaced with the level-specific span, and later
//! patterns see the already rewritten signature.

use super::StageContext;
use crate::error::Result;
use crate::matcher::matches;
use crate::rules::{HonorificTable, PolitenessLevel};
use crate::run::{PipelineRun, Substitutions};
use crate::token::{surface_of, Token};

/// Conjugate a single token, recording applied patterns
pub fn conjugate_token(
    token: &Token,
    honorifics: &HonorificTable,
    level: PolitenessLevel,
    applied: &mut Substitutions,
) -> String {
    let original = token.signature();
    let mut tuned = original.clone();

    for pattern in honorifics.iter() {
        if matches(&pattern.key, &tuned) {
            let replacement = pattern.replacement(level);
            tuned = tuned.replace(&pattern.key, replacement);
            applied.record(&pattern.key, replacement);
            tracing::trace!(pattern = %pattern.key, %replacement, "applied honorific");
        }
    }

    let before = surface_of(&original);
    let after = surface_of(&tuned);
    if before != after {
        after
    } else {
        // nothing changed on the surface, keep the original spelling
        token.lex().to_string()
    }
}

/// Conjugate all tokens and join them with single spaces
pub fn conjugate_tokens(
    tokens: &[Token],
    honorifics: &HonorificTable,
    level: PolitenessLevel,
    applied: &mut Substitutions,
) -> String {
    tokens
        .iter()
        .map(|token| conjugate_token(token, honorifics, level, applied))
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn run(ctx: &StageContext<'_>, mut run: PipelineRun) -> Result<PipelineRun> {
    let mut applied = Substitutions::default();
    let text = conjugate_tokens(
        run.tokens(),
        ctx.tables.honorifics(),
        run.level(),
        &mut applied,
    );

    *run.conjugations_mut() = applied;
    run.set_text(text);
    Ok(run)
}
