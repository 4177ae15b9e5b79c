//! Validation of analyzed sentences
//!
//! A sentence can only be styled when at least one token carries a final
//! ending, and every such token is covered by an honorific pattern.

use super::StageContext;
use crate::error::{Result, StylerError};
use crate::matcher::matches;
use crate::rules::HonorificTable;
use crate::run::PipelineRun;
use crate::token::Token;

/// Check completeness and coverage of the final endings
pub fn check(tokens: &[Token], honorifics: &HonorificTable) -> Result<()> {
    let endings: Vec<String> = tokens
        .iter()
        .filter(|token| token.has_final_ending())
        .map(Token::signature)
        .collect();

    if endings.is_empty() {
        let signature = tokens
            .iter()
            .map(Token::signature)
            .collect::<Vec<_>>()
            .join("|");
        tracing::warn!(%signature, "sentence has no final ending");
        return Err(StylerError::UnsupportedInput { signature });
    }

    for signature in endings {
        if !honorifics
            .iter()
            .any(|pattern| matches(&pattern.key, &signature))
        {
            tracing::warn!(%signature, "final ending not covered by honorific patterns");
            return Err(StylerError::UnrecognizedPattern { signature });
        }
    }

    Ok(())
}

pub(crate) fn run(ctx: &StageContext<'_>, run: PipelineRun) -> Result<PipelineRun> {
    check(run.tokens(), ctx.tables.honorifics())?;
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Pretagged;
    use crate::rules::HonorificPattern;

    fn honorifics() -> HonorificTable {
        HonorificTable::new(vec![HonorificPattern {
            key: "어/EF".to_string(),
            casual: "어/EF".to_string(),
            polite: "어요/EF".to_string(),
            formal: "습니다/EF".to_string(),
        }])
    }

    #[test]
    fn test_covered_final_ending() {
        let tokens = Pretagged::parse("밥/NNG+을/JKO 먹/VV+어/EF.").unwrap();
        assert!(check(&tokens, &honorifics()).is_ok());
    }

    #[test]
    fn test_missing_final_ending() {
        let tokens = Pretagged::parse("맛있는/VA+는/ETM 밥/NNG.").unwrap();
        match check(&tokens, &honorifics()) {
            Err(StylerError::UnsupportedInput { signature }) => {
                assert_eq!(signature, "맛있는/VA+는/ETM|밥/NNG+./SF");
            }
            other => panic!("Expected UnsupportedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_uncovered_final_ending() {
        let tokens = Pretagged::parse("가/VV+자/EF.").unwrap();
        match check(&tokens, &honorifics()) {
            Err(StylerError::UnrecognizedPattern { signature }) => {
                assert_eq!(signature, "가/VV+자/EF+./SF");
            }
            other => panic!("Expected UnrecognizedPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_every_final_ending_must_be_covered() {
        let tokens = Pretagged::parse("먹/VV+어/EF 가/VV+자/EF.").unwrap();
        assert!(matches!(
            check(&tokens, &honorifics()),
            Err(StylerError::UnrecognizedPattern { .. })
        ));
    }

    #[test]
    fn test_empty_token_list_is_unsupported() {
        assert!(matches!(
            check(&[], &honorifics()),
            Err(StylerError::UnsupportedInput { .. })
        ));
    }
}
