//! Sentence preprocessing
//!
//! The analyzer tags the final ending more reliably when the sentence ends
//! with punctuation, so a period is appended when none of `.`, `?`, `!` ends
//! the trimmed sentence.

use super::StageContext;
use crate::error::Result;
use crate::run::PipelineRun;
use crate::token::SENTENCE_FINAL_MARKS;

/// Trim the sentence and make sure it ends with sentence-final punctuation.
///
/// Returns the prepared sentence and whether a period was appended.
pub fn prepare(sentence: &str) -> (String, bool) {
    let trimmed = sentence.trim();
    if trimmed.ends_with(SENTENCE_FINAL_MARKS) {
        (trimmed.to_string(), false)
    } else {
        (format!("{trimmed}."), true)
    }
}

pub(crate) fn run(_ctx: &StageContext<'_>, mut run: PipelineRun) -> Result<PipelineRun> {
    let (prepared, appended) = prepare(run.input());
    if appended {
        run.mark_appended_period();
    }
    run.set_text(prepared);
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_period() {
        assert_eq!(prepare("밥 먹어"), ("밥 먹어.".to_string(), true));
    }

    #[test]
    fn test_keeps_existing_marks() {
        assert_eq!(prepare("밥 먹어."), ("밥 먹어.".to_string(), false));
        assert_eq!(prepare("밥 먹어?"), ("밥 먹어?".to_string(), false));
        assert_eq!(prepare("밥 먹어!"), ("밥 먹어!".to_string(), false));
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(prepare("  밥 먹어?  \n"), ("밥 먹어?".to_string(), false));
        assert_eq!(prepare(" 밥 먹어 "), ("밥 먹어.".to_string(), true));
    }
}
