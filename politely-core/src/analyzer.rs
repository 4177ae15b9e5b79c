//! Morphological analyzer capability
//!
//! The styler never analyzes text itself. It calls an [`Analyzer`] supplied
//! by the caller and consumes the tokens it returns. Any closure of the shape
//! `Fn(&str) -> Result<Vec<Token>, AnalyzerError>` is an analyzer.
//!
//! [`Pretagged`] reads analyzer output that was rendered as text, which is
//! how the CLI and the tests feed sentences through the pipeline.

use thiserror::Error;

use crate::error::AnalyzerError;
use crate::token::{Morpheme, Token, MORPHEME_SEPARATOR, SENTENCE_FINAL_MARKS, TAG_SEPARATOR};

/// Splits a sentence into tokens of ordered morphemes
pub trait Analyzer: Send + Sync {
    /// Analyze one preprocessed sentence
    fn analyze(&self, text: &str) -> Result<Vec<Token>, AnalyzerError>;
}

impl<F> Analyzer for F
where
    F: Fn(&str) -> Result<Vec<Token>, AnalyzerError> + Send + Sync,
{
    fn analyze(&self, text: &str) -> Result<Vec<Token>, AnalyzerError> {
        self(text)
    }
}

/// Tag given to sentence-final punctuation split off a pre-tagged token
pub const SENTENCE_FINAL_TAG: &str = "SF";

/// Errors from reading pre-tagged text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PretaggedError {
    /// An element is not of the form `surface/TAG`
    #[error("malformed morpheme '{element}' in token '{token}'")]
    MalformedMorpheme {
        /// The offending element
        element: String,
        /// The whole token it appeared in
        token: String,
    },

    /// Nothing but whitespace was given
    #[error("no tokens in pre-tagged text")]
    Empty,
}

/// Analyzer for text that is already tagged
///
/// Tokens are separated by whitespace and written as
/// `[lex=]surface/TAG(+surface/TAG)*`, e.g. `합니다=하/VV+ㅂ니다/EF`.
/// Without `lex=` the lexical form is the concatenation of the surfaces.
/// Sentence-final marks after the last tag (as appended by preprocessing)
/// become a separate `SF` morpheme and are appended to the lexical form.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pretagged;

impl Pretagged {
    /// Parse pre-tagged text into tokens
    pub fn parse(text: &str) -> Result<Vec<Token>, PretaggedError> {
        let tokens = text
            .split_whitespace()
            .map(parse_token)
            .collect::<Result<Vec<_>, _>>()?;

        if tokens.is_empty() {
            return Err(PretaggedError::Empty);
        }
        Ok(tokens)
    }
}

impl Analyzer for Pretagged {
    fn analyze(&self, text: &str) -> Result<Vec<Token>, AnalyzerError> {
        Ok(Self::parse(text)?)
    }
}

fn parse_token(raw: &str) -> Result<Token, PretaggedError> {
    let (lex, body) = match raw.split_once('=') {
        Some((lex, body)) if !lex.is_empty() => (Some(lex), body),
        _ => (None, raw),
    };

    let tagged = body.trim_end_matches(SENTENCE_FINAL_MARKS);
    let punctuation = &body[tagged.len()..];

    let mut morphs = Vec::new();
    if !tagged.is_empty() {
        for element in tagged.split(MORPHEME_SEPARATOR) {
            match element.rsplit_once(TAG_SEPARATOR) {
                Some((surface, tag)) if !surface.is_empty() && !tag.is_empty() => {
                    morphs.push(Morpheme::new(surface, tag));
                }
                _ => {
                    return Err(PretaggedError::MalformedMorpheme {
                        element: element.to_string(),
                        token: raw.to_string(),
                    })
                }
            }
        }
    }

    let mut lex = lex.map_or_else(
        || morphs.iter().map(Morpheme::surface).collect::<String>(),
        str::to_string,
    );
    let already_final = morphs
        .last()
        .is_some_and(|morph| morph.tag() == SENTENCE_FINAL_TAG);
    // an explicit SF morpheme wins over marks appended after it
    if !punctuation.is_empty() && !already_final {
        morphs.push(Morpheme::new(punctuation, SENTENCE_FINAL_TAG));
        lex.push_str(punctuation);
    }

    Ok(Token::new(lex, morphs))
}
