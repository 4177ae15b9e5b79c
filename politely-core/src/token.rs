//! Token model produced by the morphological analyzer
//!
//! A [`Token`] is one lexical unit (roughly a whitespace-delimited word) and
//! the ordered morphemes the analyzer split it into. Each morpheme renders as
//! `surface/tag`; a token's morphemes joined with `+` form its *signature*,
//! the unit every rule table is matched against.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between morphemes in a signature
pub const MORPHEME_SEPARATOR: char = '+';

/// Separator between surface and tag inside a morpheme
pub const TAG_SEPARATOR: char = '/';

/// Tag of a final ending, the marker of a finite predicate
pub const FINAL_ENDING_TAG: &str = "EF";

/// Punctuation that closes a sentence
pub const SENTENCE_FINAL_MARKS: [char; 3] = ['.', '?', '!'];

/// A surface string with its grammatical tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Morpheme {
    surface: String,
    tag: String,
}

impl Morpheme {
    /// Create a morpheme from its surface and tag
    pub fn new(surface: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            tag: tag.into(),
        }
    }

    /// Surface string
    pub fn surface(&self) -> &str {
        &self.surface
    }

    /// Grammatical tag
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.surface, TAG_SEPARATOR, self.tag)
    }
}

/// A lexical unit and its ordered morphemes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    lex: String,
    morphs: Vec<Morpheme>,
}

impl Token {
    /// Create a token from its lexical form and morphemes
    pub fn new(lex: impl Into<String>, morphs: Vec<Morpheme>) -> Self {
        Self {
            lex: lex.into(),
            morphs,
        }
    }

    /// Lexical form as it appeared in the sentence
    pub fn lex(&self) -> &str {
        &self.lex
    }

    /// Morphemes in order
    pub fn morphs(&self) -> &[Morpheme] {
        &self.morphs
    }

    /// `+`-joined `surface/tag` rendering of the morphemes
    pub fn signature(&self) -> String {
        self.morphs
            .iter()
            .map(Morpheme::to_string)
            .collect::<Vec<_>>()
            .join("+")
    }

    /// Whether any morpheme is a final ending
    pub fn has_final_ending(&self) -> bool {
        self.morphs.iter().any(|m| m.tag == FINAL_ENDING_TAG)
    }
}

/// Concatenate the surfaces of a signature, dropping the tags.
///
/// Each element contributes the part before its last `/`, so a surface that
/// itself contains a slash survives.
pub fn surface_of(signature: &str) -> String {
    signature
        .split(MORPHEME_SEPARATOR)
        .map(|element| {
            element
                .rsplit_once(TAG_SEPARATOR)
                .map_or(element, |(surface, _)| surface)
        })
        .collect()
}
