//! Rule-based Korean politeness styling
//!
//! This crate conjugates a sentence, already split into morphemes by an
//! external analyzer, into the politeness register that fits a listener and
//! a social environment. Every substitution is recorded so the
//! transformation can be explained step by step.
//!
//! # Architecture
//!
//! - **Rule tables**: politeness rules, honorific patterns, abbreviations
//!   and irregular forms, loaded once and shared read-only
//! - **Stages**: preprocess, analyze, validate, conjugate, abbreviate and
//!   normalize irregular forms, each a function over the run state
//! - **Styler**: runs the stages over a fresh [`PipelineRun`] per call
//!
//! # Example
//!
//! ```rust
//! use politely_core::{Pretagged, Styler};
//!
//! // The analyzer is external; `Pretagged` reads its output written as text.
//! let styler = Styler::new(Pretagged).unwrap();
//!
//! let run = styler
//!     .process("밥/NNG+을/JKO 먹/VV+어/EF", "boss at work", "formal")
//!     .unwrap();
//!
//! assert_eq!(run.output(), "밥을 먹습니다.");
//! assert_eq!(run.history().len(), 4);
//! ```

pub mod analyzer;
pub mod error;
pub mod matcher;
pub mod rules;
pub mod run;
pub mod stages;
pub mod styler;
pub mod token;

pub use analyzer::{Analyzer, Pretagged, PretaggedError};
pub use error::{AnalyzerError, Result, StylerError};
pub use matcher::matches;
pub use rules::{PolitenessLevel, PolitenessRule, RuleSources, RuleTables};
pub use run::{HistoryEntry, PipelineRun, Stage, Substitution, Substitutions};
pub use styler::{PunctuationPolicy, Styler, StylerBuilder, StylerConfig};
pub use token::{Morpheme, Token};
