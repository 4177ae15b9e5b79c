//! Error types for the styling pipeline

use thiserror::Error;

/// Error produced by an external morphological analyzer
pub type AnalyzerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort a single styling invocation
#[derive(Error, Debug)]
pub enum StylerError {
    /// The sentence has no conjugable final ending (EF)
    #[error("no final ending (EF) found in analyzed sentence: {signature}")]
    UnsupportedInput {
        /// Every analyzed token signature, joined with `|`
        signature: String,
    },

    /// A final ending exists but no honorific pattern covers it
    #[error("final ending is not covered by any honorific pattern: {signature}")]
    UnrecognizedPattern {
        /// The joined signature of the offending token
        signature: String,
    },

    /// The (listener, environment) pair is absent from the politeness rules
    #[error("no politeness rule for listener '{listener}' in environment '{environment}'")]
    UnknownRuleKey {
        /// The requested listener
        listener: String,
        /// The requested environment
        environment: String,
    },

    /// Failure reported by the morphological analyzer, passed through as is
    #[error(transparent)]
    Analyzer(AnalyzerError),

    /// Rule table loading or validation error
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for styling operations
pub type Result<T> = std::result::Result<T, StylerError>;
