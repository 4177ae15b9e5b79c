//! Rule tables driving the styling pipeline
//!
//! Four read-only tables are loaded once and then frozen:
//! politeness rules, honorific patterns, abbreviations and irregular forms.
//! A [`RuleTables`] value is shared behind an `Arc` by every invocation.

pub(crate) mod config;
pub mod loader;
pub mod tables;

use std::path::Path;
use std::sync::Arc;

use crate::error::{Result, StylerError};

pub use loader::RuleSources;
pub use tables::{
    HonorificPattern, HonorificTable, PolitenessLevel, PolitenessRule, PolitenessTable,
    SubstitutionRule, SubstitutionTable,
};

/// The four rule tables
#[derive(Debug, Clone)]
pub struct RuleTables {
    politeness: PolitenessTable,
    honorifics: HonorificTable,
    abbreviations: SubstitutionTable,
    irregulars: SubstitutionTable,
}

impl RuleTables {
    /// Assemble tables that have already been built
    pub fn new(
        politeness: PolitenessTable,
        honorifics: HonorificTable,
        abbreviations: SubstitutionTable,
        irregulars: SubstitutionTable,
    ) -> Self {
        Self {
            politeness,
            honorifics,
            abbreviations,
            irregulars,
        }
    }

    /// Default tables compiled into the crate, shared process-wide
    pub fn embedded() -> Result<Arc<Self>> {
        loader::embedded()
    }

    /// Load tables from a directory holding the four TOML files
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        loader::from_dir(dir.as_ref())
    }

    /// Build tables from TOML strings
    pub fn from_sources(sources: RuleSources<'_>) -> Result<Self> {
        loader::from_sources(sources)
    }

    /// Politeness rule for a (listener, environment) pair
    pub fn resolve(&self, listener: &str, environment: &str) -> Result<&PolitenessRule> {
        self.politeness
            .lookup(listener, environment)
            .ok_or_else(|| StylerError::UnknownRuleKey {
                listener: listener.to_string(),
                environment: environment.to_string(),
            })
    }

    /// Listener categories, in table order
    pub fn listeners(&self) -> Vec<&str> {
        self.politeness.listeners()
    }

    /// Environment categories, in table order
    pub fn environments(&self) -> Vec<&str> {
        self.politeness.environments()
    }

    pub fn politeness(&self) -> &PolitenessTable {
        &self.politeness
    }

    pub fn honorifics(&self) -> &HonorificTable {
        &self.honorifics
    }

    pub fn abbreviations(&self) -> &SubstitutionTable {
        &self.abbreviations
    }

    pub fn irregulars(&self) -> &SubstitutionTable {
        &self.irregulars
    }
}
