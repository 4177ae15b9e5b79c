//! Rule table loader
//!
//! Parses the embedded default tables once per process and loads external
//! tables from a directory.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use super::config::{HonorificsConfig, PolitenessConfig, SubstitutionConfig};
use super::RuleTables;
use crate::error::{Result, StylerError};

/// File names expected in a rule table directory
pub const POLITENESS_FILE: &str = "politeness.toml";
pub const HONORIFICS_FILE: &str = "honorifics.toml";
pub const ABBREVIATIONS_FILE: &str = "abbreviations.toml";
pub const IRREGULARS_FILE: &str = "irregulars.toml";

static EMBEDDED: OnceLock<std::result::Result<Arc<RuleTables>, String>> = OnceLock::new();

/// TOML sources of the four tables
#[derive(Debug, Clone, Copy)]
pub struct RuleSources<'a> {
    pub politeness: &'a str,
    pub honorifics: &'a str,
    pub abbreviations: &'a str,
    pub irregulars: &'a str,
}

impl RuleSources<'static> {
    /// Tables compiled into the crate
    pub fn embedded() -> Self {
        Self {
            politeness: include_str!("../../configs/rules/politeness.toml"),
            honorifics: include_str!("../../configs/rules/honorifics.toml"),
            abbreviations: include_str!("../../configs/rules/abbreviations.toml"),
            irregulars: include_str!("../../configs/rules/irregulars.toml"),
        }
    }
}

/// Default tables, parsed on first access and shared afterwards
pub(crate) fn embedded() -> Result<Arc<RuleTables>> {
    EMBEDDED
        .get_or_init(|| {
            parse_sources(RuleSources::embedded(), "embedded").map(|tables| {
                tracing::debug!(
                    honorifics = tables.honorifics().len(),
                    abbreviations = tables.abbreviations().len(),
                    irregulars = tables.irregulars().len(),
                    "loaded embedded rule tables"
                );
                Arc::new(tables)
            })
        })
        .clone()
        .map_err(StylerError::Configuration)
}

/// Build tables from TOML strings
pub(crate) fn from_sources(sources: RuleSources<'_>) -> Result<RuleTables> {
    parse_sources(sources, "inline").map_err(StylerError::Configuration)
}

/// Load the four table files from a directory
pub(crate) fn from_dir(dir: &Path) -> Result<RuleTables> {
    let read = |name: &str| {
        let path = dir.join(name);
        std::fs::read_to_string(&path).map_err(|e| {
            StylerError::Configuration(format!(
                "Failed to read file '{}': {}",
                path.display(),
                e
            ))
        })
    };

    let politeness = read(POLITENESS_FILE)?;
    let honorifics = read(HONORIFICS_FILE)?;
    let abbreviations = read(ABBREVIATIONS_FILE)?;
    let irregulars = read(IRREGULARS_FILE)?;

    let sources = RuleSources {
        politeness: &politeness,
        honorifics: &honorifics,
        abbreviations: &abbreviations,
        irregulars: &irregulars,
    };

    let origin = dir.display().to_string();
    let tables = parse_sources(sources, &origin).map_err(StylerError::Configuration)?;
    tracing::debug!(dir = %origin, "loaded rule tables");
    Ok(tables)
}

fn parse_sources(sources: RuleSources<'_>, origin: &str) -> std::result::Result<RuleTables, String> {
    let politeness: PolitenessConfig = parse(sources.politeness, POLITENESS_FILE, origin)?;
    let honorifics: HonorificsConfig = parse(sources.honorifics, HONORIFICS_FILE, origin)?;
    let abbreviations: SubstitutionConfig =
        parse(sources.abbreviations, ABBREVIATIONS_FILE, origin)?;
    let irregulars: SubstitutionConfig = parse(sources.irregulars, IRREGULARS_FILE, origin)?;

    Ok(RuleTables::new(
        politeness
            .into_table()
            .map_err(in_file(POLITENESS_FILE, origin))?,
        honorifics
            .into_table()
            .map_err(in_file(HONORIFICS_FILE, origin))?,
        abbreviations
            .into_table()
            .map_err(in_file(ABBREVIATIONS_FILE, origin))?,
        irregulars
            .into_table()
            .map_err(in_file(IRREGULARS_FILE, origin))?,
    ))
}

fn in_file<'a>(name: &'a str, origin: &'a str) -> impl Fn(String) -> String + 'a {
    move |e| format!("{name} ({origin}): {e}")
}

fn parse<T: serde::de::DeserializeOwned>(
    source: &str,
    name: &str,
    origin: &str,
) -> std::result::Result<T, String> {
    toml::from_str(source).map_err(|e| format!("Failed to parse {name} ({origin}): {e}"))
}
