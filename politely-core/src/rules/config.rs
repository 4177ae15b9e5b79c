//! TOML schema for the four rule tables
//!
//! Each table is an array of tables so that file order survives parsing.

use serde::{Deserialize, Serialize};

use super::tables::{
    HonorificPattern, HonorificTable, PolitenessLevel, PolitenessRule, PolitenessTable,
    SubstitutionRule, SubstitutionTable,
};
use crate::token::{MORPHEME_SEPARATOR, TAG_SEPARATOR};

/// `politeness.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolitenessConfig {
    #[serde(default, rename = "rule")]
    pub rules: Vec<PolitenessEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolitenessEntry {
    pub listener: String,
    pub environment: String,
    pub politeness: u8,
    #[serde(default)]
    pub reason: String,
}

/// `honorifics.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HonorificsConfig {
    #[serde(default, rename = "pattern")]
    pub patterns: Vec<PatternEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternEntry {
    pub key: String,
    pub casual: String,
    pub polite: String,
    pub formal: String,
}

/// `abbreviations.toml` and `irregulars.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubstitutionConfig {
    #[serde(default, rename = "rule")]
    pub rules: Vec<SubstitutionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionEntry {
    pub key: String,
    pub value: String,
}

impl PolitenessConfig {
    pub(crate) fn into_table(self) -> Result<PolitenessTable, String> {
        if self.rules.is_empty() {
            return Err("No politeness rules defined".to_string());
        }

        let mut rules = Vec::with_capacity(self.rules.len());
        for entry in self.rules {
            if entry.listener.trim().is_empty() || entry.environment.trim().is_empty() {
                return Err("Politeness rule with empty listener or environment".to_string());
            }
            let level = PolitenessLevel::try_from(entry.politeness).map_err(|e| {
                format!(
                    "Invalid politeness for listener '{}' in environment '{}': {e}",
                    entry.listener, entry.environment
                )
            })?;
            rules.push(PolitenessRule {
                listener: entry.listener,
                environment: entry.environment,
                level,
                reason: entry.reason,
            });
        }

        PolitenessTable::new(rules)
    }
}

impl HonorificsConfig {
    pub(crate) fn into_table(self) -> Result<HonorificTable, String> {
        if self.patterns.is_empty() {
            return Err("No honorific patterns defined".to_string());
        }

        for entry in &self.patterns {
            for signature in [&entry.key, &entry.casual, &entry.polite, &entry.formal] {
                validate_signature(signature)
                    .map_err(|e| format!("Invalid honorific pattern '{}': {e}", entry.key))?;
            }
        }

        Ok(HonorificTable::new(
            self.patterns
                .into_iter()
                .map(|entry| HonorificPattern {
                    key: entry.key,
                    casual: entry.casual,
                    polite: entry.polite,
                    formal: entry.formal,
                })
                .collect(),
        ))
    }
}

impl SubstitutionConfig {
    pub(crate) fn into_table(self) -> Result<SubstitutionTable, String> {
        if let Some(entry) = self.rules.iter().find(|entry| entry.key.is_empty()) {
            return Err(format!(
                "Substitution rule with empty key (value '{}')",
                entry.value
            ));
        }

        Ok(SubstitutionTable::new(
            self.rules
                .into_iter()
                .map(|entry| SubstitutionRule {
                    key: entry.key,
                    value: entry.value,
                })
                .collect(),
        ))
    }
}

/// Check that a signature is a `+`-joined list of `surface/tag` elements
fn validate_signature(signature: &str) -> Result<(), String> {
    if signature.is_empty() {
        return Err("empty signature".to_string());
    }

    for element in signature.split(MORPHEME_SEPARATOR) {
        match element.rsplit_once(TAG_SEPARATOR) {
            Some((surface, tag)) if !surface.is_empty() && !tag.is_empty() => {}
            _ => return Err(format!("'{element}' is not of the form surface/tag")),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_politeness_deserialize() {
        let toml_str = r#"
            [[rule]]
            listener = "friend"
            environment = "formal"
            politeness = 2
            reason = "A formal setting."

            [[rule]]
            listener = "friend"
            environment = "informal"
            politeness = 1
        "#;

        let config: PolitenessConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.rules.len(), 2);
        assert_eq!(config.rules[1].reason, "");

        let table = config.into_table().unwrap();
        assert_eq!(
            table.lookup("friend", "formal").map(|r| r.level),
            Some(PolitenessLevel::Polite)
        );
    }

    #[test]
    fn test_politeness_out_of_range() {
        let toml_str = r#"
            [[rule]]
            listener = "friend"
            environment = "formal"
            politeness = 5
        "#;

        let config: PolitenessConfig = toml::from_str(toml_str).unwrap();
        let err = config.into_table().unwrap_err();
        assert!(err.contains("politeness level must be 1, 2 or 3"));
    }

    #[test]
    fn test_honorifics_keep_file_order() {
        let toml_str = r#"
            [[pattern]]
            key = "어/EF"
            casual = "어/EF"
            polite = "어요/EF"
            formal = "습니다/EF"

            [[pattern]]
            key = "나/NP"
            casual = "나/NP"
            polite = "저/NP"
            formal = "저/NP"
        "#;

        let config: HonorificsConfig = toml::from_str(toml_str).unwrap();
        let table = config.into_table().unwrap();
        let keys: Vec<_> = table.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["어/EF", "나/NP"]);
    }

    #[test]
    fn test_malformed_signature_rejected() {
        let toml_str = r#"
            [[pattern]]
            key = "어EF"
            casual = "어/EF"
            polite = "어요/EF"
            formal = "습니다/EF"
        "#;

        let config: HonorificsConfig = toml::from_str(toml_str).unwrap();
        assert!(config.into_table().is_err());
    }

    #[test]
    fn test_empty_substitution_key_rejected() {
        let toml_str = r#"
            [[rule]]
            key = ""
            value = "x"
        "#;

        let config: SubstitutionConfig = toml::from_str(toml_str).unwrap();
        assert!(config.into_table().is_err());
    }

    #[test]
    fn test_empty_substitution_table_allowed() {
        let config: SubstitutionConfig = toml::from_str("").unwrap();
        assert!(config.into_table().unwrap().is_empty());
    }

    #[test]
    fn test_validate_signature() {
        assert!(validate_signature("하/VV+ㅂ니다/EF").is_ok());
        assert!(validate_signature("./SF").is_ok());
        assert!(validate_signature("하/VV+").is_err());
        assert!(validate_signature("/EF").is_err());
    }
}
