use regex::Regex;
use thiserror::Error;

use crate::who::WhoVariant;

#[derive(Error, Debug)]
pub enum NameError {
    #[error("Unable to extract clade from name '{0}'")]
    MissingClade(String),

    #[error("Expected at most one {kind} in '{name}', but found: {candidates:?}")]
    AmbiguousComponent {
        name: String,
        kind: &'static str,
        candidates: Vec<String>,
    },

    #[error("Failed to initialize regex: {0}")]
    Regex(#[from] regex::Error),
}

/// A clade label such as `21K (Omicron, BA.1)` split into its parts.
///
/// The list fields are `None` when the label carries no details in parentheses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CladeName {
    pub clade: String,
    pub lineages: Option<Vec<String>>,
    pub who: Option<WhoVariant>,
    pub version: Option<String>,
    pub other_names: Option<Vec<String>>,
}

pub struct NameParser {
    name_regex: Regex,
    lineage_regex: Regex,
    version_regex: Regex,
}

impl NameParser {
    pub fn new() -> Result<Self, NameError> {
        Ok(NameParser {
            name_regex: Regex::new(r"^(?P<clade>.*?)( \((?P<details>[^)]*)\))?$")?,
            lineage_regex: Regex::new(r"^(~)?(A|B|C|D|BA|BQ|P|XBB|)(\.\d+?(/\d+)?)*$")?,
            version_regex: Regex::new(r"^V\d$")?,
        })
    }

    pub fn parse(&self, name: &str) -> Result<CladeName, NameError> {
        let captures = self
            .name_regex
            .captures(name)
            .ok_or_else(|| NameError::MissingClade(name.to_string()))?;

        let clade = captures.name("clade").map_or("", |m| m.as_str());
        if clade.is_empty() {
            return Err(NameError::MissingClade(name.to_string()));
        }

        let details = match captures.name("details").map(|m| m.as_str()) {
            Some(d) if !d.is_empty() => d,
            _ => {
                return Ok(CladeName {
                    clade: clade.to_string(),
                    ..Default::default()
                });
            }
        };

        // e.g. "B.1", "Omicron, B.1.1.529", "Beta, V2, B.1.351", "EU1"
        let components: Vec<&str> = details.split(',').map(str::trim).collect();

        let who = exactly_one(name, "WHO variant", &components, |c| {
            WhoVariant::parse(c).is_some()
        })?;
        let version = exactly_one(name, "version", &components, |c| {
            self.version_regex.is_match(c)
        })?;
        let lineages: Vec<String> = components
            .iter()
            .filter(|c| self.lineage_regex.is_match(c))
            .map(|c| c.to_string())
            .collect();
        let other_names: Vec<String> = components
            .iter()
            .filter(|&&c| Some(c) != who && Some(c) != version)
            .filter(|&&c| !lineages.iter().any(|l| l.as_str() == c))
            .map(|c| c.to_string())
            .collect();

        Ok(CladeName {
            clade: clade.to_string(),
            lineages: Some(lineages),
            who: who.and_then(WhoVariant::parse),
            version: version.map(str::to_string),
            other_names: Some(other_names),
        })
    }
}

fn exactly_one<'a>(
    name: &str,
    kind: &'static str,
    components: &[&'a str],
    predicate: impl Fn(&str) -> bool,
) -> Result<Option<&'a str>, NameError> {
    let candidates: Vec<&str> = components.iter().copied().filter(|c| predicate(c)).collect();

    if candidates.len() > 1 {
        return Err(NameError::AmbiguousComponent {
            name: name.to_string(),
            kind,
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
        });
    }

    Ok(candidates.first().copied())
}
