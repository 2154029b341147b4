use crate::error::PolicyLoadError;
use crate::key::RightKey;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// On-disk shape. Sections are optional here so that a missing one can be
/// reported by name instead of as a generic parse failure.
#[derive(Debug, Default, Deserialize)]
struct PolicyDocument {
    #[serde(default)]
    policies: Option<PoliciesSection>,
    #[serde(default)]
    objects: Option<ObjectsSection>,
}

#[derive(Debug, Default, Deserialize)]
struct PoliciesSection {
    #[serde(default)]
    allowed_grants: Option<Vec<Vec<String>>>,
}

#[derive(Debug, Default, Deserialize)]
struct ObjectsSection {
    #[serde(default)]
    tools: Option<BTreeMap<String, Vec<String>>>,
}

/// Loaded policy. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    allowed_grants: HashSet<RightKey>,
    initial_grants: HashSet<RightKey>,
}

impl Policy {
    pub fn new(
        allowed_grants: impl IntoIterator<Item = RightKey>,
        initial_grants: impl IntoIterator<Item = RightKey>,
    ) -> Self {
        Self {
            allowed_grants: allowed_grants.into_iter().collect(),
            initial_grants: initial_grants.into_iter().collect(),
        }
    }

    /// Load a YAML policy file. Tool listings under `objects.tools` are
    /// granted to `default_subject` at start.
    pub fn from_file(path: &Path, default_subject: &str) -> Result<Self, PolicyLoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| PolicyLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content, default_subject)
    }

    pub fn from_yaml_str(content: &str, default_subject: &str) -> Result<Self, PolicyLoadError> {
        let de = serde_yaml::Deserializer::from_str(content);
        let doc: PolicyDocument = serde_ignored::deserialize(de, |path| {
            tracing::warn!("policy: ignoring unknown field '{}'", path);
        })
        .map_err(|e| PolicyLoadError::Parse {
            message: e.to_string(),
        })?;

        let grants = doc
            .policies
            .and_then(|p| p.allowed_grants)
            .ok_or(PolicyLoadError::MissingSection {
                section: "policies.allowed_grants",
            })?;
        let tools = doc
            .objects
            .and_then(|o| o.tools)
            .ok_or(PolicyLoadError::MissingSection {
                section: "objects.tools",
            })?;

        let mut allowed_grants = HashSet::with_capacity(grants.len());
        for (index, entry) in grants.into_iter().enumerate() {
            let [subject, tool, right]: [String; 3] = entry
                .try_into()
                .map_err(|e: Vec<String>| PolicyLoadError::InvalidGrant {
                    index,
                    len: e.len(),
                })?;
            let key = RightKey::new(subject, tool, right);
            if let Some(field) = key.empty_component() {
                return Err(PolicyLoadError::EmptyIdentifier {
                    location: format!("policies.allowed_grants[{}]", index),
                    field,
                });
            }
            allowed_grants.insert(key);
        }

        let mut initial_grants = HashSet::new();
        for (tool, rights) in tools {
            for (i, right) in rights.into_iter().enumerate() {
                let key = RightKey::new(default_subject, tool.as_str(), right);
                if let Some(field) = key.empty_component() {
                    return Err(PolicyLoadError::EmptyIdentifier {
                        location: format!("objects.tools.{}[{}]", tool, i),
                        field,
                    });
                }
                initial_grants.insert(key);
            }
        }

        tracing::debug!(
            allowed = allowed_grants.len(),
            initial = initial_grants.len(),
            "policy loaded"
        );

        Ok(Self {
            allowed_grants,
            initial_grants,
        })
    }

    /// Whether `key` may legitimately be granted during a run.
    pub fn allows(&self, key: &RightKey) -> bool {
        self.allowed_grants.contains(key)
    }

    pub fn allowed_grants(&self) -> &HashSet<RightKey> {
        &self.allowed_grants
    }

    pub fn initial_grants(&self) -> &HashSet<RightKey> {
        &self.initial_grants
    }
}
