use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::component::Category;

/// Catalog-assigned component identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Self {
        ComponentId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(s: &str) -> Self {
        ComponentId(s.to_string())
    }
}

/// Content hash of a build's part list.
///
/// `sha256:` followed by the hex digest of one `category:id\n` line per
/// selected part, in canonical category order. Two builds with the same parts
/// share a fingerprint regardless of how they were produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildFingerprint(String);

impl BuildFingerprint {
    pub fn from_parts<'a, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = (Category, &'a ComponentId)>,
    {
        let mut lines: Vec<(Category, &ComponentId)> = parts.into_iter().collect();
        lines.sort_by_key(|(category, _)| *category);

        let mut hasher = Sha256::new();
        for (category, id) in lines {
            hasher.update(format!("{}:{}\n", category.as_str(), id.as_str()).as_bytes());
        }

        let hash = hasher.finalize();
        BuildFingerprint(format!("sha256:{}", hex::encode(hash)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
