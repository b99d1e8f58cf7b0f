use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::catalog::CategorySet;
use crate::component::{Category, Component};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Catalog decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Component {id} is a {actual} but is listed under {listed_under}")]
    CategoryMismatch {
        id: String,
        listed_under: Category,
        actual: Category,
    },
    #[error("Catalog document must be a JSON object or array")]
    UnsupportedShape,
}

/// Where the parts come from.
///
/// Implementations perform any I/O once per call and hand back an immutable
/// snapshot; nothing downstream retries a failed fetch.
pub trait CatalogSource {
    fn fetch_all_grouped(&self) -> Result<CategorySet, CatalogError>;
}

/// An in-memory snapshot is its own source.
impl CatalogSource for CategorySet {
    fn fetch_all_grouped(&self) -> Result<CategorySet, CatalogError> {
        Ok(self.clone())
    }
}

/// Catalog stored as a JSON document on disk.
///
/// Accepts either the grouped form (`{"cpu": [...], "gpu": [...]}`) or a flat
/// array of components, each carrying its own `type`.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonCatalog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonCatalog {
    fn fetch_all_grouped(&self) -> Result<CategorySet, CatalogError> {
        let f = std::fs::File::open(&self.path)?;
        let document: serde_json::Value = serde_json::from_reader(std::io::BufReader::new(f))?;

        let set = match document {
            serde_json::Value::Object(_) => {
                let groups: BTreeMap<Category, Vec<Component>> = serde_json::from_value(document)?;
                CategorySet::try_from(groups)?
            }
            serde_json::Value::Array(_) => {
                let components: Vec<Component> = serde_json::from_value(document)?;
                CategorySet::from_components(components)
            }
            _ => return Err(CatalogError::UnsupportedShape),
        };

        tracing::debug!(
            path = %self.path.display(),
            components = set.len(),
            "loaded catalog"
        );
        Ok(set)
    }
}
