use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::component::{Category, Component, ComponentId};
use crate::selection::budgeting::round_cents;
use crate::types::identifiers::BuildFingerprint;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Component {id} is a {actual} but was placed in the {slot} slot")]
    CategoryMismatch {
        id: String,
        slot: Category,
        actual: Category,
    },
}

/// Read access to whatever parts have been chosen so far.
///
/// Compatibility rules are written against this so they apply equally to a
/// borrowed in-progress selection and to an owned, finished [`Build`].
pub trait PartLookup {
    fn part(&self, category: Category) -> Option<&Component>;
}

/// One component per category, keyed by the component's own category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<Category, Component>", into = "BTreeMap<Category, Component>")]
pub struct Build {
    parts: BTreeMap<Category, Component>,
}

impl Build {
    pub fn new() -> Self {
        Build {
            parts: BTreeMap::new(),
        }
    }

    /// Later components replace earlier ones of the same category.
    pub fn from_components(components: impl IntoIterator<Item = Component>) -> Self {
        let mut build = Build::new();
        for component in components {
            build.insert(component);
        }
        build
    }

    /// Place `component` in its category's slot, returning the part it replaced.
    pub fn insert(&mut self, component: Component) -> Option<Component> {
        self.parts.insert(component.category(), component)
    }

    pub fn get(&self, category: Category) -> Option<&Component> {
        self.parts.get(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &Component)> {
        self.parts.iter().map(|(c, p)| (*c, p))
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Categories with no part yet, in canonical order.
    pub fn missing(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| !self.parts.contains_key(c))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.parts.len() == Category::ALL.len()
    }

    pub fn contains_id(&self, id: &ComponentId) -> bool {
        self.parts.values().any(|p| &p.id == id)
    }

    pub fn total_price(&self) -> f64 {
        round_cents(self.parts.values().map(|p| p.price).sum())
    }

    pub fn fingerprint(&self) -> BuildFingerprint {
        BuildFingerprint::from_parts(self.parts.iter().map(|(c, p)| (*c, &p.id)))
    }
}

impl PartLookup for Build {
    fn part(&self, category: Category) -> Option<&Component> {
        self.get(category)
    }
}

impl TryFrom<BTreeMap<Category, Component>> for Build {
    type Error = BuildError;

    fn try_from(parts: BTreeMap<Category, Component>) -> Result<Self, Self::Error> {
        for (slot, component) in &parts {
            if component.category() != *slot {
                return Err(BuildError::CategoryMismatch {
                    id: component.id.as_str().to_string(),
                    slot: *slot,
                    actual: component.category(),
                });
            }
        }
        Ok(Build { parts })
    }
}

impl From<Build> for BTreeMap<Category, Component> {
    fn from(build: Build) -> Self {
        build.parts
    }
}

/// In-progress selection borrowing parts straight out of the catalog.
#[derive(Debug, Clone, Default)]
pub struct PartialBuild<'a> {
    parts: BTreeMap<Category, &'a Component>,
}

impl<'a> PartialBuild<'a> {
    pub fn new() -> Self {
        PartialBuild {
            parts: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, component: &'a Component) {
        self.parts.insert(component.category(), component);
    }

    /// The chosen part, borrowed for as long as the catalog it came from.
    pub fn get(&self, category: Category) -> Option<&'a Component> {
        self.parts.get(&category).copied()
    }

    pub fn remove(&mut self, category: Category) -> Option<&'a Component> {
        self.parts.remove(&category)
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn total_price(&self) -> f64 {
        self.parts.values().map(|p| p.price).sum()
    }

    /// Clone the borrowed parts into an owned [`Build`].
    pub fn to_build(&self) -> Build {
        Build::from_components(self.parts.values().map(|p| (*p).clone()))
    }
}

impl PartLookup for PartialBuild<'_> {
    fn part(&self, category: Category) -> Option<&Component> {
        self.get(category)
    }
}

impl<'b> From<&'b Build> for PartialBuild<'b> {
    fn from(build: &'b Build) -> Self {
        PartialBuild {
            parts: build.parts.iter().map(|(c, p)| (*c, p)).collect(),
        }
    }
}
