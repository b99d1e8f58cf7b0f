use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::source::CatalogError;
use crate::component::{Category, Component, ComponentId};

/// Catalog snapshot: every available part, grouped by category.
///
/// Read-only for the duration of a generation; the generator only ever
/// borrows from it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Category, Vec<Component>>",
    into = "BTreeMap<Category, Vec<Component>>"
)]
pub struct CategorySet {
    groups: BTreeMap<Category, Vec<Component>>,
}

impl CategorySet {
    pub fn new() -> Self {
        CategorySet {
            groups: BTreeMap::new(),
        }
    }

    /// Group components by their own category, preserving input order within
    /// each group.
    pub fn from_components(components: impl IntoIterator<Item = Component>) -> Self {
        let mut set = CategorySet::new();
        for component in components {
            set.push(component);
        }
        set
    }

    pub fn push(&mut self, component: Component) {
        self.groups
            .entry(component.category())
            .or_default()
            .push(component);
    }

    /// The pool for one category; empty if the catalog has none.
    pub fn components(&self, category: Category) -> &[Component] {
        self.groups.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Required categories with no parts at all, in canonical order.
    pub fn missing_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.components(*c).is_empty())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.groups.values().flatten()
    }

    pub fn find(&self, id: &ComponentId) -> Option<&Component> {
        self.iter().find(|c| &c.id == id)
    }

    /// Parts of `category` priced within `[min, max]`, cheapest first.
    pub fn by_price_range(&self, category: Category, min: f64, max: f64) -> Vec<&Component> {
        let mut matches: Vec<&Component> = self
            .components(category)
            .iter()
            .filter(|c| c.price >= min && c.price <= max)
            .collect();
        matches.sort_by(|a, b| a.price.total_cmp(&b.price));
        matches
    }

    /// Case-insensitive substring match on name or brand across every
    /// category, cheapest first. An empty term matches nothing.
    pub fn search(&self, term: &str) -> Vec<&Component> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<&Component> = self
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle) || c.brand.to_lowercase().contains(&needle)
            })
            .collect();
        matches.sort_by(|a, b| a.price.total_cmp(&b.price));
        matches
    }

    /// A narrowed snapshot holding only the parts `keep` accepts.
    ///
    /// Used for caller-side preferences such as a brand filter. Narrowing can
    /// empty a category, which generation then reports as an incomplete catalog.
    pub fn filter<F>(&self, mut keep: F) -> CategorySet
    where
        F: FnMut(&Component) -> bool,
    {
        CategorySet::from_components(self.iter().filter(|c| keep(c)).cloned())
    }
}

impl TryFrom<BTreeMap<Category, Vec<Component>>> for CategorySet {
    type Error = CatalogError;

    fn try_from(groups: BTreeMap<Category, Vec<Component>>) -> Result<Self, Self::Error> {
        for (category, components) in &groups {
            if let Some(misfiled) = components.iter().find(|c| c.category() != *category) {
                return Err(CatalogError::CategoryMismatch {
                    id: misfiled.id.as_str().to_string(),
                    listed_under: *category,
                    actual: misfiled.category(),
                });
            }
        }
        Ok(CategorySet { groups })
    }
}

impl From<CategorySet> for BTreeMap<Category, Vec<Component>> {
    fn from(set: CategorySet) -> Self {
        set.groups
    }
}
