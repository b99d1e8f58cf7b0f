use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use super::category::Category;
use super::specs::{
    leading_number, CaseSpecs, CoolerSpecs, CpuSpecs, GpuSpecs, MotherboardSpecs, PsuSpecs,
    RamSpecs, Specs, StorageSpecs,
};
use crate::types::identifiers::ComponentId;

#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("Component {id} has a negative price: {price}")]
    NegativePrice { id: String, price: f64 },
    #[error("Component {id} has a non-finite price")]
    NonFinitePrice { id: String },
    #[error("Component {id} has malformed {category} specs: {source}")]
    MalformedSpecs {
        id: String,
        category: Category,
        #[source]
        source: serde_json::Error,
    },
}

/// A catalog part. Immutable once fetched.
///
/// The category is carried by the specs variant, so a component can never
/// disagree with itself about what it is.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawComponent")]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub specs: Specs,
    pub vendor_links: BTreeMap<String, String>,
}

impl Component {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: f64,
        specs: Specs,
    ) -> Result<Self, ComponentError> {
        let id = ComponentId::new(id);
        validate_price(&id, price)?;

        Ok(Component {
            id,
            name: name.into(),
            brand: brand.into(),
            price,
            specs,
            vendor_links: BTreeMap::new(),
        })
    }

    pub fn with_vendor_link(mut self, vendor: impl Into<String>, url: impl Into<String>) -> Self {
        self.vendor_links.insert(vendor.into(), url.into());
        self
    }

    pub fn category(&self) -> Category {
        self.specs.category()
    }

    pub fn cpu(&self) -> Option<&CpuSpecs> {
        match &self.specs {
            Specs::Cpu(s) => Some(s),
            _ => None,
        }
    }

    pub fn motherboard(&self) -> Option<&MotherboardSpecs> {
        match &self.specs {
            Specs::Motherboard(s) => Some(s),
            _ => None,
        }
    }

    pub fn ram(&self) -> Option<&RamSpecs> {
        match &self.specs {
            Specs::Ram(s) => Some(s),
            _ => None,
        }
    }

    pub fn gpu(&self) -> Option<&GpuSpecs> {
        match &self.specs {
            Specs::Gpu(s) => Some(s),
            _ => None,
        }
    }

    pub fn storage(&self) -> Option<&StorageSpecs> {
        match &self.specs {
            Specs::Storage(s) => Some(s),
            _ => None,
        }
    }

    pub fn case(&self) -> Option<&CaseSpecs> {
        match &self.specs {
            Specs::Case(s) => Some(s),
            _ => None,
        }
    }

    pub fn psu(&self) -> Option<&PsuSpecs> {
        match &self.specs {
            Specs::Psu(s) => Some(s),
            _ => None,
        }
    }

    pub fn cooler(&self) -> Option<&CoolerSpecs> {
        match &self.specs {
            Specs::Cooler(s) => Some(s),
            _ => None,
        }
    }
}

fn validate_price(id: &ComponentId, price: f64) -> Result<(), ComponentError> {
    if !price.is_finite() {
        return Err(ComponentError::NonFinitePrice {
            id: id.as_str().to_string(),
        });
    }
    if price < 0.0 {
        return Err(ComponentError::NegativePrice {
            id: id.as_str().to_string(),
            price,
        });
    }
    Ok(())
}

/// Wire shape of a catalog row.
#[derive(Debug, Deserialize)]
struct RawComponent {
    id: ComponentId,
    #[serde(rename = "type")]
    category: Category,
    #[serde(default)]
    name: String,
    #[serde(default)]
    brand: String,
    #[serde(default)]
    price: serde_json::Value,
    #[serde(default)]
    specs: serde_json::Value,
    #[serde(default)]
    vendor_links: BTreeMap<String, String>,
}

impl TryFrom<RawComponent> for Component {
    type Error = ComponentError;

    fn try_from(raw: RawComponent) -> Result<Self, Self::Error> {
        // Catalog prices are sometimes stored as text; unparseable values read as 0.
        let price = match &raw.price {
            serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
            serde_json::Value::String(s) => leading_number(s).unwrap_or(0.0),
            _ => 0.0,
        };
        validate_price(&raw.id, price)?;

        let specs = Specs::from_value(raw.category, raw.specs).map_err(|source| {
            ComponentError::MalformedSpecs {
                id: raw.id.as_str().to_string(),
                category: raw.category,
                source,
            }
        })?;

        Ok(Component {
            id: raw.id,
            name: raw.name,
            brand: raw.brand,
            price,
            specs,
            vendor_links: raw.vendor_links,
        })
    }
}

#[derive(Serialize)]
struct ComponentRef<'a> {
    id: &'a ComponentId,
    #[serde(rename = "type")]
    category: Category,
    name: &'a str,
    brand: &'a str,
    price: f64,
    specs: &'a Specs,
    vendor_links: &'a BTreeMap<String, String>,
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ComponentRef {
            id: &self.id,
            category: self.category(),
            name: &self.name,
            brand: &self.brand,
            price: self.price,
            specs: &self.specs,
            vendor_links: &self.vendor_links,
        }
        .serialize(serializer)
    }
}
