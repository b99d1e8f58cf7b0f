pub mod catalog;
pub mod source;

pub use catalog::CategorySet;
pub use source::{CatalogError, CatalogSource, JsonCatalog};
