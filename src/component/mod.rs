pub mod category;
pub mod component;
pub mod specs;

pub use crate::types::identifiers::ComponentId;
pub use category::{Category, UnknownCategory};
pub use component::{Component, ComponentError};
pub use specs::{
    CaseSpecs, CoolerSpecs, CpuSpecs, GpuSpecs, MotherboardSpecs, PsuSpecs, RamSpecs, Specs,
    StorageSpecs, DEFAULT_MAX_GPU_LENGTH_MM,
};
