pub mod build;
pub mod build_result;
pub mod identifiers;

pub use build::{Build, BuildError, PartLookup, PartialBuild};
pub use build_result::{
    utilization, FailedAttempt, GeneratedBuild, GenerationError, GenerationResult,
};
pub use identifiers::{BuildFingerprint, ComponentId};
