pub mod descriptor;
mod legacy;
pub mod resolve;
pub mod snapshot;

pub use descriptor::{CategoryDescriptor, CompoundPrefixSet};
pub use snapshot::Taxonomy;
