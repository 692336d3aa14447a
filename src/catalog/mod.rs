pub mod grade;
pub mod types;

pub use grade::GradeBand;
pub use types::{
    BrailleContext, Family, FamilyOverride, ItemMetadata, Resource, ResolvedResourceSet,
    Selection, UserPreference,
};
