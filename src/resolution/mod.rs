pub mod error;
pub mod facade;
pub mod family;
pub mod flags;
pub mod preferences;

pub use error::{ResolutionError, ResolutionErrorKind};
pub use facade::{ResolveRequest, Resolver};
pub use family::{merge_for_family, merge_global_resource};
pub use flags::{FlagContext, FlagRule, FlagRuleRegistry, apply_flags};
pub use preferences::apply_preferences;
