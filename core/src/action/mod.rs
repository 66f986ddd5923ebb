// stagehand/src/action/mod.rs

//! Action descriptors and the builder that validates them against provider contracts.

pub mod builder;
pub mod category;
pub mod descriptor;

pub use builder::{ActionBuilder, ActionRequest, ACCOUNT_ID_KEY, REGION_KEY};
pub use category::Category;
pub use descriptor::ActionDescriptor;

/// Provider-specific parameters and configuration: string keys to JSON values.
///
/// Ordered so descriptors serialize deterministically.
pub type ParamMap = std::collections::BTreeMap<String, serde_json::Value>;
