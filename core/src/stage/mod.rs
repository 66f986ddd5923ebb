// stagehand/src/stage/mod.rs

//! Stage specifications, the composer that applies category defaults, and
//! the resulting immutable `Stage`.

pub mod composer;
pub mod definition;
pub mod spec;

pub use composer::StageComposer;
pub use definition::Stage;
pub use spec::{ActionSpec, StageSpec};

/// Timeout given to `Build` actions that do not set one.
pub const DEFAULT_BUILD_TIMEOUT: u64 = 20;
/// Run order given to actions that do not set one.
pub const DEFAULT_RUN_ORDER: u32 = 1;
/// Config key the build timeout is recorded under.
pub const TIMEOUT_KEY: &str = "timeout";
