// stagehand/src/constructs.rs

//! Ready-made stage specs for the stages the bootstrap tool ships with.

use crate::action::{Category, ParamMap};
use crate::provider::{JENKINS_PROVIDER, S3_PROVIDER};
use crate::stage::{ActionSpec, StageSpec, DEFAULT_RUN_ORDER};

pub const S3_SOURCE_STAGE: &str = "Source-S3";
pub const JENKINS_BUILD_STAGE: &str = "Build";
/// Parameter-store key the S3 source stage reads its params from.
pub const S3_SOURCE_PARAMETER_KEY: &str = "source";
/// Parameter-store key the Jenkins build stage reads its params from.
pub const JENKINS_BUILD_PARAMETER_KEY: &str = "build";

/// Source stage pulling from S3. `params` and the store entry under
/// [`S3_SOURCE_PARAMETER_KEY`] together must carry `bucket` and `object_key`.
pub fn s3_source(params: ParamMap) -> StageSpec {
  StageSpec::new(S3_SOURCE_STAGE, Category::Source)
    .parameter_key(S3_SOURCE_PARAMETER_KEY)
    .action(
      ActionSpec::new("source", S3_PROVIDER)
        .owner("AWS")
        .category(Category::Source)
        .run_order(DEFAULT_RUN_ORDER)
        .params(params),
    )
}

/// Build stage invoking a Jenkins project. `params` and the store entry under
/// [`JENKINS_BUILD_PARAMETER_KEY`] together must carry `project_name` and
/// `server_url`.
pub fn jenkins_build(params: ParamMap) -> StageSpec {
  StageSpec::new(JENKINS_BUILD_STAGE, Category::Build)
    .parameter_key(JENKINS_BUILD_PARAMETER_KEY)
    .action(
      ActionSpec::new("Build", JENKINS_PROVIDER)
        .category(Category::Build)
        .run_order(DEFAULT_RUN_ORDER)
        .params(params),
    )
}
