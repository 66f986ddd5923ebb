// stagehand/src/context.rs

//! The deployment identity every action descriptor is attributed to.
//!
//! An `IdentityContext` is resolved once at process start and then passed
//! explicitly into each builder and composer call. It is never read from
//! ambient global state by the composer itself.

use crate::error::{ComposerError, ComposerResult};
use tracing::{event, Level};

/// Environment variable holding the deployment region.
pub const REGION_ENV_VAR: &str = "AWS_REGION";
/// Environment variable holding the deployment account id.
pub const ACCOUNT_ID_ENV_VAR: &str = "ACCOUNT_ID";

/// Immutable deployment region and account id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityContext {
  region: String,
  account_id: String,
}

impl IdentityContext {
  pub fn new<R: Into<String>, A: Into<String>>(region: R, account_id: A) -> Self {
    Self {
      region: region.into(),
      account_id: account_id.into(),
    }
  }

  /// Reads `AWS_REGION` and `ACCOUNT_ID` from the process environment.
  ///
  /// Fails on the first missing or empty variable. Call this once at startup
  /// and abort if it errors; there is no partial context.
  pub fn from_env() -> ComposerResult<Self> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Same as [`IdentityContext::from_env`] but with an injectable lookup.
  pub fn from_lookup<F>(lookup: F) -> ComposerResult<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let fetch = |name: &str| {
      lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
          event!(Level::ERROR, variable = name, "Deployment identity is incomplete.");
          ComposerError::MissingEnvironment {
            variable: name.to_string(),
          }
        })
    };

    let region = fetch(REGION_ENV_VAR)?;
    let account_id = fetch(ACCOUNT_ID_ENV_VAR)?;
    event!(Level::DEBUG, %region, %account_id, "Resolved deployment identity.");
    Ok(Self { region, account_id })
  }

  pub fn region(&self) -> &str {
    &self.region
  }

  pub fn account_id(&self) -> &str {
    &self.account_id
  }
}
