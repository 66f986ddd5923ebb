// stagehand/src/provider/contract.rs

//! Defines the `ActionProvider` trait: the per-provider capability set the
//! builder dispatches to.

use crate::action::ParamMap;
use crate::error::{ComposerError, ComposerResult};

/// Defaults a provider contributes to every action it backs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderDefaults {
  /// Owner used when the action request does not name one.
  pub owner: Option<String>,
  /// Configuration entries used when neither the params nor the context supply them.
  pub config: ParamMap,
}

impl ProviderDefaults {
  pub fn with_owner<S: Into<String>>(owner: S) -> Self {
    Self {
      owner: Some(owner.into()),
      config: ParamMap::new(),
    }
  }
}

/// The contract a provider registers with the [`ProviderRegistry`](super::ProviderRegistry).
///
/// Implement this once per execution backend. Only `tag` and
/// `required_keys` are mandatory; `validate` checks presence of the
/// required keys unless overridden, and `defaults` contributes nothing.
pub trait ActionProvider: Send + Sync + 'static {
  /// Tag the provider is registered and looked up under (e.g. `"S3"`).
  fn tag(&self) -> &str;

  /// Keys that must be present in the merged configuration.
  fn required_keys(&self) -> &[&str];

  /// Checks a fully merged configuration. A `null` value counts as absent.
  fn validate(&self, config: &ParamMap) -> ComposerResult<()> {
    for key in self.required_keys() {
      match config.get(*key) {
        Some(value) if !value.is_null() => {}
        _ => {
          return Err(ComposerError::Validation {
            provider: self.tag().to_string(),
            key: (*key).to_string(),
          })
        }
      }
    }
    Ok(())
  }

  fn defaults(&self) -> ProviderDefaults {
    ProviderDefaults::default()
  }
}
