// tests/context_tests.rs
mod common;

use common::*;
use serial_test::serial;
use stagehand::context::{ACCOUNT_ID_ENV_VAR, REGION_ENV_VAR};
use stagehand::{ComposerError, IdentityContext};
use std::collections::HashMap;

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
  let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
  move |name: &str| vars.get(name).cloned()
}

#[test]
fn test_context_from_lookup() {
  setup_tracing();
  let ctx = IdentityContext::from_lookup(lookup_from(&[("AWS_REGION", "eu-west-1"), ("ACCOUNT_ID", "111122223333")]))
    .unwrap();
  assert_eq!(ctx.region(), "eu-west-1");
  assert_eq!(ctx.account_id(), "111122223333");
}

#[test]
fn test_context_missing_values_fail_fast() {
  setup_tracing();
  let err = IdentityContext::from_lookup(lookup_from(&[("ACCOUNT_ID", "111122223333")])).unwrap_err();
  assert!(matches!(err, ComposerError::MissingEnvironment { ref variable } if variable == "AWS_REGION"));

  let err = IdentityContext::from_lookup(lookup_from(&[("AWS_REGION", "eu-west-1"), ("ACCOUNT_ID", "  ")])).unwrap_err();
  assert!(matches!(err, ComposerError::MissingEnvironment { ref variable } if variable == "ACCOUNT_ID"));
}

#[test]
#[serial]
fn test_context_from_env() {
  setup_tracing();
  let saved: Vec<(&str, Option<String>)> = [REGION_ENV_VAR, ACCOUNT_ID_ENV_VAR]
    .into_iter()
    .map(|k| (k, std::env::var(k).ok()))
    .collect();

  std::env::set_var(REGION_ENV_VAR, "us-east-2");
  std::env::set_var(ACCOUNT_ID_ENV_VAR, "444455556666");
  let ctx = IdentityContext::from_env().unwrap();
  assert_eq!(ctx, IdentityContext::new("us-east-2", "444455556666"));

  std::env::remove_var(ACCOUNT_ID_ENV_VAR);
  assert!(matches!(
    IdentityContext::from_env(),
    Err(ComposerError::MissingEnvironment { .. })
  ));

  for (key, value) in saved {
    match value {
      Some(v) => std::env::set_var(key, v),
      None => std::env::remove_var(key),
    }
  }
}
