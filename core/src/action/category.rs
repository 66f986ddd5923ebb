// stagehand/src/action/category.rs

use serde::Serialize;
use std::fmt;

/// The kind of work an action performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
  Source,
  Build,
  Deploy,
  Approval,
  Test,
  Invoke,
}

impl Category {
  pub const ALL: [Category; 6] = [
    Category::Source,
    Category::Build,
    Category::Deploy,
    Category::Approval,
    Category::Test,
    Category::Invoke,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Source => "Source",
      Category::Build => "Build",
      Category::Deploy => "Deploy",
      Category::Approval => "Approval",
      Category::Test => "Test",
      Category::Invoke => "Invoke",
    }
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
