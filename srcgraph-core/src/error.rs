//! Errors produced while parsing specs or resolving routes.

use thiserror::Error;

/// A text or route-variable mapping did not match the expected grammar.
///
/// This is always a caller-side problem (bad user input, a malformed URL
/// coming back from the API) and never fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
  #[error("invalid {kind} spec {input:?}: {reason}")]
  InvalidFormat {
    /// Which kind of spec was being parsed (`person`, `pull request`, ...)
    kind: &'static str,
    /// The offending input, empty when a route variable was missing
    input: String,
    reason: String,
  },
}

impl SpecError {
  /// Build an [`SpecError::InvalidFormat`] for a malformed input string.
  pub fn invalid(kind: &'static str, input: impl Into<String>, reason: impl Into<String>) -> Self {
    Self::InvalidFormat {
      kind,
      input: input.into(),
      reason: reason.into(),
    }
  }

  /// Build an [`SpecError::InvalidFormat`] for a route variable that is absent.
  pub fn missing_var(kind: &'static str, key: &str) -> Self {
    Self::InvalidFormat {
      kind,
      input: String::new(),
      reason: format!("missing route variable `{key}`"),
    }
  }

  /// The spec kind this error was raised for.
  pub fn kind(&self) -> &'static str {
    match self {
      Self::InvalidFormat { kind, .. } => *kind,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_invalid_format_message() {
    let err = SpecError::invalid("person", "$x", "UID is not a number");
    assert_eq!(err.to_string(), "invalid person spec \"$x\": UID is not a number");
    assert_eq!(err.kind(), "person");
  }

  #[test]
  fn test_missing_var_message() {
    let err = SpecError::missing_var("pull request", "Pull");
    assert!(err.to_string().contains("missing route variable `Pull`"));
  }
}
